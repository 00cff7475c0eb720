use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use latina_analyzer::{compile_lexicon, Analyzer};
use latina_morph::{clean_input, forms_match, inflect, Inflection, LexiconEntry};
use latina_protocol::CompiledLexicon;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Generates Latin paradigms and compiles them to an rkyv form index")]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON lexicon into a binary form index
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Print the paradigm tables of a JSON lexicon
    Inflect {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Only entries whose headword matches, ignoring macrons and case
        #[arg(short, long)]
        lemma: Option<String>,
    },
    /// Print the lookup spelling of a word: trimmed, no macrons, lowercase
    Normalize { text: String },
    /// Analyze text against a compiled index
    Analyze {
        #[arg(long, value_name = "FILE")]
        index: PathBuf,

        text: String,
    },
}

#[derive(Serialize)]
struct Skipped {
    position: usize,
    lemma: String,
    error: String,
}

#[derive(Serialize)]
struct InflectReport {
    inflections: Vec<Inflection>,
    skipped: Vec<Skipped>,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_entries(path: &Path) -> anyhow::Result<Vec<LexiconEntry>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn archive(lexicon: &CompiledLexicon) -> anyhow::Result<AlignedVec> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|err| anyhow!("failed to archive lexicon: {:?}", err))?;
    Ok(serializer.into_serializer().into_inner())
}

fn compile(input: &Path, output: &Path) -> anyhow::Result<()> {
    let entries = read_entries(input)?;
    info!(entries = entries.len(), input = %input.display(), "read lexicon");

    let (lexicon, issues) = compile_lexicon(&entries);
    for issue in &issues {
        warn!("{}", issue);
    }
    if !entries.is_empty() && lexicon.lemmas.is_empty() {
        bail!("none of the {} entries could be compiled", entries.len());
    }

    let bytes = archive(&lexicon)?;
    fs::write(output, bytes.as_slice()).with_context(|| format!("writing {}", output.display()))?;

    println!(
        "Compiled {} lemmas ({} forms, {} skipped) into {}",
        lexicon.lemmas.len(),
        lexicon.forms.len(),
        issues.len(),
        output.display()
    );
    Ok(())
}

fn inflect_entries(input: &Path, lemma: Option<&str>) -> anyhow::Result<InflectReport> {
    let entries = read_entries(input)?;
    let mut report = InflectReport {
        inflections: Vec::new(),
        skipped: Vec::new(),
    };

    for (position, entry) in entries.iter().enumerate() {
        if lemma.is_some_and(|wanted| !forms_match(&entry.latin, wanted)) {
            continue;
        }
        match entry.to_descriptor() {
            Ok(descriptor) => report.inflections.push(inflect(&descriptor)),
            Err(err) => report.skipped.push(Skipped {
                position,
                lemma: entry.latin.clone(),
                error: err.to_string(),
            }),
        }
    }

    if let Some(wanted) = lemma {
        if report.inflections.is_empty() && report.skipped.is_empty() {
            bail!("no entry for `{}` in {}", wanted, input.display());
        }
    }
    Ok(report)
}

fn analyze(index: &Path, text: &str) -> anyhow::Result<()> {
    let raw = fs::read(index).with_context(|| format!("reading {}", index.display()))?;
    // check_archived_root needs an aligned buffer.
    let mut bytes = AlignedVec::with_capacity(raw.len());
    bytes.extend_from_slice(&raw);

    let analyzer = Analyzer::from_bytes(&bytes)?;
    let tokens = analyzer.analyze_text(text);
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compile { input, output } => compile(&input, &output),
        Command::Inflect { input, lemma } => {
            let report = inflect_entries(&input, lemma.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Normalize { text } => {
            println!("{}", clean_input(&text));
            Ok(())
        }
        Command::Analyze { index, text } => analyze(&index, &text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_command_prints_lookup_spelling() {
        let cli = Cli::try_parse_from(["lexicon-compiler", "normalize", " Puellā "]).unwrap();
        let Command::Normalize { text } = cli.command else {
            panic!("expected the normalize subcommand");
        };
        assert_eq!(clean_input(&text), "puella");
    }

    #[test]
    fn test_archive_round_trips_through_analyzer() {
        let entries: Vec<LexiconEntry> = serde_json::from_str(
            r#"[{"latin": "rosa", "part_of_speech": "noun", "declension": "1", "genitive": "rosae", "gender": "f"}]"#,
        )
        .unwrap();
        let (lexicon, _) = compile_lexicon(&entries);
        let bytes = archive(&lexicon).unwrap();
        let analyzer = Analyzer::from_bytes(&bytes).unwrap();
        assert_eq!(analyzer.analyze_word("rosam").len(), 1);
    }
}
