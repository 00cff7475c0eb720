use latina_analyzer::{AnalyzedToken, Analyzer};
use latina_morph::{inflect as inflect_descriptor, LexiconEntry};
use latina_protocol::{ArchivedCompiledLexicon, CompiledLexicon};
use rkyv::AlignedVec;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

/// Lookup spelling of `text`: trimmed, no macrons, lowercase.
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    latina_morph::clean_input(text)
}

/// Full paradigm of one lexicon entry, given in the lexicon's JSON shape.
#[wasm_bindgen]
pub fn inflect(entry: JsValue) -> Result<JsValue, JsValue> {
    let entry: LexiconEntry = serde_wasm_bindgen::from_value(entry)?;
    let descriptor = entry
        .to_descriptor()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    to_js(&inflect_descriptor(&descriptor))
}

/// What `analyze` sends back to JavaScript.
#[derive(Serialize)]
pub struct AnalysisReport<'t> {
    pub tokens: Vec<AnalyzedToken<'t>>,
    pub unknown: Vec<&'t str>,
    pub debug_info: String,
}

fn report<'t>(analyzer: &Analyzer<'_>, input: &'t str) -> AnalysisReport<'t> {
    let tokens = analyzer.analyze_text(input);
    let unknown = tokens
        .iter()
        .filter(|t| t.kind == latina_analyzer::TokenKind::Word && t.analyses.is_empty())
        .map(|t| t.text)
        .collect();
    let lexicon = analyzer.lexicon();
    AnalysisReport {
        tokens,
        unknown,
        debug_info: format!("Lemmas: {}, Forms: {}", lexicon.lemmas.len(), lexicon.forms.len()),
    }
}

/// The engine instance running in the browser.
#[wasm_bindgen]
pub struct LatinaEngine {
    // Compiled lexicon loaded via fetch() in JS, validated on construction.
    data: AlignedVec,
}

impl LatinaEngine {
    fn lexicon(&self) -> &ArchivedCompiledLexicon {
        // SAFETY: `data` is never mutated after `new` validated it.
        unsafe { rkyv::archived_root::<CompiledLexicon>(&self.data) }
    }
}

#[wasm_bindgen]
impl LatinaEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(data: &[u8]) -> Result<LatinaEngine, JsValue> {
        let mut aligned = AlignedVec::with_capacity(data.len());
        aligned.extend_from_slice(data);
        Analyzer::from_bytes(&aligned).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self { data: aligned })
    }

    /// Every reading of a single word.
    #[wasm_bindgen(js_name = analyzeWord)]
    pub fn analyze_word(&self, word: &str) -> Result<JsValue, JsValue> {
        to_js(&Analyzer::new(self.lexicon()).analyze_word(word))
    }

    /// Text -> tokens -> readings, as JSON.
    pub fn analyze(&self, input: &str) -> Result<JsValue, JsValue> {
        let analyzer = Analyzer::new(self.lexicon());
        to_js(&report(&analyzer, input))
    }
}
