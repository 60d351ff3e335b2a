pub mod config;
pub mod error;
pub mod map;
pub mod sanitizer;

use config::Config;
use sanitizer::SanitizeReport;

pub use error::{MapCleanError, Result};
pub use map::{MapDocument, ObjectEntry, RoomEntry, load_map_from_file, load_map_from_str};
pub use sanitizer::{Preset, RuleSet, sanitize, sanitize_with_report};

/// One sanitization pass: read the whole input, clean it, write the whole output.
///
/// Nothing is written unless the input was read and parsed successfully.
pub fn run_pass(config: &Config) -> Result<SanitizeReport> {
    let document = load_map_from_file(&config.input)?;

    for finding in map::validate_map(&document) {
        tracing::warn!(room = %finding.room, "{}", finding.message);
    }

    let (clean, report) = sanitize_with_report(document, &config.rules);
    map::save_map_to_file(&clean, &config.output)?;

    tracing::info!(
        preset = %config.preset,
        input = %config.input.display(),
        output = %config.output.display(),
        "{}",
        report
    );
    Ok(report)
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::Serializer;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmSanitizeResult {
        map: MapDocument,
        report: SanitizeReport,
    }

    fn to_js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Clean a JSON map string and return compact JSON.
    #[wasm_bindgen(js_name = sanitizeMapJson)]
    pub fn sanitize_map_json(json: &str, preset: &str) -> std::result::Result<String, JsValue> {
        let preset: Preset = preset.parse().map_err(to_js_error)?;
        let document = load_map_from_str(json).map_err(to_js_error)?;
        let clean = sanitize(document, &preset.rules());
        map::map_to_string(&clean).map_err(to_js_error)
    }

    /// Clean a map given as a plain JS object. Returns `{ map, report }`.
    #[wasm_bindgen(js_name = sanitizeMap)]
    pub fn sanitize_map(value: JsValue, preset: &str) -> std::result::Result<JsValue, JsValue> {
        let preset: Preset = preset.parse().map_err(to_js_error)?;
        let document: MapDocument = serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
        let (map, report) = sanitize_with_report(document, &preset.rules());

        // Plain objects rather than ES `Map`s, so the result looks like JSON.
        WasmSanitizeResult { map, report }
            .serialize(&Serializer::json_compatible())
            .map_err(to_js_error)
    }
}
