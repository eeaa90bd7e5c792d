// This is src/lib.rs
use wasm_bindgen::prelude::*;
use js_sys::BigInt as JsBigInt;
#[cfg(target_arch = "wasm32")]
use web_sys::console;
use num_bigint::BigInt;
use std::str::FromStr;

mod error;
pub mod alphabet;
pub mod convert;
pub mod format;
pub mod plan;
pub mod render;
pub mod settings;

pub use alphabet::Alphabet;
pub use convert::{to_base, to_factoradic};
pub use error::{NumeralError, NumeralResult};
pub use format::left_pad;
pub use plan::{factoradic_width, fixed_base, inverse_factorial, NumeralSystem, WidthPlan};
pub use render::{render, render_window, Classification, DocumentFacts, Label, LineLabels, VisibleRange, Window};
pub use settings::{LineNumberConfig, RenderFinalNewline, Settings};

#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Reports a recoverable problem on the host console. Native builds have no console to write to.
pub(crate) fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn big_from_js(js_value: &JsBigInt) -> Result<BigInt, JsValue> {
    let text = String::from(js_value.to_string(10).map_err(|_e| JsValue::from_str("Failed to stringify JS BigInt"))?);
    BigInt::from_str(&text).map_err(|e| JsValue::from_str(&format!("Invalid BigInt format: {}", e)))
}

fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

/// Labels every visible range of one pass.
///
/// `settings` is the raw `triplicate` settings object plus `renderFinalNewline`;
/// `ranges` is an array of `{ start, end }` line pairs. Returns an array of
/// `{ line, text, classification }`.
#[wasm_bindgen(js_name = renderLineNumbers)]
pub fn render_line_numbers(
    settings: JsValue,
    ranges: JsValue,
    line_count: usize,
    active_line: Option<usize>,
    last_line_empty: bool,
) -> Result<JsValue, JsValue> {
    let settings: Settings = if settings.is_undefined() || settings.is_null() {
        Settings::default()
    } else {
        serde_wasm_bindgen::from_value(settings).map_err(|e| js_error("Failed to deserialize settings", e))?
    };
    let ranges: Vec<VisibleRange> =
        serde_wasm_bindgen::from_value(ranges).map_err(|e| js_error("Failed to deserialize ranges", e))?;
    let facts = DocumentFacts { line_count, active_line, last_line_empty };

    let config = settings.resolve();
    match render(&ranges, &config, &facts) {
        Ok(labels) => serde_wasm_bindgen::to_value(&labels).map_err(|e| js_error("Failed to serialize labels", e)),
        Err(e) => Err(js_error("Render Error", e)),
    }
}

#[wasm_bindgen(js_name = toBase)]
pub fn to_base_js(js_value: JsBigInt, base: usize, alphabet: &str) -> Result<String, JsValue> {
    let alphabet = Alphabet::parse(alphabet).map_err(|e| js_error("Alphabet Error", e))?;
    to_base(&big_from_js(&js_value)?, base, &alphabet).map_err(|e| js_error("Base Conversion Error", e))
}

#[wasm_bindgen(js_name = toFactoradic)]
pub fn to_factoradic_js(js_value: JsBigInt, alphabet: &str) -> Result<String, JsValue> {
    let alphabet = Alphabet::parse(alphabet).map_err(|e| js_error("Alphabet Error", e))?;
    to_factoradic(&big_from_js(&js_value)?, &alphabet).map_err(|e| js_error("Factoradic Error", e))
}

#[wasm_bindgen(js_name = inverseFactorial)]
pub fn inverse_factorial_js(js_value: JsBigInt) -> Result<u32, JsValue> {
    inverse_factorial(&big_from_js(&js_value)?).map_err(|e| js_error("Inverse Factorial Error", e))
}

#[wasm_bindgen(js_name = fixedBase)]
pub fn fixed_base_js(max_label: JsBigInt, length: u32, alphabet_length: usize) -> Result<usize, JsValue> {
    fixed_base(&big_from_js(&max_label)?, length, alphabet_length).map_err(|e| js_error("Width Planning Error", e))
}
