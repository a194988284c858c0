//! WASM bindings for rsnombre
//!
//! This crate provides a JavaScript-friendly API for naming
//! non-negative integers in Spanish.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { SpanishFormatter } from 'rsnombre-wasm';
//!
//! await init();
//!
//! SpanishFormatter.nameNumber(1001001);     // "un millón mil uno"
//! SpanishFormatter.nameInteger(21000n);     // "veintiún mil"
//! SpanishFormatter.nameNumber(1.5);         // throws "Invalid type: ..."
//! ```

use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Spanish number naming utilities
#[wasm_bindgen]
pub struct SpanishFormatter;

#[wasm_bindgen]
impl SpanishFormatter {
    /// Name any JavaScript value as a Spanish number
    ///
    /// Only integral numbers are accepted; floats, strings and other
    /// values are rejected.
    ///
    /// @param value - Value to name
    /// @returns Spanish text (e.g., "cuarenta y dos")
    #[wasm_bindgen(js_name = nameNumber)]
    pub fn name_number(value: JsValue) -> Result<String, JsValue> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(value)?;
        spanish_text::name_value(&value).map_err(to_js_error)
    }

    /// Name a 64-bit integer as a Spanish number
    ///
    /// @param n - Integer to name (BigInt or safe integer)
    /// @returns Spanish text (e.g., "veintiún mil")
    #[wasm_bindgen(js_name = nameInteger)]
    pub fn name_integer(n: i64) -> Result<String, JsValue> {
        spanish_text::name_number(n).map_err(to_js_error)
    }
}

fn to_js_error(e: spanish_text::SpanishTextError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
