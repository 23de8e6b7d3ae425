//! Fraction Core - exact rational arithmetic for Rust and WASM
//!
//! This crate provides:
//! - A `Fraction` value type kept in lowest terms, with overflow-checked
//!   arithmetic, comparison and increment/decrement
//! - Operator overloads, including mixed arithmetic with floats
//! - `n/d` text output and configurable text input
//! - JavaScript bindings through wasm-bindgen

use wasm_bindgen::prelude::*;

pub mod error;
pub mod fraction;
pub mod io;
pub mod logging;
pub mod ops;

// Re-export main types for convenience
pub use error::FractionError;
pub use fraction::{Fraction, FLOAT_DIGITS};
pub use io::{FractionReader, Grammar, ReaderConfig};

/// Initialize the WASM module
/// Call this once when loading the module to set up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Warn);
}

/// Change how much is logged to the console ("error" ... "trace", or "off")
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level = level
        .parse::<log::LevelFilter>()
        .map_err(|e| JsValue::from_str(&format!("Invalid log level {:?}: {}", level, e)))?;
    logging::init(level);
    Ok(())
}

/// Get the version of the fraction-core library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_log_level_on_native() {
        set_log_level("debug").unwrap();
        assert!(matches!(
            Fraction::new(1, 0),
            Err(FractionError::InvalidArgument(_))
        ));
        assert_eq!(
            Fraction::ONE.div(&Fraction::ZERO),
            Err(FractionError::DivisionByZero)
        );
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
        set_log_level("warn").unwrap();
    }
}
