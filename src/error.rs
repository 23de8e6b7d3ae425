//! Error kinds raised by fraction construction, arithmetic and parsing

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Every way a fraction operation can fail
///
/// Errors are raised where they are detected, before any unchecked integer
/// operation runs, and leave the operands untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    /// Zero denominator, or a float that has no rational counterpart
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Division by a zero-valued fraction
    #[error("division by zero")]
    DivisionByZero,

    /// Result does not fit the numerator/denominator integer range
    #[error("integer overflow")]
    Overflow,

    /// Text that does not parse as a fraction
    #[error("invalid input: {0:?}")]
    InvalidInput(String),
}

impl From<FractionError> for JsValue {
    fn from(err: FractionError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}
