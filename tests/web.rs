//! Tests of the JavaScript surface, run with `wasm-pack test`
#![cfg(target_arch = "wasm32")]

use fraction_core::{io::read_fractions, Fraction};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_errors_become_js_errors() {
    let err: JsValue = Fraction::new(1, 0).unwrap_err().into();
    assert!(err.is_instance_of::<js_sys::Error>());

    let err: JsValue = Fraction::ONE.div(&Fraction::ZERO).unwrap_err().into();
    let message = js_sys::Error::from(err).message();
    assert_eq!(String::from(message), "division by zero");
}

#[wasm_bindgen_test]
fn test_json_roundtrip() {
    let f = Fraction::new(-6, 8).unwrap();
    let json = f.to_json().unwrap();
    assert_eq!(Fraction::from_json(json).unwrap(), f);
}

#[wasm_bindgen_test]
fn test_read_fractions() {
    let values = read_fractions("1/2 3/4", JsValue::UNDEFINED).unwrap();
    let values: Vec<Fraction> = serde_wasm_bindgen::from_value(values).unwrap();
    assert_eq!(values, vec![Fraction::new(1, 2).unwrap(), Fraction::new(3, 4).unwrap()]);

    let config = js_sys::JSON::parse(r#"{"grammar":"whitespace"}"#).unwrap();
    let values = read_fractions("5 10", config).unwrap();
    let values: Vec<Fraction> = serde_wasm_bindgen::from_value(values).unwrap();
    assert_eq!(values, vec![Fraction::new(1, 2).unwrap()]);

    let config = js_sys::JSON::parse(r#"{"grammar":"whitespace"}"#).unwrap();
    assert!(read_fractions("5 0", config).is_err());
}
