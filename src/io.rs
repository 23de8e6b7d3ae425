//! Text output and input for fractions
//!
//! Output is always `<numerator>/<denominator>` in lowest terms. Input
//! accepts one of two grammars, chosen per reader through [`ReaderConfig`]:
//!
//! - [`Grammar::Slash`]: `<int> '/' <int>`. Malformed text marks the reader
//!   failed without raising an error.
//! - [`Grammar::Whitespace`]: `<int> <int>`. Malformed text raises
//!   `InvalidInput`, a zero second integer raises `DivisionByZero`.

use crate::error::FractionError;
use crate::fraction::Fraction;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

/// Accepted input grammar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grammar {
    /// `3/4`, `-3 / 4`
    #[default]
    Slash,
    /// `3 4`
    Whitespace,
}

/// Reader options, deserializable from a plain JS object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderConfig {
    pub grammar: Grammar,
}

/// Reads successive fractions out of a text buffer
///
/// Like a stream, a reader that has failed stays failed and yields nothing
/// more. Iteration ends quietly when the input runs out.
pub struct FractionReader<'a> {
    rest: &'a str,
    config: ReaderConfig,
    failed: bool,
}

impl<'a> FractionReader<'a> {
    /// Reader with the default (slash) grammar
    pub fn new(input: &'a str) -> Self {
        FractionReader::with_config(input, ReaderConfig::default())
    }

    pub fn with_config(input: &'a str, config: ReaderConfig) -> Self {
        FractionReader {
            rest: input,
            config,
            failed: false,
        }
    }

    /// Whether a read has failed or the input ran out
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Unconsumed input
    pub fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Read the next fraction
    ///
    /// With the slash grammar, `Ok(None)` means no fraction could be read
    /// (input exhausted or malformed) and the reader is now failed. With the
    /// whitespace grammar any failed read, including one at the end of the
    /// input, is an `InvalidInput` error. A reader that has already failed
    /// yields `Ok(None)`.
    pub fn read(&mut self) -> Result<Option<Fraction>, FractionError> {
        if self.failed {
            return Ok(None);
        }
        self.skip_whitespace();

        let result = match self.config.grammar {
            Grammar::Slash if self.rest.is_empty() => Ok(None),
            Grammar::Slash => self.read_slash(),
            Grammar::Whitespace => self.read_pair().map(Some),
        };

        if !matches!(result, Ok(Some(_))) {
            self.failed = true;
        }
        result
    }

    fn read_slash(&mut self) -> Result<Option<Fraction>, FractionError> {
        let start = self.rest;
        let parsed = match (self.read_int(), self.read_char(), self.read_int()) {
            (Some(numerator), Some('/'), Some(denominator)) => Some((numerator, denominator)),
            _ => None,
        };

        match parsed {
            Some((numerator, denominator)) => Fraction::new(numerator, denominator).map(Some),
            None => {
                debug!("malformed fraction near {:?}", preview(start));
                Ok(None)
            }
        }
    }

    fn read_pair(&mut self) -> Result<Fraction, FractionError> {
        let start = self.rest;
        let (numerator, denominator) = match (self.read_int(), self.read_int()) {
            (Some(numerator), Some(denominator)) => (numerator, denominator),
            _ => {
                debug!("malformed fraction near {:?}", preview(start));
                return Err(FractionError::InvalidInput(preview(start).to_string()));
            }
        };

        if denominator == 0 {
            debug!("zero denominator in input");
            return Err(FractionError::DivisionByZero);
        }
        Fraction::new(numerator, denominator)
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Optional sign followed by digits; `None` if absent or out of range
    fn read_int(&mut self) -> Option<i32> {
        self.skip_whitespace();
        let bytes = self.rest.as_bytes();
        let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digits_start = end;
        while bytes.get(end).map_or(false, u8::is_ascii_digit) {
            end += 1;
        }
        if end == digits_start {
            return None;
        }

        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        token.parse().ok()
    }

    fn read_char(&mut self) -> Option<char> {
        self.skip_whitespace();
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(c)
    }
}

impl Iterator for FractionReader<'_> {
    type Item = Result<Fraction, FractionError>;

    /// Ends quietly at the end of the input under either grammar
    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.rest.is_empty() {
            self.failed = true;
            return None;
        }
        self.read().transpose()
    }
}

/// First token-ish slice of the input, for messages
fn preview(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(16)
        .map_or(text.len(), |(index, _)| index);
    text[..end].trim_end()
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parse a whole string with the slash grammar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = FractionReader::new(s);
        match reader.read()? {
            Some(fraction) if reader.remaining().trim().is_empty() => Ok(fraction),
            _ => Err(FractionError::InvalidInput(s.to_string())),
        }
    }
}

/// Read every fraction in `text`
///
/// `config` is an optional object such as `{ grammar: "whitespace" }`.
/// Returns an array of `{ n, d }` objects; with the slash grammar, reading
/// stops quietly at the first malformed fraction.
#[wasm_bindgen(js_name = readFractions)]
pub fn read_fractions(text: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config: ReaderConfig = if config.is_undefined() || config.is_null() {
        ReaderConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse reader config: {}", e)))?
    };

    let fractions = FractionReader::with_config(text, config).collect::<Result<Vec<_>, _>>()?;
    serde_wasm_bindgen::to_value(&fractions).map_err(|e| JsValue::from_str(&e.to_string()))
}
