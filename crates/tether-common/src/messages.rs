//! Messages sent from the opener to the popup.
//!
//! Messages travel as JSON text:
//! - `{"left": <int>, "top": <int>}` moves the popup.
//! - `{"close": true}` closes it.
//!
//! Decoding is lenient in the way a page script reading `event.data` is:
//! fields are tested for truthiness and anything unrecognised decodes to
//! `None` instead of an error.

use serde_json::Value;

use crate::types::PopupPosition;

/// A decoded opener -> popup message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupMessage {
    Position(PopupPosition),
    Close,
}

impl PopupMessage {
    /// Encode as a JSON value in the wire shape.
    pub fn to_value(&self) -> Value {
        match self {
            PopupMessage::Position(pos) => serde_json::json!({
                "left": pos.left,
                "top": pos.top,
            }),
            PopupMessage::Close => serde_json::json!({ "close": true }),
        }
    }

    /// Encode as JSON text.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// Decode from raw JSON text. Invalid JSON is treated like any other
    /// unrecognised payload.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        Self::from_value(&value)
    }

    /// Decode from a JSON value.
    ///
    /// A truthy `close` wins over everything else. Otherwise the message
    /// needs a truthy numeric `top` and a numeric `left`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.get("close").is_some_and(is_truthy) {
            return Some(PopupMessage::Close);
        }

        let top = value.get("top").and_then(usable_number)?;
        let left = value.get("left").and_then(Value::as_f64)?;

        Some(PopupMessage::Position(PopupPosition {
            left: left.round() as i32,
            top: top.round() as i32,
        }))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Zero is falsy, so a top of 0 is not usable.
fn usable_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite() && *f != 0.0)
}
