mod shutdown;

use axum::extract::ws::Message;
use sb_core::Record;
use serde_json::Value;

pub fn record(value: serde_json::Value) -> Record {
    Record::from_value(value).unwrap()
}

/// Parse a text frame back into its JSON object form.
pub fn decode_text_frame(message: Message) -> serde_json::Map<String, Value> {
    match message {
        Message::Text(text) => serde_json::from_str(text.as_str()).unwrap(),
        other => panic!("expected text frame, got {other:?}"),
    }
}
