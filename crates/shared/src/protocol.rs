use serde::{Deserialize, Serialize};

use crate::domain::{ActorState, ConstructionStyle};

/// One line written to the logging sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum LogEvent {
    /// A fluent actor reported its state; `None` before any action ran.
    ActorState {
        style: ConstructionStyle,
        state: Option<ActorState>,
    },
    /// A field of the request sequencer was read back.
    Field {
        name: String,
        value: Option<String>,
    },
    /// Text was written to a display target.
    Rendered { target: String, text: String },
}

impl LogEvent {
    /// The bare text a console would show for this event.
    pub fn line(&self) -> String {
        match self {
            Self::ActorState { state, .. } => state
                .map(|state| state.as_str().to_string())
                .unwrap_or_else(|| "null".into()),
            Self::Field { value, .. } => value.clone().unwrap_or_else(|| "null".into()),
            Self::Rendered { text, .. } => text.clone(),
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
