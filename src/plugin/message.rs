//! Messages exchanged with the plugin UI.
//!
//! Both directions are JSON objects tagged by `type`:
//!
//! ```text
//! UI → core:  {"type":"run","cornerRadius":24}
//!             {"type":"save-radius","cornerRadius":12}
//!             {"type":"cancel"}
//! core → UI:  {"type":"init","cornerRadius":24}
//!             {"type":"report","produced":[...],"notices":[...]}
//!             {"type":"saved","cornerRadius":12}
//!             {"type":"notify","notice":{...}}
//!             {"type":"closed"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::NodeId;
use crate::transform::Notice;

/// Request sent by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiRequest {
    /// Convert the current selection
    Run {
        /// Raw user input; validated by the session
        #[serde(rename = "cornerRadius", default)]
        corner_radius: Value,
    },
    /// Remember a radius for future sessions
    SaveRadius {
        #[serde(rename = "cornerRadius", default)]
        corner_radius: Value,
    },
    /// Close the plugin
    Cancel,
}

impl UiRequest {
    /// Parse a request from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Message sent to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiResponse {
    /// Initial state after startup
    Init {
        #[serde(rename = "cornerRadius")]
        corner_radius: f64,
    },
    /// Result of a run
    Report {
        produced: Vec<NodeId>,
        notices: Vec<Notice>,
    },
    /// A radius was persisted
    Saved {
        #[serde(rename = "cornerRadius")]
        corner_radius: f64,
    },
    /// A standalone message
    Notify { notice: Notice },
    /// The session is closed; no further requests are handled
    Closed,
}

impl UiResponse {
    /// Serialize to JSON text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
