//! Request and response bodies exchanged with the print service.

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionKind};
use crate::error::Result;

/// Body of `POST /print`.
///
/// ```json
/// { "key": "...", "printer": "EPSON1", "payload": [...], "textSpecial": false }
/// ```
///
/// `key` is left out entirely when no unlock key is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub printer: String,
    /// Actions in queue order.
    pub payload: Vec<Action>,
    #[serde(default)]
    pub text_special: bool,
}

/// A prepared `POST /print` body that is sent byte-for-byte.
///
/// Only the envelope is checked: the body must be a JSON object with a
/// `printer` string and a `payload` array whose entries carry a known
/// `type`. Everything else (payload shapes, out-of-range sizes, negative
/// feeds, missing `textSpecial`) is left for the print service to judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPrintRequest {
    body: String,
    printer: String,
    kinds: Vec<ActionKind>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    printer: String,
    payload: Vec<RawTag>,
}

#[derive(Deserialize)]
struct RawTag {
    #[serde(rename = "type")]
    kind: ActionKind,
}

impl RawPrintRequest {
    /// Check the envelope of `body` and keep it unchanged.
    pub fn parse(body: impl Into<String>) -> Result<Self> {
        let body = body.into();
        let envelope: RawEnvelope = serde_json::from_str(&body)?;
        Ok(Self {
            printer: envelope.printer,
            kinds: envelope.payload.into_iter().map(|tag| tag.kind).collect(),
            body,
        })
    }

    /// The body exactly as given.
    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn printer(&self) -> &str {
        &self.printer
    }

    /// Action kinds in payload order.
    pub fn kinds(&self) -> &[ActionKind] {
        &self.kinds
    }
}

/// Logical result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintOutcome {
    pub success: bool,
}

impl PrintOutcome {
    pub(crate) fn succeeded() -> Self {
        Self { success: true }
    }
}
