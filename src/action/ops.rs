//! # Action Records
//!
//! [`ActionKind`] is the wire tag vocabulary. [`Action`] is one queued
//! operation with its kind-specific payload.
//!
//! ## Absent values
//!
//! Optional parameters the caller did not supply are left out of the JSON
//! object entirely, so the print service applies its own default:
//!
//! ```text
//! feed()   → {"type":"feed"}
//! feed(0)  → {"type":"feed","payload":0}
//! ```

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::{BarcodeMode, ImageMode, JustifyMode, PrintMode, QrModel};

define_wire_enum! {
    /// Action kind tag, as sent in the `type` field.
    ///
    /// `Print`, `Commands` and `Pulse` are understood by the print service but
    /// have no dedicated builder method; they only appear through
    /// [`Action::Other`].
    ActionKind ("action kind") {
        QrCode => "qrCode",
        Barcode => "barcode",
        Print => "print",
        Commands => "commands",
        Text => "text",
        TextAsian => "textAsian",
        Justify => "justify",
        PrintBase64Image => "printBase64Image",
        SelectPrintMode => "selectPrintMode",
        Cut => "cut",
        SetEmphasis => "setEmphasis",
        Feed => "feed",
        Pulse => "pulse",
        Close => "close",
    }
}

/// Default QR module size in pixels.
pub const DEFAULT_QR_SIZE: u32 = 3;

fn default_qr_size() -> u32 {
    DEFAULT_QR_SIZE
}

/// QR code descriptor, the payload of a `qrCode` action.
///
/// `size` is documented as 1-16 but is forwarded unchecked; range
/// enforcement belongs to the print service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCode {
    pub content: String,
    #[serde(default = "default_qr_size")]
    pub size: u32,
    #[serde(default)]
    pub model: QrModel,
}

impl QrCode {
    /// Descriptor with the default size (3) and model (`QR_MODEL_2`).
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_QR_SIZE,
            model: QrModel::default(),
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn model(mut self, model: QrModel) -> Self {
        self.model = model;
        self
    }
}

/// One queued printer operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "WireAction")]
pub enum Action {
    /// QR code with an already defaulted descriptor.
    QrCode(QrCode),

    /// 1D barcode. `mode: None` leaves the symbology to the service.
    Barcode {
        value: String,
        mode: Option<BarcodeMode>,
    },

    /// Text rendered through the device's native code page.
    Text(String),

    /// Text sent through the printer's asian-text path.
    TextAsian(String),

    /// Justification for subsequent content.
    Justify(JustifyMode),

    /// Base64-encoded image. The string is never decoded client-side.
    PrintBase64Image { image: String, mode: ImageMode },

    /// Print mode selection. `None` lets the service apply its default.
    SelectPrintMode(Option<PrintMode>),

    Cut,

    SetEmphasis(bool),

    /// Paper feed in lines. `None` means the service's default amount.
    Feed(Option<u32>),

    Close,

    /// Kinds without a builder method (`print`, `commands`, `pulse`),
    /// carried through untouched.
    Other {
        kind: ActionKind,
        payload: Option<Value>,
        extra_data: Option<Value>,
    },
}

impl Action {
    /// The wire tag for this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::QrCode(_) => ActionKind::QrCode,
            Action::Barcode { .. } => ActionKind::Barcode,
            Action::Text(_) => ActionKind::Text,
            Action::TextAsian(_) => ActionKind::TextAsian,
            Action::Justify(_) => ActionKind::Justify,
            Action::PrintBase64Image { .. } => ActionKind::PrintBase64Image,
            Action::SelectPrintMode(_) => ActionKind::SelectPrintMode,
            Action::Cut => ActionKind::Cut,
            Action::SetEmphasis(_) => ActionKind::SetEmphasis,
            Action::Feed(_) => ActionKind::Feed,
            Action::Close => ActionKind::Close,
            Action::Other { kind, .. } => *kind,
        }
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind())?;
        match self {
            Action::QrCode(qr) => map.serialize_entry("payload", qr)?,
            Action::Barcode { value, mode } => {
                map.serialize_entry("payload", value)?;
                if let Some(mode) = mode {
                    map.serialize_entry("extraData", mode)?;
                }
            }
            Action::Text(text) | Action::TextAsian(text) => map.serialize_entry("payload", text)?,
            Action::Justify(mode) => map.serialize_entry("payload", mode)?,
            Action::PrintBase64Image { image, mode } => {
                map.serialize_entry("payload", image)?;
                map.serialize_entry("extraData", mode)?;
            }
            Action::SelectPrintMode(mode) => {
                if let Some(mode) = mode {
                    map.serialize_entry("payload", mode)?;
                }
            }
            Action::SetEmphasis(on) => map.serialize_entry("payload", on)?,
            Action::Feed(lines) => {
                if let Some(lines) = lines {
                    map.serialize_entry("payload", lines)?;
                }
            }
            Action::Cut | Action::Close => {}
            Action::Other {
                payload,
                extra_data,
                ..
            } => {
                if let Some(payload) = payload {
                    map.serialize_entry("payload", payload)?;
                }
                if let Some(extra_data) = extra_data {
                    map.serialize_entry("extraData", extra_data)?;
                }
            }
        }
        map.end()
    }
}

/// The untyped object as it appears on the wire.
#[derive(Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    kind: ActionKind,
    #[serde(default)]
    payload: Option<Value>,
    #[serde(default, rename = "extraData")]
    extra_data: Option<Value>,
}

fn required<T: DeserializeOwned>(kind: ActionKind, field: &str, value: Option<Value>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} action is missing its {}", kind, field))?;
    serde_json::from_value(value).map_err(|e| format!("invalid {} for {} action: {}", field, kind, e))
}

fn optional<T: DeserializeOwned>(kind: ActionKind, field: &str, value: Option<Value>) -> Result<Option<T>, String> {
    value.map(|v| required(kind, field, Some(v))).transpose()
}

impl TryFrom<WireAction> for Action {
    type Error = String;

    fn try_from(wire: WireAction) -> Result<Self, Self::Error> {
        let WireAction {
            kind,
            payload,
            extra_data,
        } = wire;

        let action = match kind {
            ActionKind::QrCode => Action::QrCode(required(kind, "payload", payload)?),
            ActionKind::Barcode => Action::Barcode {
                value: required(kind, "payload", payload)?,
                mode: optional(kind, "extraData", extra_data)?,
            },
            ActionKind::Text => Action::Text(required(kind, "payload", payload)?),
            ActionKind::TextAsian => Action::TextAsian(required(kind, "payload", payload)?),
            ActionKind::Justify => Action::Justify(required(kind, "payload", payload)?),
            ActionKind::PrintBase64Image => Action::PrintBase64Image {
                image: required(kind, "payload", payload)?,
                mode: optional(kind, "extraData", extra_data)?.unwrap_or_default(),
            },
            ActionKind::SelectPrintMode => Action::SelectPrintMode(optional(kind, "payload", payload)?),
            ActionKind::Cut => Action::Cut,
            ActionKind::SetEmphasis => Action::SetEmphasis(required(kind, "payload", payload)?),
            ActionKind::Feed => Action::Feed(optional(kind, "payload", payload)?),
            ActionKind::Close => Action::Close,
            ActionKind::Print | ActionKind::Commands | ActionKind::Pulse => Action::Other {
                kind,
                payload,
                extra_data,
            },
        };
        Ok(action)
    }
}
