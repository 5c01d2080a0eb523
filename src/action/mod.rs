//! # Action Vocabulary
//!
//! The typed representation of one queued printer operation, and the closed
//! value sets its parameters are drawn from.
//!
//! On the wire every action is a JSON object:
//!
//! ```text
//! { "type": <ActionKind>, "payload"?: ..., "extraData"?: ... }
//! ```
//!
//! The shape of `payload` and `extraData` is fixed by `type`. In Rust that is
//! an enum variant per kind ([`Action`]); the untyped object only exists at
//! the serialization boundary.
//!
//! ## Example
//!
//! ```
//! use thermal_relay::action::{Action, QrCode};
//!
//! let action = Action::QrCode(QrCode::new("ABC"));
//! let json = serde_json::to_value(&action).unwrap();
//! assert_eq!(json["type"], "qrCode");
//! assert_eq!(json["payload"]["size"], 3);
//! assert_eq!(json["payload"]["model"], "QR_MODEL_2");
//! ```

use std::fmt;

/// Error returned when a string is not one of an enum's wire values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownMode {}

/// Define a wire enum from a single variant list.
///
/// Serde renames, `as_str`, `Display`, `FromStr` and `ALL` all derive from
/// the same `Variant => "wire"` pairs, so the string table exists once.
macro_rules! define_wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self { $($name::$variant => $wire,)+ }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::action::UnknownMode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::action::UnknownMode {
                        kind: $label,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

mod modes;
mod ops;

pub use modes::{BarcodeMode, ImageMode, JustifyMode, PrintMode, QrModel};
pub use ops::{Action, ActionKind, DEFAULT_QR_SIZE, QrCode};
