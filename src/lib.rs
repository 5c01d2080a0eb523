//! # Thermal Relay - Print Service Client
//!
//! Thermal Relay builds print jobs for a thermal receipt printer that is only
//! reachable through a local print service. It never talks to the device:
//!
//! - **Queue**: each builder call appends one typed action, in call order
//! - **Serialize**: the queue becomes a single JSON body
//! - **Submit**: one HTTP request to the print service, which drives the printer
//!
//! ## Quick Start
//!
//! ```no_run
//! use thermal_relay::{
//!     Printer, PrintService, ServiceConfig,
//!     action::{JustifyMode, PrintMode},
//! };
//!
//! # async fn example() -> thermal_relay::Result<()> {
//! let service = PrintService::new(ServiceConfig::new("http://localhost:8000")?)?;
//! let mut printer = Printer::new("EPSON1").with_service(service);
//!
//! for name in printer.get_printers().await? {
//!     println!("{}", name);
//! }
//!
//! printer
//!     .justify(JustifyMode::Center)
//!     .select_print_mode(Some(PrintMode::DoubleHeight))
//!     .text("RECEIPT\n")
//!     .select_print_mode(None)
//!     .feed(Some(2))
//!     .cut();
//!
//! let outcome = printer.print().await?;
//! assert!(outcome.success);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`action`] | Action kinds, payloads and mode vocabulary |
//! | [`printer`] | The job builder |
//! | [`request`] | Wire bodies |
//! | [`service`] | HTTP client for the print service |
//! | [`config`] | Endpoint configuration |
//! | [`error`] | Error types |

pub mod action;
pub mod config;
pub mod error;
pub mod printer;
pub mod request;
pub mod service;

// Re-exports for convenience
pub use config::ServiceConfig;
pub use error::{RelayError, Result};
pub use printer::{Printer, PrinterOptions};
pub use request::{PrintOutcome, PrintRequest, RawPrintRequest};
pub use service::PrintService;
