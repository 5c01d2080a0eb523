//! # Printer Job Builder
//!
//! [`Printer`] records printer operations as an ordered list of
//! [`Action`]s and ships the whole list to the print service in one request.
//!
//! ## Queue semantics
//!
//! - Every queuing method appends exactly one action. Nothing is validated,
//!   reordered or removed; the queue is a faithful transcript of the calls.
//! - [`Printer::text`] picks its kind (`text` or `textAsian`) from the
//!   asian-text flag *at call time*. Toggling the flag later does not touch
//!   queued actions.
//! - [`Printer::cut`] and [`Printer::close`] are ordinary actions. Queuing
//!   more after them is allowed.
//! - [`Printer::print`] does not consume the queue. Calling it again sends
//!   the same full list again.
//!
//! ## Example
//!
//! ```no_run
//! use thermal_relay::{Printer, action::{BarcodeMode, JustifyMode}};
//!
//! # async fn example() -> thermal_relay::Result<()> {
//! let mut printer = Printer::new("EPSON1");
//! printer
//!     .justify(JustifyMode::Center)
//!     .text("HELLO\n")
//!     .barcode("4006381333931", Some(BarcodeMode::Jan13))
//!     .qr_code("https://example.com", None, None)
//!     .feed(Some(3))
//!     .cut();
//!
//! printer.print().await?;
//! # Ok(())
//! # }
//! ```

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::debug;

use crate::action::{Action, BarcodeMode, ImageMode, JustifyMode, PrintMode, QrCode, QrModel};
use crate::error::Result;
use crate::request::{PrintOutcome, PrintRequest};
use crate::service::PrintService;

/// Optional settings applied when a [`Printer`] is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Queue text as `textAsian` instead of `text`.
    pub text_asian: bool,
    /// Ask the service to render text as Unicode.
    pub text_special: bool,
    /// Unlock key forwarded to the service.
    pub key: Option<String>,
}

/// Action queue for a single print job.
///
/// Build one per job and drop it after submission; reusing it resends every
/// action queued so far.
#[derive(Debug, Clone)]
pub struct Printer {
    printer_name: String,
    text_special: bool,
    text_asian: bool,
    key: Option<String>,
    actions: Vec<Action>,
    /// `None` means the default local service, resolved when first needed.
    service: Option<PrintService>,
}

impl Default for Printer {
    fn default() -> Self {
        Self::with_options("", PrinterOptions::default())
    }
}

impl Printer {
    /// Create a job for `printer_name` against the default local service.
    pub fn new(printer_name: impl Into<String>) -> Self {
        Self::with_options(printer_name, PrinterOptions::default())
    }

    /// Create a job with explicit text and key settings.
    pub fn with_options(printer_name: impl Into<String>, options: PrinterOptions) -> Self {
        Self {
            printer_name: printer_name.into(),
            text_special: options.text_special,
            text_asian: options.text_asian,
            key: options.key,
            actions: Vec::new(),
            service: None,
        }
    }

    /// Target a different print service.
    pub fn with_service(mut self, service: PrintService) -> Self {
        self.service = Some(service);
        self
    }

    fn service(&self) -> PrintService {
        self.service.clone().unwrap_or_default()
    }

    // ========== Configuration ==========

    /// Replace the target printer. Unknown names fail at submission.
    pub fn set_printer_name(&mut self, printer_name: impl Into<String>) {
        self.printer_name = printer_name.into();
    }

    /// Replace the unlock key (e.g. to remove the service's watermark).
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    /// Route subsequent [`text`](Printer::text) calls through the asian-text path.
    pub fn set_printer_text_asian(&mut self, value: bool) {
        self.text_asian = value;
    }

    /// Have the service render this job's text as Unicode.
    pub fn set_printer_text_special(&mut self, value: bool) {
        self.text_special = value;
    }

    pub fn printer_name(&self) -> &str {
        &self.printer_name
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn text_asian(&self) -> bool {
        self.text_asian
    }

    pub fn text_special(&self) -> bool {
        self.text_special
    }

    /// Queued actions, in call order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    // ========== Queuing ==========

    fn push(&mut self, action: Action) -> &mut Self {
        debug!(kind = %action.kind(), position = self.actions.len(), "queued action");
        self.actions.push(action);
        self
    }

    /// Select a print mode. `None` leaves the choice to the service.
    pub fn select_print_mode(&mut self, mode: Option<PrintMode>) -> &mut Self {
        self.push(Action::SelectPrintMode(mode))
    }

    pub fn justify(&mut self, mode: JustifyMode) -> &mut Self {
        self.push(Action::Justify(mode))
    }

    /// Queue a Base64-encoded image. The string is forwarded as-is.
    ///
    /// `image_mode` defaults to `IMG_DEFAULT`.
    pub fn print_base64_image(&mut self, image_base64: impl Into<String>, image_mode: Option<ImageMode>) -> &mut Self {
        self.push(Action::PrintBase64Image {
            image: image_base64.into(),
            mode: image_mode.unwrap_or_default(),
        })
    }

    /// Encode raw image file bytes (PNG, JPEG, ...) as Base64 and queue them.
    pub fn print_image_bytes(&mut self, bytes: impl AsRef<[u8]>, image_mode: Option<ImageMode>) -> &mut Self {
        let encoded = STANDARD.encode(bytes);
        self.print_base64_image(encoded, image_mode)
    }

    /// Queue text. The kind depends on the asian-text flag right now.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        let action = if self.text_asian {
            Action::TextAsian(text)
        } else {
            Action::Text(text)
        };
        self.push(action)
    }

    /// Queue a 1D barcode. With `mode: None` no symbology is sent and the
    /// service picks its default.
    pub fn barcode(&mut self, value: impl Into<String>, mode: Option<BarcodeMode>) -> &mut Self {
        self.push(Action::Barcode {
            value: value.into(),
            mode,
        })
    }

    /// Queue a QR code. Unlike [`barcode`](Printer::barcode), defaults are
    /// applied here: size 3 and `QR_MODEL_2`. `size` is not range checked.
    pub fn qr_code(&mut self, value: impl Into<String>, size: Option<u32>, model: Option<QrModel>) -> &mut Self {
        let mut qr = QrCode::new(value);
        if let Some(size) = size {
            qr = qr.size(size);
        }
        if let Some(model) = model {
            qr = qr.model(model);
        }
        self.push(Action::QrCode(qr))
    }

    /// Feed paper by `lines`, or by the service's default amount for `None`.
    pub fn feed(&mut self, lines: Option<u32>) -> &mut Self {
        self.push(Action::Feed(lines))
    }

    pub fn set_emphasis(&mut self, value: bool) -> &mut Self {
        self.push(Action::SetEmphasis(value))
    }

    pub fn cut(&mut self) -> &mut Self {
        self.push(Action::Cut)
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(Action::Close)
    }

    // ========== Submission ==========

    /// The body [`print`](Printer::print) sends.
    pub fn request(&self) -> PrintRequest {
        PrintRequest {
            key: self.key.clone(),
            printer: self.printer_name.clone(),
            payload: self.actions.clone(),
            text_special: self.text_special,
        }
    }

    /// Send the whole queue to the print service.
    ///
    /// The queue is kept on both success and failure.
    pub async fn print(&self) -> Result<PrintOutcome> {
        self.service().print(&self.request()).await
    }

    /// List the printers the service can reach. Independent of the queue.
    pub async fn get_printers(&self) -> Result<Vec<String>> {
        self.service().printers().await
    }
}
