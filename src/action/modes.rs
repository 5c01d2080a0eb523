//! # Mode Vocabulary
//!
//! Closed value sets accepted as action parameters. The string form of each
//! variant is what the print service receives, so these literals are part of
//! the wire contract:
//!
//! | Enum | Wire values |
//! |------|-------------|
//! | [`JustifyMode`] | `justifyLeft`, `justifyCenter`, `justifyRight` |
//! | [`QrModel`] | `QR_MODEL_1`, `QR_MODEL_2`, `QR_MICRO` |
//! | [`BarcodeMode`] | `BARCODE_UPCA` ... `BARCODE_CODABAR` |
//! | [`ImageMode`] | `IMG_DEFAULT`, `IMG_DOUBLE_HEIGHT`, `IMG_DOUBLE_WIDTH` |
//! | [`PrintMode`] | `MODE_DOUBLE_WIDTH` ... `MODE_UNDERLINE` |

define_wire_enum! {
    /// Horizontal justification for subsequent content.
    JustifyMode ("justify mode") {
        Center => "justifyCenter",
        Left => "justifyLeft",
        Right => "justifyRight",
    }
}

define_wire_enum! {
    /// QR code model.
    QrModel ("QR model") {
        Model1 => "QR_MODEL_1",
        Model2 => "QR_MODEL_2",
        Micro => "QR_MICRO",
    }
}

define_wire_enum! {
    /// 1D barcode symbology.
    BarcodeMode ("barcode mode") {
        UpcA => "BARCODE_UPCA",
        UpcE => "BARCODE_UPCE",
        Jan13 => "BARCODE_JAN13",
        Jan8 => "BARCODE_JAN8",
        Code39 => "BARCODE_CODE39",
        Itf => "BARCODE_ITF",
        Codabar => "BARCODE_CODABAR",
    }
}

define_wire_enum! {
    /// Image sizing applied by the print service.
    ImageMode ("image mode") {
        Normal => "IMG_DEFAULT",
        DoubleHeight => "IMG_DOUBLE_HEIGHT",
        DoubleWidth => "IMG_DOUBLE_WIDTH",
    }
}

define_wire_enum! {
    /// Text print mode (ESC ! style selection on the device).
    PrintMode ("print mode") {
        DoubleWidth => "MODE_DOUBLE_WIDTH",
        DoubleHeight => "MODE_DOUBLE_HEIGHT",
        Emphasized => "MODE_EMPHASIZED",
        FontA => "MODE_FONT_A",
        FontB => "MODE_FONT_B",
        Underline => "MODE_UNDERLINE",
    }
}

impl Default for QrModel {
    fn default() -> Self {
        QrModel::Model2
    }
}

impl Default for ImageMode {
    fn default() -> Self {
        ImageMode::Normal
    }
}
