//! `$DWGCODEPAGE` handling.
//!
//! Drawings older than AutoCAD 2007 (AC1021) store text in the code page
//! named by the `$DWGCODEPAGE` header variable. Once the HEADER section has
//! been read, the reader resolves that name here and decodes every later
//! line that is not valid UTF-8 with the resulting encoding.

use encoding_rs::Encoding;

/// Resolution of a `$DWGCODEPAGE` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePage {
    /// Text is UTF-8 (or plain ASCII); no transcoding
    Utf8,
    /// Text uses a legacy single- or multi-byte encoding
    Legacy(&'static Encoding),
    /// The name is not recognized
    Unknown,
}

/// Map a DXF code page name (case-insensitive) to an encoding
pub fn resolve_code_page(name: &str) -> CodePage {
    let encoding = match name.trim().to_ascii_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "unicode" => return CodePage::Utf8,

        "gb2312" | "ansi_936" => encoding_rs::GBK,
        "big5" | "ansi_950" => encoding_rs::BIG5,
        "korean" | "ansi_949" | "johab" => encoding_rs::EUC_KR,
        "ansi_932" => encoding_rs::SHIFT_JIS,

        "dos437" | "dos850" | "dos860" | "dos861" | "dos863" | "dos865" => {
            encoding_rs::WINDOWS_1252
        }
        "dos852" => encoding_rs::WINDOWS_1250,
        "dos855" | "dos866" => encoding_rs::IBM866,
        "dos857" => encoding_rs::WINDOWS_1254,
        "dos869" => encoding_rs::WINDOWS_1253,

        "ansi_874" => encoding_rs::WINDOWS_874,
        "ansi_1250" => encoding_rs::WINDOWS_1250,
        "ansi_1251" => encoding_rs::WINDOWS_1251,
        "ansi_1252" => encoding_rs::WINDOWS_1252,
        "ansi_1253" => encoding_rs::WINDOWS_1253,
        "ansi_1254" => encoding_rs::WINDOWS_1254,
        "ansi_1255" => encoding_rs::WINDOWS_1255,
        "ansi_1256" => encoding_rs::WINDOWS_1256,
        "ansi_1257" => encoding_rs::WINDOWS_1257,
        "ansi_1258" => encoding_rs::WINDOWS_1258,

        "iso8859-1" | "iso_8859-1" => encoding_rs::WINDOWS_1252,
        "iso8859-2" | "iso_8859-2" => encoding_rs::ISO_8859_2,
        "iso8859-5" | "iso_8859-5" => encoding_rs::ISO_8859_5,
        "iso8859-7" | "iso_8859-7" => encoding_rs::ISO_8859_7,
        "iso8859-9" | "iso_8859-9" => encoding_rs::WINDOWS_1254,
        "iso8859-15" | "iso_8859-15" => encoding_rs::ISO_8859_15,

        "koi8-r" => encoding_rs::KOI8_R,
        "koi8-u" => encoding_rs::KOI8_U,

        _ => return CodePage::Unknown,
    };
    CodePage::Legacy(encoding)
}

/// Whether a `$ACADVER` value always implies UTF-8 text (AC1021 and later)
pub fn version_uses_utf8(version: &str) -> bool {
    match version.trim().strip_prefix("AC") {
        Some(number) => number.parse::<u32>().map(|n| n >= 1021).unwrap_or(false),
        None => false,
    }
}
