//! Error types for cassis-wire

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Decoding failure
///
/// Decoders return these as values; the crate never panics on wire input.
/// The transport layer decides whether a decode failure is fatal to the
/// session (conventionally it is).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Byte-level parse problem: truncation, invalid UTF-8, or an unknown
    /// sentinel value (transaction status byte, format code, negative
    /// authentication code).
    #[error("packet decoding failed: {0}")]
    PacketDecoding(String),

    /// One or more required error/notice fields were missing from an
    /// ErrorResponse/NoticeResponse body. Carries one message per missing
    /// field, in Severity, Code, Message order. Never empty.
    #[error("error response decoding failed: {}", .0.join(" "))]
    ErrorResponseDecoding(Vec<String>),

    /// No decoder is registered for this message tag.
    #[error("unsupported message tag: 0x{0:02X}")]
    UnsupportedMessage(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_packet_decoding() {
        let err = Error::PacketDecoding("unexpected end of packet".into());
        assert_eq!(
            err.to_string(),
            "packet decoding failed: unexpected end of packet"
        );
    }

    #[test]
    fn test_display_error_response_joins_messages() {
        let err = Error::ErrorResponseDecoding(vec![
            "Required Severity Level was not present.".into(),
            "Required SQLSTATE Code was not present.".into(),
        ]);
        let text = err.to_string();
        assert!(text.contains("Required Severity Level was not present."));
        assert!(text.contains("Required SQLSTATE Code was not present."));
    }

    #[test]
    fn test_display_unsupported_message_tag_is_hex() {
        let err = Error::UnsupportedMessage(b'X');
        assert_eq!(err.to_string(), "unsupported message tag: 0x58");
    }
}
