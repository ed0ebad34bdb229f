//! Protocol message types

use super::constants::{tx_status, MAX_MESSAGE_LENGTH};
use crate::sqlstate::PostgresMessage;
use crate::{Error, Result};
use bytes::{Buf, Bytes, BytesMut};

/// A framed protocol unit: a single-byte type tag plus the message body.
///
/// The transport layer frames packets using the standard PostgreSQL
/// envelope (1-byte tag + 4-byte big-endian length including itself); the
/// decoders only ever see `{tag, body}`. Body length equals envelope
/// length minus 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Message type byte (e.g. `'C'`, `'Z'`, `'E'`)
    pub tag: u8,
    /// Message body, envelope header excluded
    pub body: Bytes,
}

impl Packet {
    /// Create a packet from a tag and body
    pub fn new(tag: u8, body: impl Into<Bytes>) -> Self {
        Self {
            tag,
            body: body.into(),
        }
    }

    /// Split one framed packet off the front of `buf`.
    ///
    /// Returns `Ok(None)` when the buffer does not yet hold a complete
    /// frame (the transport should read more bytes and retry). Length
    /// fields below 4 or above [`MAX_MESSAGE_LENGTH`] are rejected before
    /// any allocation.
    pub fn parse(buf: &mut BytesMut) -> Result<Option<Packet>> {
        if buf.len() < 5 {
            return Ok(None);
        }

        let tag = buf[0];
        let len = i32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]);
        if len < 4 {
            return Err(Error::PacketDecoding(format!(
                "invalid message length {} for tag 0x{:02X}",
                len, tag
            )));
        }
        let len = len as usize;
        if len > MAX_MESSAGE_LENGTH {
            return Err(Error::PacketDecoding(format!(
                "message length {} exceeds maximum allowed {}",
                len, MAX_MESSAGE_LENGTH
            )));
        }

        if buf.len() < len + 1 {
            return Ok(None);
        }

        buf.advance(5);
        let body = buf.split_to(len - 4).freeze();
        Ok(Some(Packet { tag, body }))
    }
}

/// Backend message (server → client)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendMessage {
    /// Authentication request
    Authentication(AuthenticationMessage),

    /// Backend key data (for cancellation)
    BackendKeyData {
        /// Process ID
        process_id: i32,
        /// Secret key
        secret_key: i32,
    },

    /// Command complete
    CommandComplete {
        /// Command tag, e.g. `SELECT 5`
        tag: String,
    },

    /// Data row; columns in server transmission order, `None` is SQL NULL
    DataRow {
        /// Column values
        columns: Vec<Option<Bytes>>,
    },

    /// Error response, classified by SQLSTATE
    ErrorResponse(PostgresMessage),

    /// Notice response, classified by SQLSTATE
    NoticeResponse(PostgresMessage),

    /// Parameter status
    ParameterStatus {
        /// Parameter name
        name: String,
        /// Parameter value
        value: String,
    },

    /// Ready for query
    ReadyForQuery {
        /// Transaction status
        status: TxStatus,
    },

    /// Row description; fields in server transmission order
    RowDescription {
        /// Column metadata
        fields: Vec<FieldDescription>,
    },
}

/// Transaction status reported by ReadyForQuery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    /// Idle (not in transaction), `'I'`
    Idle,
    /// In transaction block, `'T'`
    InTransaction,
    /// Failed transaction awaiting rollback, `'E'`
    Failed,
}

impl TryFrom<u8> for TxStatus {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            tx_status::IDLE => Ok(TxStatus::Idle),
            tx_status::IN_TRANSACTION => Ok(TxStatus::InTransaction),
            tx_status::FAILED => Ok(TxStatus::Failed),
            other => Err(Error::PacketDecoding(format!(
                "unknown transaction status byte: 0x{:02X}",
                other
            ))),
        }
    }
}

impl TxStatus {
    /// The wire byte for this status
    pub fn as_byte(self) -> u8 {
        match self {
            TxStatus::Idle => tx_status::IDLE,
            TxStatus::InTransaction => tx_status::IN_TRANSACTION,
            TxStatus::Failed => tx_status::FAILED,
        }
    }
}

/// Per-column encoding indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatCode {
    /// Text format (0)
    #[default]
    Text,
    /// Binary format (1)
    Binary,
}

impl TryFrom<i16> for FormatCode {
    type Error = Error;

    fn try_from(value: i16) -> Result<Self> {
        match value {
            0 => Ok(FormatCode::Text),
            1 => Ok(FormatCode::Binary),
            other => Err(Error::PacketDecoding(format!(
                "unknown format code: {}",
                other
            ))),
        }
    }
}

impl FormatCode {
    /// The wire value for this format code
    pub fn as_i16(self) -> i16 {
        match self {
            FormatCode::Text => 0,
            FormatCode::Binary => 1,
        }
    }
}

/// Field description (column metadata within RowDescription)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescription {
    /// Column name
    pub name: String,
    /// Table OID (0 if not a table column)
    pub table_oid: i32,
    /// Column attribute number (0 if not a table column)
    pub column_attr: i16,
    /// Data type OID
    pub type_oid: i32,
    /// Data type size (negative for variable-width types)
    pub type_size: i16,
    /// Type modifier
    pub type_modifier: i32,
    /// Format code
    pub format: FormatCode,
}

/// Authentication message variants
///
/// The decoder classifies the challenge; it performs no authentication
/// cryptography. Codes outside the known set decode to `Unknown` so newer
/// servers remain decodable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationMessage {
    /// Authentication OK (code 0)
    Ok,

    /// Kerberos V5 authentication required (code 2)
    KerberosV5,

    /// Cleartext password required (code 3)
    CleartextPassword,

    /// MD5 password required (code 5)
    Md5Password {
        /// Salt for the MD5 hash
        salt: [u8; 4],
    },

    /// SCM credentials message required (code 6)
    ScmCredential,

    /// GSSAPI authentication required (code 7)
    Gss,

    /// GSSAPI continuation data (code 8)
    GssContinue {
        /// Opaque GSSAPI or SSPI payload
        data: Bytes,
    },

    /// SSPI authentication required (code 9)
    Sspi,

    /// Unrecognized non-negative authentication code
    Unknown(i32),
}
