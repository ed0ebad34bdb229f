//! Backend message decoding
//!
//! One public decoder per message type plus the tag dispatch entry
//! [`decode_message`]. Every decoder constructs a fresh [`BufferReader`]
//! over the packet body and parses deterministically; all byte-level
//! problems normalize to [`Error::PacketDecoding`].

use super::constants::{auth, tags};
use super::message::{
    AuthenticationMessage, BackendMessage, FieldDescription, FormatCode, Packet, TxStatus,
};
use super::reader::BufferReader;
use crate::sqlstate::PostgresMessage;
use crate::{Error, Result};
use bytes::Bytes;

/// Decode a backend message, selecting the decoder by packet tag.
///
/// Tags for which no decoder is registered yield
/// [`Error::UnsupportedMessage`]; the dispatch never inspects the body.
pub fn decode_message(packet: &Packet) -> Result<BackendMessage> {
    match packet.tag {
        tags::AUTHENTICATION => decode_authentication(&packet.body),
        tags::BACKEND_KEY_DATA => decode_backend_key_data(&packet.body),
        tags::COMMAND_COMPLETE => decode_command_complete(&packet.body),
        tags::DATA_ROW => decode_data_row(&packet.body),
        tags::ERROR_RESPONSE => decode_error_response(&packet.body),
        tags::NOTICE_RESPONSE => decode_notice_response(&packet.body),
        tags::PARAMETER_STATUS => decode_parameter_status(&packet.body),
        tags::READY_FOR_QUERY => decode_ready_for_query(&packet.body),
        tags::ROW_DESCRIPTION => decode_row_description(&packet.body),
        tag => {
            tracing::debug!(tag, "unsupported backend message tag");
            Err(Error::UnsupportedMessage(tag))
        }
    }
}

/// Decode a CommandComplete body: one command-tag cstring
pub fn decode_command_complete(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let tag = reader.read_cstr()?;
    Ok(BackendMessage::CommandComplete { tag })
}

/// Decode a ParameterStatus body: name and value cstrings
pub fn decode_parameter_status(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let name = reader.read_cstr()?;
    let value = reader.read_cstr()?;
    Ok(BackendMessage::ParameterStatus { name, value })
}

/// Decode a BackendKeyData body: process id and secret key
pub fn decode_backend_key_data(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let process_id = reader.read_i32()?;
    let secret_key = reader.read_i32()?;
    Ok(BackendMessage::BackendKeyData {
        process_id,
        secret_key,
    })
}

/// Decode a ReadyForQuery body: one transaction status byte
pub fn decode_ready_for_query(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let status = TxStatus::try_from(reader.read_u8()?)?;
    Ok(BackendMessage::ReadyForQuery { status })
}

/// Decode a RowDescription body: field count, then per-field metadata.
///
/// Fields are preserved in server transmission order.
pub fn decode_row_description(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let count = reader.read_u16()?;
    let mut fields = Vec::with_capacity(usize::from(count).min(reader.remaining()));

    for _ in 0..count {
        let name = reader.read_cstr()?;
        let table_oid = reader.read_i32()?;
        let column_attr = reader.read_i16()?;
        let type_oid = reader.read_i32()?;
        let type_size = reader.read_i16()?;
        let type_modifier = reader.read_i32()?;
        let format = FormatCode::try_from(reader.read_i16()?)?;

        fields.push(FieldDescription {
            name,
            table_oid,
            column_attr,
            type_oid,
            type_size,
            type_modifier,
            format,
        });
    }

    Ok(BackendMessage::RowDescription { fields })
}

/// Decode a DataRow body: column count, then length-prefixed values.
///
/// A column length of `-1` is SQL NULL, `0` an empty non-null value and
/// `k > 0` exactly `k` bytes. Lengths below `-1` are malformed: the
/// protocol defines only `-1` as the NULL sentinel.
pub fn decode_data_row(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let count = reader.read_u16()?;
    let mut columns = Vec::with_capacity(usize::from(count).min(reader.remaining()));

    for _ in 0..count {
        let len = reader.read_i32()?;
        let column = match len {
            -1 => None,
            len if len < -1 => {
                return Err(Error::PacketDecoding(format!(
                    "invalid data row column length: {}",
                    len
                )));
            }
            len => Some(Bytes::copy_from_slice(reader.take(len as usize)?)),
        };
        columns.push(column);
    }

    Ok(BackendMessage::DataRow { columns })
}

/// Decode an Authentication body: an i32 code plus code-specific payload
pub fn decode_authentication(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let code = reader.read_i32()?;

    let auth = match code {
        auth::OK => AuthenticationMessage::Ok,
        auth::KERBEROS_V5 => AuthenticationMessage::KerberosV5,
        auth::CLEARTEXT_PASSWORD => AuthenticationMessage::CleartextPassword,
        auth::MD5_PASSWORD => {
            let mut salt = [0u8; 4];
            salt.copy_from_slice(reader.take(4)?);
            AuthenticationMessage::Md5Password { salt }
        }
        auth::SCM_CREDENTIAL => AuthenticationMessage::ScmCredential,
        auth::GSS => AuthenticationMessage::Gss,
        auth::GSS_CONTINUE => AuthenticationMessage::GssContinue {
            data: Bytes::copy_from_slice(reader.take_rest()),
        },
        auth::SSPI => AuthenticationMessage::Sspi,
        code if code < 0 => {
            return Err(Error::PacketDecoding(format!(
                "negative authentication code: {}",
                code
            )));
        }
        code => AuthenticationMessage::Unknown(code),
    };

    Ok(BackendMessage::Authentication(auth))
}

/// Decode a NoticeResponse body via the field stream and SQLSTATE classifier
pub fn decode_notice_response(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let fields = read_field_stream(&mut reader)?;
    Ok(BackendMessage::NoticeResponse(PostgresMessage::from_fields(
        &fields,
    )?))
}

/// Decode an ErrorResponse body via the field stream and SQLSTATE classifier
pub fn decode_error_response(body: &[u8]) -> Result<BackendMessage> {
    let mut reader = BufferReader::new(body);
    let fields = read_field_stream(&mut reader)?;
    Ok(BackendMessage::ErrorResponse(PostgresMessage::from_fields(
        &fields,
    )?))
}

/// Read the `(tag, cstring)*` stream of an ErrorResponse/NoticeResponse
/// body, terminated by a zero tag byte.
///
/// The zero byte is a sentinel, not a field tag; running off the end of
/// the body before seeing it is a truncated packet. Pairs come back in
/// wire order, duplicates included (downstream lookup resolves duplicates
/// to the first occurrence).
pub fn read_field_stream(reader: &mut BufferReader<'_>) -> Result<Vec<(char, String)>> {
    let mut fields = Vec::new();

    loop {
        let tag = reader.read_u8()?;
        if tag == 0 {
            break;
        }
        let value = reader.read_cstr()?;
        fields.push((char::from(tag), value));
    }

    Ok(fields)
}
