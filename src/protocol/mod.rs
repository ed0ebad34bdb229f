//! PostgreSQL wire protocol layer
//!
//! This module handles:
//! * Packet framing model (tag + body)
//! * Typed backend message decoding
//! * The error/notice field stream

pub mod constants;
pub mod decode;
pub mod message;
pub mod reader;

pub use decode::{
    decode_authentication, decode_backend_key_data, decode_command_complete, decode_data_row,
    decode_error_response, decode_message, decode_notice_response, decode_parameter_status,
    decode_ready_for_query, decode_row_description, read_field_stream,
};
pub use message::{
    AuthenticationMessage, BackendMessage, FieldDescription, FormatCode, Packet, TxStatus,
};
pub use reader::BufferReader;
