//! # cassis-wire
//!
//! Decoder for the PostgreSQL backend wire protocol (version 3.0).
//!
//! Given framed packets arriving from a PostgreSQL server, this crate
//! reconstructs typed backend-message values with full semantic validation:
//!
//! * [`protocol`] holds the packet framing model, the [`BackendMessage`]
//!   union and the per-message body decoders
//! * [`sqlstate`] holds the structured error/notice subsystem: required-field
//!   validation and SQLSTATE classification into [`PostgresMessage`]
//!
//! The crate performs no I/O. A transport collaborator frames bytes into
//! [`Packet`] values (the [`Packet::parse`] helper does the envelope split)
//! and a session layer consumes the decoded messages. Decoding is purely
//! functional: every entry point takes a packet and returns a value or a
//! typed [`Error`], never panicking on wire input.
//!
//! ## Example
//!
//! ```
//! use cassis_wire::{decode_message, BackendMessage, Packet, TxStatus};
//!
//! let packet = Packet::new(b'Z', vec![b'I']);
//! match decode_message(&packet).unwrap() {
//!     BackendMessage::ReadyForQuery { status } => assert_eq!(status, TxStatus::Idle),
//!     other => panic!("unexpected message: {:?}", other),
//! }
//! ```

pub mod error;
pub mod protocol;
pub mod sqlstate;

pub use error::{Error, Result};
pub use protocol::{
    decode_message, AuthenticationMessage, BackendMessage, FieldDescription, FormatCode, Packet,
    TxStatus,
};
pub use sqlstate::{ErrorParams, PostgresMessage};
