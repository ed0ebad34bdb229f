//! Postgres protocol constants

/// Protocol version 3.0
pub const PROTOCOL_VERSION: i32 = 0x0003_0000;

/// Maximum message length (1 GB), matching PostgreSQL's own `PQ_LARGE_MESSAGE_LIMIT`.
///
/// Any packet whose length field exceeds this value is rejected before
/// allocation to prevent denial-of-service via crafted length headers.
pub const MAX_MESSAGE_LENGTH: usize = 1_073_741_824;

/// Backend message type tags
pub mod tags {
    /// Authentication request
    pub const AUTHENTICATION: u8 = b'R';

    /// Backend key data
    pub const BACKEND_KEY_DATA: u8 = b'K';

    /// Command complete
    pub const COMMAND_COMPLETE: u8 = b'C';

    /// Data row
    pub const DATA_ROW: u8 = b'D';

    /// Error response
    pub const ERROR_RESPONSE: u8 = b'E';

    /// Notice response
    pub const NOTICE_RESPONSE: u8 = b'N';

    /// Parameter status
    pub const PARAMETER_STATUS: u8 = b'S';

    /// Ready for query
    pub const READY_FOR_QUERY: u8 = b'Z';

    /// Row description
    pub const ROW_DESCRIPTION: u8 = b'T';
}

/// Authentication request codes (first i32 of an Authentication body)
pub mod auth {
    /// Authentication successful
    pub const OK: i32 = 0;

    /// Kerberos V5 authentication required
    pub const KERBEROS_V5: i32 = 2;

    /// Cleartext password required
    pub const CLEARTEXT_PASSWORD: i32 = 3;

    /// MD5 password required (followed by a 4-byte salt)
    pub const MD5_PASSWORD: i32 = 5;

    /// SCM credentials message required
    pub const SCM_CREDENTIAL: i32 = 6;

    /// GSSAPI authentication required
    pub const GSS: i32 = 7;

    /// GSSAPI continuation data (rest of the body)
    pub const GSS_CONTINUE: i32 = 8;

    /// SSPI authentication required
    pub const SSPI: i32 = 9;
}

/// Transaction status bytes (ReadyForQuery body)
pub mod tx_status {
    /// Idle (not in transaction)
    pub const IDLE: u8 = b'I';

    /// In transaction block
    pub const IN_TRANSACTION: u8 = b'T';

    /// Failed transaction (queries will be rejected until END)
    pub const FAILED: u8 = b'E';
}

/// Error/notice field tag characters
///
/// See <https://www.postgresql.org/docs/current/protocol-error-fields.html>
pub mod fields {
    /// Severity: ERROR, FATAL, PANIC, WARNING, NOTICE, DEBUG, INFO, LOG
    pub const SEVERITY: char = 'S';

    /// SQLSTATE code
    pub const CODE: char = 'C';

    /// Primary human-readable message
    pub const MESSAGE: char = 'M';

    /// Optional secondary message with more detail
    pub const DETAIL: char = 'D';

    /// Optional suggestion about the problem
    pub const HINT: char = 'H';

    /// Error cursor position in the original query string
    pub const POSITION: char = 'P';

    /// Cursor position in an internally generated query
    pub const INTERNAL_POSITION: char = 'p';

    /// Text of the internally generated query
    pub const INTERNAL_QUERY: char = 'q';

    /// Context in which the error occurred (call stack traceback)
    pub const WHERE: char = 'W';

    /// Schema name
    pub const SCHEMA: char = 's';

    /// Table name
    pub const TABLE: char = 't';

    /// Column name
    pub const COLUMN: char = 'c';

    /// Data type name
    pub const DATA_TYPE: char = 'd';

    /// Constraint name
    pub const CONSTRAINT: char = 'n';

    /// Source file name where the error was reported
    pub const FILE: char = 'F';

    /// Source line number where the error was reported
    pub const LINE: char = 'L';

    /// Source routine reporting the error
    pub const ROUTINE: char = 'R';
}
