//! Error/notice field record and required-field validation

use crate::protocol::constants::fields;
use crate::{Error, Result};

const MISSING_SEVERITY: &str = "Required Severity Level was not present.";
const MISSING_CODE: &str = "Required SQLSTATE Code was not present.";
const MISSING_MESSAGE: &str = "Required Message was not present.";

/// All known PostgreSQL error/notice fields.
///
/// Severity, code and message are always present; servers send the rest
/// as the situation warrants. See
/// <https://www.postgresql.org/docs/current/protocol-error-fields.html>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorParams {
    /// Severity: ERROR, FATAL, PANIC, WARNING, NOTICE, DEBUG, INFO, LOG
    pub severity: String,
    /// SQLSTATE code (five ASCII characters)
    pub code: String,
    /// Primary human-readable message
    pub message: String,
    /// Secondary message with more detail
    pub detail: Option<String>,
    /// Suggestion about the problem
    pub hint: Option<String>,
    /// Cursor position in the original query string
    pub position: Option<String>,
    /// Cursor position in an internally generated query
    pub internal_position: Option<String>,
    /// Text of the internally generated query
    pub internal_query: Option<String>,
    /// Context in which the error occurred
    pub where_: Option<String>,
    /// Schema name
    pub schema_name: Option<String>,
    /// Table name
    pub table_name: Option<String>,
    /// Column name
    pub column_name: Option<String>,
    /// Data type name
    pub data_type_name: Option<String>,
    /// Constraint name
    pub constraint_name: Option<String>,
    /// Source file reporting the error
    pub file: Option<String>,
    /// Source line reporting the error
    pub line: Option<String>,
    /// Source routine reporting the error
    pub routine: Option<String>,
}

impl ErrorParams {
    /// Build the record from an ordered `(tag, value)` field stream.
    ///
    /// The three required fields are validated together: if several are
    /// missing, the error carries one message per missing field in
    /// Severity, Code, Message order. Duplicate tags resolve to the first
    /// occurrence; missing optional fields stay absent.
    pub fn from_fields(fields_in: &[(char, String)]) -> Result<Self> {
        let severity = first_value(fields::SEVERITY, fields_in);
        let code = first_value(fields::CODE, fields_in);
        let message = first_value(fields::MESSAGE, fields_in);

        let (severity, code, message) = match (severity, code, message) {
            (Some(severity), Some(code), Some(message)) => {
                (severity.to_owned(), code.to_owned(), message.to_owned())
            }
            (severity, code, message) => {
                let mut missing = Vec::new();
                if severity.is_none() {
                    missing.push(MISSING_SEVERITY.to_owned());
                }
                if code.is_none() {
                    missing.push(MISSING_CODE.to_owned());
                }
                if message.is_none() {
                    missing.push(MISSING_MESSAGE.to_owned());
                }
                return Err(Error::ErrorResponseDecoding(missing));
            }
        };

        let optional = |tag| first_value(tag, fields_in).map(str::to_owned);

        Ok(Self {
            severity,
            code,
            message,
            detail: optional(fields::DETAIL),
            hint: optional(fields::HINT),
            position: optional(fields::POSITION),
            internal_position: optional(fields::INTERNAL_POSITION),
            internal_query: optional(fields::INTERNAL_QUERY),
            where_: optional(fields::WHERE),
            schema_name: optional(fields::SCHEMA),
            table_name: optional(fields::TABLE),
            column_name: optional(fields::COLUMN),
            data_type_name: optional(fields::DATA_TYPE),
            constraint_name: optional(fields::CONSTRAINT),
            file: optional(fields::FILE),
            line: optional(fields::LINE),
            routine: optional(fields::ROUTINE),
        })
    }
}

impl std::fmt::Display for ErrorParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

/// First value whose tag equals `tag`, or `None`
pub fn first_value<'a>(tag: char, fields: &'a [(char, String)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(pairs: &[(char, &str)]) -> Vec<(char, String)> {
        pairs.iter().map(|(t, v)| (*t, v.to_string())).collect()
    }

    #[test]
    fn test_from_fields_minimal() {
        let fields = stream(&[('S', "ERROR"), ('C', "42601"), ('M', "syntax error")]);
        let params = ErrorParams::from_fields(&fields).unwrap();
        assert_eq!(params.severity, "ERROR");
        assert_eq!(params.code, "42601");
        assert_eq!(params.message, "syntax error");
        assert_eq!(params.detail, None);
        assert_eq!(params.hint, None);
        assert_eq!(params.routine, None);
    }

    #[test]
    fn test_from_fields_optional_fields() {
        let fields = stream(&[
            ('S', "ERROR"),
            ('C', "23505"),
            ('M', "duplicate key"),
            ('D', "Key (id)=(1) already exists."),
            ('s', "public"),
            ('t', "users"),
            ('n', "users_pkey"),
            ('F', "nbtinsert.c"),
            ('L', "673"),
            ('R', "_bt_check_unique"),
        ]);
        let params = ErrorParams::from_fields(&fields).unwrap();
        assert_eq!(params.detail.as_deref(), Some("Key (id)=(1) already exists."));
        assert_eq!(params.schema_name.as_deref(), Some("public"));
        assert_eq!(params.table_name.as_deref(), Some("users"));
        assert_eq!(params.constraint_name.as_deref(), Some("users_pkey"));
        assert_eq!(params.file.as_deref(), Some("nbtinsert.c"));
        assert_eq!(params.line.as_deref(), Some("673"));
        assert_eq!(params.routine.as_deref(), Some("_bt_check_unique"));
    }

    #[test]
    fn test_from_fields_accumulates_missing_in_order() {
        let fields = stream(&[('M', "x")]);
        let err = ErrorParams::from_fields(&fields).unwrap_err();
        assert_eq!(
            err,
            Error::ErrorResponseDecoding(vec![
                MISSING_SEVERITY.to_owned(),
                MISSING_CODE.to_owned(),
            ])
        );
    }

    #[test]
    fn test_from_fields_all_missing() {
        let err = ErrorParams::from_fields(&[]).unwrap_err();
        assert_eq!(
            err,
            Error::ErrorResponseDecoding(vec![
                MISSING_SEVERITY.to_owned(),
                MISSING_CODE.to_owned(),
                MISSING_MESSAGE.to_owned(),
            ])
        );
    }

    #[test]
    fn test_from_fields_single_missing() {
        let fields = stream(&[('S', "ERROR"), ('M', "x")]);
        let err = ErrorParams::from_fields(&fields).unwrap_err();
        assert_eq!(
            err,
            Error::ErrorResponseDecoding(vec![MISSING_CODE.to_owned()])
        );
    }

    #[test]
    fn test_duplicate_tags_resolve_to_first_occurrence() {
        let fields = stream(&[
            ('S', "ERROR"),
            ('C', "42601"),
            ('M', "first"),
            ('M', "second"),
        ]);
        let params = ErrorParams::from_fields(&fields).unwrap();
        assert_eq!(params.message, "first");
    }

    #[test]
    fn test_first_value() {
        let fields = stream(&[('H', "try again"), ('H', "later")]);
        assert_eq!(first_value('H', &fields), Some("try again"));
        assert_eq!(first_value('D', &fields), None);
    }

    #[test]
    fn test_display() {
        let fields = stream(&[('S', "ERROR"), ('C', "42601"), ('M', "syntax error")]);
        let params = ErrorParams::from_fields(&fields).unwrap();
        assert_eq!(params.to_string(), "syntax error (42601)");
    }
}
