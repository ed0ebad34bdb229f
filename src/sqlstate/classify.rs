//! SQLSTATE classification
//!
//! PostgreSQL identifies every error/notice condition with a five-character
//! SQLSTATE whose first two characters name the class. The classifier maps
//! a validated [`ErrorParams`] record to the class-level condition, with
//! [`PostgresMessage::UnknownError`] as the total fallback so codes from
//! newer servers remain decodable.
//!
//! See <https://www.postgresql.org/docs/current/errcodes-appendix.html>

use super::params::ErrorParams;
use crate::Result;

/// A classified PostgreSQL error or notice, keyed by SQLSTATE class.
///
/// Every variant carries the full field record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostgresMessage {
    /// Class 00 — Successful Completion
    SuccessfulCompletion(ErrorParams),
    /// Class 01 — Warning
    Warning(ErrorParams),
    /// Class 02 — No Data
    NoData(ErrorParams),
    /// Class 03 — SQL Statement Not Yet Complete
    SqlStatementNotYetComplete(ErrorParams),
    /// Class 08 — Connection Exception
    ConnectionException(ErrorParams),
    /// Class 09 — Triggered Action Exception
    TriggeredActionException(ErrorParams),
    /// Class 0A — Feature Not Supported
    FeatureNotSupported(ErrorParams),
    /// Class 0B — Invalid Transaction Initiation
    InvalidTransactionInitiation(ErrorParams),
    /// Class 0F — Locator Exception
    LocatorException(ErrorParams),
    /// Class 0L — Invalid Grantor
    InvalidGrantor(ErrorParams),
    /// Class 0P — Invalid Role Specification
    InvalidRoleSpecification(ErrorParams),
    /// Class 0Z — Diagnostics Exception
    DiagnosticsException(ErrorParams),
    /// Class 20 — Case Not Found
    CaseNotFound(ErrorParams),
    /// Class 21 — Cardinality Violation
    CardinalityViolation(ErrorParams),
    /// Class 22 — Data Exception
    DataException(ErrorParams),
    /// Class 23 — Integrity Constraint Violation
    IntegrityConstraintViolation(ErrorParams),
    /// Class 24 — Invalid Cursor State
    InvalidCursorState(ErrorParams),
    /// Class 25 — Invalid Transaction State
    InvalidTransactionState(ErrorParams),
    /// Class 26 — Invalid SQL Statement Name
    InvalidSqlStatementName(ErrorParams),
    /// Class 27 — Triggered Data Change Violation
    TriggeredDataChangeViolation(ErrorParams),
    /// Class 28 — Invalid Authorization Specification
    InvalidAuthorizationSpecification(ErrorParams),
    /// Class 2B — Dependent Privilege Descriptors Still Exist
    DependentPrivilegeDescriptorsStillExist(ErrorParams),
    /// Class 2D — Invalid Transaction Termination
    InvalidTransactionTermination(ErrorParams),
    /// Class 2F — SQL Routine Exception
    SqlRoutineException(ErrorParams),
    /// Class 34 — Invalid Cursor Name
    InvalidCursorName(ErrorParams),
    /// Class 38 — External Routine Exception
    ExternalRoutineException(ErrorParams),
    /// Class 39 — External Routine Invocation Exception
    ExternalRoutineInvocationException(ErrorParams),
    /// Class 3B — Savepoint Exception
    SavepointException(ErrorParams),
    /// Class 3D — Invalid Catalog Name
    InvalidCatalogName(ErrorParams),
    /// Class 3F — Invalid Schema Name
    InvalidSchemaName(ErrorParams),
    /// Class 40 — Transaction Rollback
    TransactionRollback(ErrorParams),
    /// Class 42 — Syntax Error or Access Rule Violation
    SyntaxErrorOrAccessRuleViolation(ErrorParams),
    /// Class 44 — WITH CHECK OPTION Violation
    WithCheckOptionViolation(ErrorParams),
    /// Class 53 — Insufficient Resources
    InsufficientResources(ErrorParams),
    /// Class 54 — Program Limit Exceeded
    ProgramLimitExceeded(ErrorParams),
    /// Class 55 — Object Not In Prerequisite State
    ObjectNotInPrerequisiteState(ErrorParams),
    /// Class 57 — Operator Intervention
    OperatorIntervention(ErrorParams),
    /// Class 58 — System Error
    SystemError(ErrorParams),
    /// Class 72 — Snapshot Failure
    SnapshotFailure(ErrorParams),
    /// Class F0 — Configuration File Error
    ConfigFileError(ErrorParams),
    /// Class HV — Foreign Data Wrapper Error
    FdwError(ErrorParams),
    /// Class P0 — PL/pgSQL Error
    PlPgSqlError(ErrorParams),
    /// Class XX — Internal Error
    InternalError(ErrorParams),
    /// Any SQLSTATE outside the known classes
    UnknownError(ErrorParams),
}

impl PostgresMessage {
    /// Validate and classify an error/notice field stream in one step
    pub fn from_fields(fields: &[(char, String)]) -> Result<Self> {
        Ok(Self::classify(ErrorParams::from_fields(fields)?))
    }

    /// Classify by SQLSTATE class prefix. Total: codes outside the known
    /// classes (including malformed ones) become `UnknownError`.
    pub fn classify(params: ErrorParams) -> Self {
        match Self::class_constructor(&params.code) {
            Some(constructor) => constructor(params),
            None => {
                tracing::debug!(code = %params.code, "unrecognized SQLSTATE class");
                Self::UnknownError(params)
            }
        }
    }

    /// Static class-prefix lookup: two-character SQLSTATE class to variant
    /// constructor.
    fn class_constructor(code: &str) -> Option<fn(ErrorParams) -> Self> {
        let constructor = match code.get(..2)? {
            "00" => Self::SuccessfulCompletion,
            "01" => Self::Warning,
            "02" => Self::NoData,
            "03" => Self::SqlStatementNotYetComplete,
            "08" => Self::ConnectionException,
            "09" => Self::TriggeredActionException,
            "0A" => Self::FeatureNotSupported,
            "0B" => Self::InvalidTransactionInitiation,
            "0F" => Self::LocatorException,
            "0L" => Self::InvalidGrantor,
            "0P" => Self::InvalidRoleSpecification,
            "0Z" => Self::DiagnosticsException,
            "20" => Self::CaseNotFound,
            "21" => Self::CardinalityViolation,
            "22" => Self::DataException,
            "23" => Self::IntegrityConstraintViolation,
            "24" => Self::InvalidCursorState,
            "25" => Self::InvalidTransactionState,
            "26" => Self::InvalidSqlStatementName,
            "27" => Self::TriggeredDataChangeViolation,
            "28" => Self::InvalidAuthorizationSpecification,
            "2B" => Self::DependentPrivilegeDescriptorsStillExist,
            "2D" => Self::InvalidTransactionTermination,
            "2F" => Self::SqlRoutineException,
            "34" => Self::InvalidCursorName,
            "38" => Self::ExternalRoutineException,
            "39" => Self::ExternalRoutineInvocationException,
            "3B" => Self::SavepointException,
            "3D" => Self::InvalidCatalogName,
            "3F" => Self::InvalidSchemaName,
            "40" => Self::TransactionRollback,
            "42" => Self::SyntaxErrorOrAccessRuleViolation,
            "44" => Self::WithCheckOptionViolation,
            "53" => Self::InsufficientResources,
            "54" => Self::ProgramLimitExceeded,
            "55" => Self::ObjectNotInPrerequisiteState,
            "57" => Self::OperatorIntervention,
            "58" => Self::SystemError,
            "72" => Self::SnapshotFailure,
            "F0" => Self::ConfigFileError,
            "HV" => Self::FdwError,
            "P0" => Self::PlPgSqlError,
            "XX" => Self::InternalError,
            _ => return None,
        };
        Some(constructor)
    }

    /// The field record carried by this message
    pub fn params(&self) -> &ErrorParams {
        use PostgresMessage::*;
        match self {
            SuccessfulCompletion(p) | Warning(p) | NoData(p) | SqlStatementNotYetComplete(p)
            | ConnectionException(p) | TriggeredActionException(p) | FeatureNotSupported(p)
            | InvalidTransactionInitiation(p) | LocatorException(p) | InvalidGrantor(p)
            | InvalidRoleSpecification(p) | DiagnosticsException(p) | CaseNotFound(p)
            | CardinalityViolation(p) | DataException(p) | IntegrityConstraintViolation(p)
            | InvalidCursorState(p) | InvalidTransactionState(p) | InvalidSqlStatementName(p)
            | TriggeredDataChangeViolation(p) | InvalidAuthorizationSpecification(p)
            | DependentPrivilegeDescriptorsStillExist(p) | InvalidTransactionTermination(p)
            | SqlRoutineException(p) | InvalidCursorName(p) | ExternalRoutineException(p)
            | ExternalRoutineInvocationException(p) | SavepointException(p)
            | InvalidCatalogName(p) | InvalidSchemaName(p) | TransactionRollback(p)
            | SyntaxErrorOrAccessRuleViolation(p) | WithCheckOptionViolation(p)
            | InsufficientResources(p) | ProgramLimitExceeded(p)
            | ObjectNotInPrerequisiteState(p) | OperatorIntervention(p) | SystemError(p)
            | SnapshotFailure(p) | ConfigFileError(p) | FdwError(p) | PlPgSqlError(p)
            | InternalError(p) | UnknownError(p) => p,
        }
    }

    /// Consume the message, returning the field record
    pub fn into_params(self) -> ErrorParams {
        use PostgresMessage::*;
        match self {
            SuccessfulCompletion(p) | Warning(p) | NoData(p) | SqlStatementNotYetComplete(p)
            | ConnectionException(p) | TriggeredActionException(p) | FeatureNotSupported(p)
            | InvalidTransactionInitiation(p) | LocatorException(p) | InvalidGrantor(p)
            | InvalidRoleSpecification(p) | DiagnosticsException(p) | CaseNotFound(p)
            | CardinalityViolation(p) | DataException(p) | IntegrityConstraintViolation(p)
            | InvalidCursorState(p) | InvalidTransactionState(p) | InvalidSqlStatementName(p)
            | TriggeredDataChangeViolation(p) | InvalidAuthorizationSpecification(p)
            | DependentPrivilegeDescriptorsStillExist(p) | InvalidTransactionTermination(p)
            | SqlRoutineException(p) | InvalidCursorName(p) | ExternalRoutineException(p)
            | ExternalRoutineInvocationException(p) | SavepointException(p)
            | InvalidCatalogName(p) | InvalidSchemaName(p) | TransactionRollback(p)
            | SyntaxErrorOrAccessRuleViolation(p) | WithCheckOptionViolation(p)
            | InsufficientResources(p) | ProgramLimitExceeded(p)
            | ObjectNotInPrerequisiteState(p) | OperatorIntervention(p) | SystemError(p)
            | SnapshotFailure(p) | ConfigFileError(p) | FdwError(p) | PlPgSqlError(p)
            | InternalError(p) | UnknownError(p) => p,
        }
    }

    /// Severity text (ERROR, FATAL, WARNING, NOTICE, ...)
    pub fn severity(&self) -> &str {
        &self.params().severity
    }

    /// The five-character SQLSTATE as sent by the server
    pub fn code(&self) -> &str {
        &self.params().code
    }

    /// Primary human-readable message
    pub fn message(&self) -> &str {
        &self.params().message
    }
}

impl std::fmt::Display for PostgresMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.params())
    }
}
