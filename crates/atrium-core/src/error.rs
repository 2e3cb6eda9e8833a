//! Error types for atrium operations.
//!
//! Every failure crossing a component boundary is classified into one of the
//! variants below before it reaches a caller; raw driver errors are carried
//! as sources and logged, never returned to clients verbatim.

use std::fmt;

use thiserror::Error;

/// Result type alias for atrium operations.
pub type AtriumResult<T> = Result<T, AtriumError>;

/// Subject of a failed resource lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Room,
    User,
    Graph,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Room => "room",
            Subject::User => "user",
            Subject::Graph => "graph",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for all atrium operations.
#[derive(Error, Debug)]
pub enum AtriumError {
    /// Input validation failed.
    #[error("Validation error: {message}")]
    Validation { message: String, code: ErrorCode },

    /// A resource lookup came back empty.
    #[error("{subject} not found: {id}")]
    NotFound {
        subject: Subject,
        id: String,
        code: ErrorCode,
    },

    /// Relational store operation failed.
    #[error("Database error: {message}")]
    Database {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Graph store operation failed.
    #[error("Graph store error: {message}")]
    GraphStore {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Graph schema creation failed. Startup treats this as fatal: the
    /// process must not serve traffic without its graph schema.
    #[error("Schema creation failed: {message}")]
    SchemaCreation {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The per-request deadline elapsed before the store call finished.
    #[error("Operation timed out: {operation}")]
    Timeout { operation: &'static str },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (VAL_xxx)
    ValInvalidInput,
    ValInvalidIdentifier,

    // Resource lookup (RES_xxx)
    ResRoomNotFound,
    ResUserNotFound,
    ResGraphNotFound,

    // Database (DB_xxx)
    DbConnectionFailed,
    DbOperationFailed,

    // Graph store (GRP_xxx)
    GrpConnectionFailed,
    GrpOperationFailed,

    // Schema (SCH_xxx)
    SchCreationFailed,

    // Network (NET_xxx)
    NetTimeout,

    // Configuration (CFG_xxx)
    CfgMissingVariable,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValInvalidInput => "VAL_001",
            ErrorCode::ValInvalidIdentifier => "VAL_002",
            ErrorCode::ResRoomNotFound => "RES_001",
            ErrorCode::ResUserNotFound => "RES_002",
            ErrorCode::ResGraphNotFound => "RES_003",
            ErrorCode::DbConnectionFailed => "DB_001",
            ErrorCode::DbOperationFailed => "DB_002",
            ErrorCode::GrpConnectionFailed => "GRP_001",
            ErrorCode::GrpOperationFailed => "GRP_002",
            ErrorCode::SchCreationFailed => "SCH_001",
            ErrorCode::NetTimeout => "NET_001",
            ErrorCode::CfgMissingVariable => "CFG_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl AtriumError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code: ErrorCode::ValInvalidInput,
        }
    }

    /// Create a validation error for a malformed identifier.
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::Validation {
            message: format!("invalid identifier '{}'", id.into()),
            code: ErrorCode::ValInvalidIdentifier,
        }
    }

    /// Create a room-not-found error.
    pub fn room_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            subject: Subject::Room,
            id: id.into(),
            code: ErrorCode::ResRoomNotFound,
        }
    }

    /// Create a user-not-found error.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            subject: Subject::User,
            id: id.into(),
            code: ErrorCode::ResUserNotFound,
        }
    }

    /// Create a graph-not-found error.
    pub fn graph_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            subject: Subject::Graph,
            id: name.into(),
            code: ErrorCode::ResGraphNotFound,
        }
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            code: ErrorCode::DbOperationFailed,
            source: None,
        }
    }

    /// Create a database error wrapping an underlying driver error.
    pub fn database_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Database {
            message: message.into(),
            code: ErrorCode::DbOperationFailed,
            source: Some(Box::new(source)),
        }
    }

    /// Create a graph store error.
    pub fn graph_store(message: impl Into<String>) -> Self {
        Self::GraphStore {
            message: message.into(),
            code: ErrorCode::GrpOperationFailed,
            source: None,
        }
    }

    /// Create a graph store error wrapping an underlying driver error.
    pub fn graph_store_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::GraphStore {
            message: message.into(),
            code: ErrorCode::GrpOperationFailed,
            source: Some(Box::new(source)),
        }
    }

    /// Create a schema creation error wrapping the failing create call.
    pub fn schema_creation(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SchemaCreation {
            message: message.into(),
            code: ErrorCode::SchCreationFailed,
            source: Some(Box::new(source)),
        }
    }

    /// Create a timeout error for the named operation.
    pub fn timeout(operation: &'static str) -> Self {
        Self::Timeout { operation }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { code, .. } => *code,
            Self::NotFound { code, .. } => *code,
            Self::Database { code, .. } => *code,
            Self::GraphStore { code, .. } => *code,
            Self::SchemaCreation { code, .. } => *code,
            Self::Timeout { .. } => ErrorCode::NetTimeout,
            Self::Configuration(_) => ErrorCode::CfgMissingVariable,
            _ => ErrorCode::Internal,
        }
    }

    /// Whether the failure was caused by the client rather than the stores.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }
}
