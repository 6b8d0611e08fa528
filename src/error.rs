use std::fmt;
use std::io;

// ── Error taxonomy ─────────────────────────────────────────────────
//
//  AdapterError
//  ├── InvalidArgument        (precondition: bad range, empty host)
//  ├── SentinelNotConfigured  (precondition: topology lacks sentinels)
//  ├── PipelineUnsupported    (precondition: op disallowed while pipelined)
//  ├── Connection             (I/O surfaced by the driver)
//  ├── Protocol               (malformed URL or driver payload)
//  └── Redis                  (server error string, with structured kind)
//
// The three precondition variants are always raised before any driver
// call is issued.

/// Structured Redis error kinds for programmatic matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedisErrorKind {
    /// Generic ERR
    Err,
    /// WRONGTYPE Operation against a key holding the wrong kind of value
    WrongType,
    /// LOADING Redis is loading the dataset in memory
    Loading,
    /// READONLY You can't write against a read only replica
    ReadOnly,
    /// NOSCRIPT No matching script
    NoScript,
    /// BUSY Redis is busy running a script
    Busy,
    /// Any other Redis error prefix
    Other(String),
}

impl RedisErrorKind {
    /// Parse from a Redis error message string (e.g. "WRONGTYPE Operation against…").
    pub fn from_error_msg(msg: &str) -> (Self, String) {
        let kind = if msg.starts_with("WRONGTYPE") {
            Self::WrongType
        } else if msg.starts_with("LOADING") {
            Self::Loading
        } else if msg.starts_with("READONLY") {
            Self::ReadOnly
        } else if msg.starts_with("NOSCRIPT") {
            Self::NoScript
        } else if msg.starts_with("BUSY") {
            Self::Busy
        } else if msg.starts_with("ERR") {
            Self::Err
        } else {
            // Extract first word as error kind
            let prefix = msg.split_whitespace().next().unwrap_or("UNKNOWN");
            Self::Other(prefix.to_string())
        };
        (kind, msg.to_string())
    }
}

/// All error variants for redapt.
#[derive(Debug)]
pub enum AdapterError {
    /// Malformed or out-of-range input, rejected before dispatch.
    InvalidArgument(String),
    /// Sentinel-backed operation requested but no sentinels are configured.
    SentinelNotConfigured(String),
    /// Operation requires a synchronous reply and is disallowed while
    /// the connection is in pipeline mode. Carries the operation name.
    PipelineUnsupported(&'static str),
    /// TCP / IO level errors surfaced by the underlying driver.
    Connection(io::Error),
    /// Malformed URL or driver payload.
    Protocol(String),
    /// Redis returned an error string with structured kind.
    Redis {
        kind: RedisErrorKind,
        message: String,
    },
}

impl AdapterError {
    /// Create a Redis error from a raw error message, auto-parsing the kind.
    pub fn redis(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let (kind, message) = RedisErrorKind::from_error_msg(&msg);
        Self::Redis { kind, message }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Check if this is a precondition failure on the arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this operation was rejected by the pipeline mode gate.
    pub fn is_pipeline_unsupported(&self) -> bool {
        matches!(self, Self::PipelineUnsupported(_))
    }

    /// Check if this is a missing-sentinel configuration failure.
    pub fn is_sentinel_not_configured(&self) -> bool {
        matches!(self, Self::SentinelNotConfigured(_))
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::SentinelNotConfigured(msg) => write!(f, "sentinel not configured: {msg}"),
            Self::PipelineUnsupported(op) => {
                write!(f, "{op} is not supported while a pipeline is open")
            }
            Self::Connection(e) => write!(f, "connection error: {e}"),
            Self::Protocol(msg) => write!(f, "protocol error: {msg}"),
            Self::Redis { message, .. } => write!(f, "redis error: {message}"),
        }
    }
}

impl std::error::Error for AdapterError {}

impl From<io::Error> for AdapterError {
    fn from(e: io::Error) -> Self {
        Self::Connection(e)
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;

// ── Tests ──────────────────────────────────────────────────────────
