//! Command-level building blocks shared by the adapter.
//!
//! Everything here is pure argument transformation: no I/O, no driver
//! interaction. The adapter validates through these helpers before it
//! dispatches anything.

use bytes::Bytes;
use std::fmt;

use crate::error::{AdapterError, Result};

/// Persistence behaviour requested alongside SHUTDOWN.
///
/// The no-option form of SHUTDOWN is expressed as
/// `Option::<ShutdownOption>::None` at the adapter surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOption {
    /// Force a save of the dataset before shutting down.
    Save,
    /// Skip the save even when a save point is configured.
    NoSave,
}

impl ShutdownOption {
    /// The literal token the server expects.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Save => "SAVE",
            Self::NoSave => "NOSAVE",
        }
    }
}

/// Build the Lua script that carries a SHUTDOWN with an explicit option.
///
/// Some drivers expose no shutdown-with-argument primitive, so the option
/// form goes through generic script evaluation. The byte sequence is part
/// of the adapter contract and must match exactly:
///
/// ```text
/// return redis.call('SHUTDOWN','SAVE')
/// return redis.call('SHUTDOWN','NOSAVE')
/// ```
pub fn shutdown_script(option: ShutdownOption) -> Bytes {
    Bytes::from(format!("return redis.call('SHUTDOWN','{}')", option.as_token()))
}

/// A (host, port) pair identifying a client or sentinel endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddr {
    pub host: String,
    pub port: u16,
}

impl NodeAddr {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Serialize as `host:port` (decimal port, no leading zeros) — the
    /// wire format CLIENT KILL expects.
    pub fn to_addr_string(&self) -> String {
        let mut itoa_buf = itoa::Buffer::new();
        let port = itoa_buf.format(self.port);
        let mut s = String::with_capacity(self.host.len() + 1 + port.len());
        s.push_str(&self.host);
        s.push(':');
        s.push_str(port);
        s
    }
}

impl fmt::Display for NodeAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Whether the connection is issuing commands directly or batching them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Every command waits for its reply.
    Direct,
    /// Commands are queued; replies are collected on pipeline close.
    Pipelined,
}

/// Narrow a signed 64-bit argument to the protocol's 32-bit range.
///
/// The vendor-neutral surface types TTLs, offsets and counts as `i64`,
/// but the underlying protocol represents them as 32-bit signed integers.
/// Values outside that range are rejected here, before dispatch.
pub fn int_arg(name: &str, value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        AdapterError::invalid_argument(format!(
            "{name} must fit in a 32-bit signed integer, got {value}"
        ))
    })
}

// ── Tests ──────────────────────────────────────────────────────────
