//! redapt — vendor-neutral Redis command adapter.
//!
//! Maps a stable command surface onto a pluggable native driver
//! ([`driver::NativeDriver`]), synthesizing Lua scripts where the driver
//! lacks a direct primitive and gating synchronous-reply operations while
//! a pipeline is open. Transport, pooling and retries belong to the
//! wrapped driver, not to this crate.

pub mod adapter;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod runtime;

pub use adapter::{RedisAdapter, SentinelConnection};
pub use command::{ConnectionMode, NodeAddr, ShutdownOption};
pub use config::{AdapterConfig, Topology};
pub use driver::NativeDriver;
pub use error::{AdapterError, Result};
