//! The vendor-neutral command surface.
//!
//! [`RedisAdapter`] wraps a [`NativeDriver`] with a synchronous API,
//! bridging to the async driver via [`runtime::block_on`]. Every
//! operation validates its arguments and checks the connection mode
//! before the driver is touched; a request that fails validation issues
//! no driver call at all.

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::debug;

use crate::command::{int_arg, shutdown_script, ConnectionMode, NodeAddr, ShutdownOption};
use crate::config::{AdapterConfig, Topology};
use crate::driver::NativeDriver;
use crate::error::{AdapterError, Result};
use crate::runtime;

/// A handle over the sentinel endpoints configured for a connection.
///
/// Obtained through [`RedisAdapter::sentinel_connection`]; only exists
/// when the adapter was configured with a sentinel topology.
#[derive(Debug, Clone)]
pub struct SentinelConnection {
    master_name: String,
    endpoints: Vec<NodeAddr>,
}

impl SentinelConnection {
    /// Name of the monitored master.
    pub fn master_name(&self) -> &str {
        &self.master_name
    }

    /// The configured sentinel endpoints, in configuration order.
    pub fn endpoints(&self) -> &[NodeAddr] {
        &self.endpoints
    }
}

/// Synchronous Redis command adapter over a pluggable native driver.
///
/// The adapter owns one logical connection's worth of state: its
/// configuration and its [`ConnectionMode`]. It mirrors the single
/// in-flight-request model of the connection it wraps and is meant for
/// sequential use; callers needing shared access must synchronize
/// externally.
pub struct RedisAdapter<D: NativeDriver> {
    driver: D,
    config: AdapterConfig,
    mode: Mutex<ConnectionMode>,
}

impl<D: NativeDriver> RedisAdapter<D> {
    /// Create an adapter over `driver` with the given configuration.
    ///
    /// The connection starts in [`ConnectionMode::Direct`].
    pub fn new(driver: D, config: AdapterConfig) -> Self {
        Self {
            driver,
            config,
            mode: Mutex::new(ConnectionMode::Direct),
        }
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The adapter configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    // ── Mode lifecycle ─────────────────────────────────────────────

    /// Current connection mode.
    pub fn mode(&self) -> ConnectionMode {
        *self.mode.lock()
    }

    /// Whether a pipeline is currently open.
    pub fn is_pipelined(&self) -> bool {
        self.mode() == ConnectionMode::Pipelined
    }

    /// Switch the connection into pipeline mode.
    ///
    /// Idempotent; no operation changes the mode implicitly.
    pub fn open_pipeline(&self) {
        let mut mode = self.mode.lock();
        if *mode != ConnectionMode::Pipelined {
            debug!("opening pipeline");
            *mode = ConnectionMode::Pipelined;
        }
    }

    /// Return the connection to direct mode.
    pub fn close_pipeline(&self) {
        let mut mode = self.mode.lock();
        if *mode != ConnectionMode::Direct {
            debug!("closing pipeline");
            *mode = ConnectionMode::Direct;
        }
    }

    /// Reject `op` while a pipeline is open. Operations that need their
    /// reply synchronously cannot be queued.
    fn require_direct(&self, op: &'static str) -> Result<()> {
        if self.is_pipelined() {
            return Err(AdapterError::PipelineUnsupported(op));
        }
        Ok(())
    }

    // ── Server commands ────────────────────────────────────────────

    /// Shut the server down.
    ///
    /// Without an option this maps to the driver's native no-argument
    /// shutdown and is allowed in any mode. With [`ShutdownOption::Save`]
    /// or [`ShutdownOption::NoSave`] the option form is carried by a
    /// generated Lua script through [`NativeDriver::eval`], which needs a
    /// synchronous reply and is therefore rejected while pipelined.
    pub fn shutdown(&self, option: Option<ShutdownOption>) -> Result<()> {
        match option {
            None => runtime::block_on(self.driver.shutdown()),
            Some(opt) => {
                self.require_direct("SHUTDOWN")?;
                let script = shutdown_script(opt);
                debug!(option = opt.as_token(), "dispatching scripted shutdown");
                runtime::block_on(self.driver.eval(script, Vec::new(), Vec::new()))?;
                Ok(())
            }
        }
    }

    /// Kill the client connected from `host:port`.
    pub fn kill_client(&self, host: &str, port: u16) -> Result<()> {
        if host.is_empty() {
            return Err(AdapterError::invalid_argument(
                "host is required for CLIENT KILL",
            ));
        }
        self.require_direct("CLIENT KILL")?;
        let addr = NodeAddr::new(host, port).to_addr_string();
        runtime::block_on(self.driver.client_kill(&addr))
    }

    /// Name assigned to the current connection, if any.
    pub fn client_name(&self) -> Result<Option<Bytes>> {
        self.require_direct("CLIENT GETNAME")?;
        runtime::block_on(self.driver.client_getname())
    }

    /// Make the server a replica of `host:port`.
    ///
    /// The host is validated before any driver interaction.
    pub fn slave_of(&self, host: &str, port: u16) -> Result<()> {
        if host.is_empty() {
            return Err(AdapterError::invalid_argument(
                "host is required for SLAVEOF",
            ));
        }
        self.require_direct("SLAVEOF")?;
        runtime::block_on(self.driver.slaveof(host, port))
    }

    /// Promote the server back to master.
    pub fn slave_of_no_one(&self) -> Result<()> {
        self.require_direct("SLAVEOF NO ONE")?;
        runtime::block_on(self.driver.slaveof_no_one())
    }

    /// Handle over the configured sentinel endpoints.
    ///
    /// Fails when the adapter was not configured with a sentinel
    /// topology, before anything reaches the driver.
    pub fn sentinel_connection(&self) -> Result<SentinelConnection> {
        match &self.config.topology {
            Topology::Sentinel {
                master_name,
                sentinels,
            } if !sentinels.is_empty() => Ok(SentinelConnection {
                master_name: master_name.clone(),
                endpoints: sentinels.clone(),
            }),
            _ => Err(AdapterError::SentinelNotConfigured(
                "no sentinels configured for this connection".into(),
            )),
        }
    }

    // ── Range-checked key commands ─────────────────────────────────
    //
    // The vendor-neutral surface types these parameters as i64; the
    // underlying protocol caps them at 32-bit signed. Each parameter is
    // checked independently, before dispatch.

    /// Restore `key` from a serialized dump, with a TTL in milliseconds.
    pub fn restore(&self, key: &[u8], ttl_ms: i64, value: &[u8]) -> Result<()> {
        let ttl = int_arg("ttl_ms", ttl_ms)?;
        runtime::block_on(self.driver.restore(
            Bytes::copy_from_slice(key),
            ttl,
            Bytes::copy_from_slice(value),
        ))
    }

    /// Set `key` to `value` with an expiry in seconds.
    pub fn set_ex(&self, key: &[u8], seconds: i64, value: &[u8]) -> Result<()> {
        let secs = int_arg("seconds", seconds)?;
        runtime::block_on(self.driver.setex(
            Bytes::copy_from_slice(key),
            secs,
            Bytes::copy_from_slice(value),
        ))
    }

    /// Substring of the string value stored at `key`.
    pub fn get_range(&self, key: &[u8], start: i64, end: i64) -> Result<Bytes> {
        let start = int_arg("start", start)?;
        let end = int_arg("end", end)?;
        runtime::block_on(
            self.driver
                .getrange(Bytes::copy_from_slice(key), start, end),
        )
    }

    /// `count` random members of the set stored at `key`.
    pub fn s_rand_member(&self, key: &[u8], count: i64) -> Result<Vec<Bytes>> {
        let count = int_arg("count", count)?;
        runtime::block_on(self.driver.srandmember(Bytes::copy_from_slice(key), count))
    }

    /// Members of the sorted set at `key` with scores in `[min, max]`,
    /// limited to `count` entries starting at `offset`.
    pub fn z_range_by_score(
        &self,
        key: &[u8],
        min: &str,
        max: &str,
        offset: i64,
        count: i64,
    ) -> Result<Vec<Bytes>> {
        let offset = int_arg("offset", offset)?;
        let count = int_arg("count", count)?;
        runtime::block_on(self.driver.zrangebyscore(
            Bytes::copy_from_slice(key),
            min,
            max,
            offset,
            count,
        ))
    }
}
