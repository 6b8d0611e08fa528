//! Shared helpers for the adapter contract tests.
//!
//! Provides [`RecordingDriver`], a test double implementing the native
//! driver capability interface. It records every call it receives so
//! tests can assert exactly what reached the driver (and that failed
//! validations reached it not at all).

#![allow(dead_code)]

use bytes::Bytes;
use parking_lot::Mutex;

use redapt::config::AdapterConfig;
use redapt::driver::NativeDriver;
use redapt::error::Result;
use redapt::RedisAdapter;

/// One recorded native driver invocation, with its transformed arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    Shutdown,
    Eval {
        script: Bytes,
        keys: Vec<Bytes>,
        args: Vec<Bytes>,
    },
    ClientKill {
        addr: String,
    },
    ClientGetname,
    Slaveof {
        host: String,
        port: u16,
    },
    SlaveofNoOne,
    Restore {
        key: Bytes,
        ttl_ms: i32,
        value: Bytes,
    },
    Setex {
        key: Bytes,
        seconds: i32,
        value: Bytes,
    },
    Getrange {
        key: Bytes,
        start: i32,
        end: i32,
    },
    Srandmember {
        key: Bytes,
        count: i32,
    },
    Zrangebyscore {
        key: Bytes,
        min: String,
        max: String,
        offset: i32,
        count: i32,
    },
}

/// Driver double that records calls and returns empty success values.
#[derive(Default)]
pub struct RecordingDriver {
    calls: Mutex<Vec<DriverCall>>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded calls, in invocation order.
    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().clone()
    }

    /// Number of calls that reached the driver.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: DriverCall) {
        self.calls.lock().push(call);
    }
}

impl NativeDriver for RecordingDriver {
    async fn shutdown(&self) -> Result<()> {
        self.record(DriverCall::Shutdown);
        Ok(())
    }

    async fn eval(&self, script: Bytes, keys: Vec<Bytes>, args: Vec<Bytes>) -> Result<Bytes> {
        self.record(DriverCall::Eval { script, keys, args });
        Ok(Bytes::new())
    }

    async fn client_kill(&self, addr: &str) -> Result<()> {
        self.record(DriverCall::ClientKill {
            addr: addr.to_string(),
        });
        Ok(())
    }

    async fn client_getname(&self) -> Result<Option<Bytes>> {
        self.record(DriverCall::ClientGetname);
        Ok(Some(Bytes::from_static(b"test-conn")))
    }

    async fn slaveof(&self, host: &str, port: u16) -> Result<()> {
        self.record(DriverCall::Slaveof {
            host: host.to_string(),
            port,
        });
        Ok(())
    }

    async fn slaveof_no_one(&self) -> Result<()> {
        self.record(DriverCall::SlaveofNoOne);
        Ok(())
    }

    async fn restore(&self, key: Bytes, ttl_ms: i32, value: Bytes) -> Result<()> {
        self.record(DriverCall::Restore { key, ttl_ms, value });
        Ok(())
    }

    async fn setex(&self, key: Bytes, seconds: i32, value: Bytes) -> Result<()> {
        self.record(DriverCall::Setex {
            key,
            seconds,
            value,
        });
        Ok(())
    }

    async fn getrange(&self, key: Bytes, start: i32, end: i32) -> Result<Bytes> {
        self.record(DriverCall::Getrange { key, start, end });
        Ok(Bytes::new())
    }

    async fn srandmember(&self, key: Bytes, count: i32) -> Result<Vec<Bytes>> {
        self.record(DriverCall::Srandmember { key, count });
        Ok(Vec::new())
    }

    async fn zrangebyscore(
        &self,
        key: Bytes,
        min: &str,
        max: &str,
        offset: i32,
        count: i32,
    ) -> Result<Vec<Bytes>> {
        self.record(DriverCall::Zrangebyscore {
            key,
            min: min.to_string(),
            max: max.to_string(),
            offset,
            count,
        });
        Ok(Vec::new())
    }
}

/// Adapter over a fresh recording driver, standalone topology, direct mode.
pub fn standalone_adapter() -> RedisAdapter<RecordingDriver> {
    RedisAdapter::new(RecordingDriver::new(), AdapterConfig::default())
}

/// Adapter configured with two sentinel endpoints.
pub fn sentinel_adapter() -> RedisAdapter<RecordingDriver> {
    let config = AdapterConfig::from_url("redis+sentinel://mymaster@s1:26379,s2:26380")
        .expect("valid sentinel URL");
    RedisAdapter::new(RecordingDriver::new(), config)
}

/// Standalone adapter with an open pipeline.
pub fn pipelined_adapter() -> RedisAdapter<RecordingDriver> {
    let adapter = standalone_adapter();
    adapter.open_pipeline();
    adapter
}
