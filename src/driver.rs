//! The native driver capability interface.
//!
//! The adapter never talks to the network itself; it delegates every
//! operation to an implementation of [`NativeDriver`]. Production code
//! binds this to a real client library, tests inject a recording double.

use bytes::Bytes;

use crate::error::Result;

/// Native operations the wrapped driver must expose.
///
/// One method per primitive the adapter dispatches to. Transport,
/// pooling, retries and timeouts all live behind this boundary.
pub trait NativeDriver: Send + Sync {
    /// No-argument SHUTDOWN.
    fn shutdown(&self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Generic script evaluation. `keys` and `args` are always passed,
    /// even when empty.
    fn eval(
        &self,
        script: Bytes,
        keys: Vec<Bytes>,
        args: Vec<Bytes>,
    ) -> impl std::future::Future<Output = Result<Bytes>> + Send;

    /// CLIENT KILL addr, with `addr` in `host:port` form.
    fn client_kill(&self, addr: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// CLIENT GETNAME. `None` when no name is set.
    fn client_getname(&self)
        -> impl std::future::Future<Output = Result<Option<Bytes>>> + Send;

    /// SLAVEOF host port.
    fn slaveof(
        &self,
        host: &str,
        port: u16,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// SLAVEOF NO ONE.
    fn slaveof_no_one(&self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// RESTORE key ttl-millis value.
    fn restore(
        &self,
        key: Bytes,
        ttl_ms: i32,
        value: Bytes,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// SETEX key seconds value.
    fn setex(
        &self,
        key: Bytes,
        seconds: i32,
        value: Bytes,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// GETRANGE key start end.
    fn getrange(
        &self,
        key: Bytes,
        start: i32,
        end: i32,
    ) -> impl std::future::Future<Output = Result<Bytes>> + Send;

    /// SRANDMEMBER key count.
    fn srandmember(
        &self,
        key: Bytes,
        count: i32,
    ) -> impl std::future::Future<Output = Result<Vec<Bytes>>> + Send;

    /// ZRANGEBYSCORE key min max LIMIT offset count.
    fn zrangebyscore(
        &self,
        key: Bytes,
        min: &str,
        max: &str,
        offset: i32,
        count: i32,
    ) -> impl std::future::Future<Output = Result<Vec<Bytes>>> + Send;
}
