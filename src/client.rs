//! Client handle and connection configuration.

use std::fmt;
use std::sync::Arc;

use redis::{RedisResult, Value};

use crate::command::Command;
use crate::executor::{CommandExecutor, MultiplexedExecutor};

/// Connection configuration carried by a [`ClientHandle`].
///
/// The address is recorded on every dispatch span as the `peer.address` tag.
///
/// # Example
///
/// ```rust
/// use redis_tracing::ClientOptions;
///
/// let options = ClientOptions::new("127.0.0.1:6379").with_database(2);
/// assert_eq!(options.address(), "127.0.0.1:6379");
/// assert_eq!(options.database(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    address: String,
    database: i64,
}

impl ClientOptions {
    /// Create options for the given server address (`host:port`).
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            database: 0,
        }
    }

    /// Select a logical database index.
    pub fn with_database(mut self, database: i64) -> Self {
        self.database = database;
        self
    }

    /// The server address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The logical database index.
    pub fn database(&self) -> i64 {
        self.database
    }
}

/// A Redis client handle: connection configuration plus the executor that
/// dispatches its commands.
///
/// Handles are cheap to clone, and clones share the same executor. Deriving a
/// handle with a replacement executor leaves the original untouched, so one
/// base handle can serve many traced request contexts without cross-talk.
#[derive(Clone)]
pub struct ClientHandle {
    options: ClientOptions,
    executor: Arc<dyn CommandExecutor>,
}

impl ClientHandle {
    /// Connect to a Redis server and build a handle around a multiplexed
    /// connection.
    ///
    /// The options are derived from the resolved connection info, so the
    /// `peer.address` tag reflects the actual `host:port` rather than the URL
    /// as written.
    pub async fn connect(url: impl AsRef<str>) -> RedisResult<Self> {
        let client = redis::Client::open(url.as_ref())?;
        let info = client.get_connection_info();
        let options = ClientOptions::new(info.addr.to_string()).with_database(info.redis.db);
        let connection = client.get_multiplexed_async_connection().await?;
        Ok(Self::from_executor(
            options,
            Arc::new(MultiplexedExecutor::new(connection)),
        ))
    }

    /// Build a handle from configuration and an executor.
    pub fn from_executor(options: ClientOptions, executor: Arc<dyn CommandExecutor>) -> Self {
        Self { options, executor }
    }

    /// The connection configuration.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// The executor dispatching this handle's commands.
    pub fn executor(&self) -> &Arc<dyn CommandExecutor> {
        &self.executor
    }

    /// Derive a handle with the same configuration but a different executor.
    pub fn with_executor(&self, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            options: self.options.clone(),
            executor,
        }
    }

    /// Execute a single command.
    pub async fn execute(&self, cmd: &Command) -> RedisResult<Value> {
        self.executor.execute(cmd).await
    }

    /// Execute an ordered batch of commands.
    pub async fn execute_pipeline(&self, cmds: &[Command]) -> RedisResult<Vec<Value>> {
        self.executor.execute_pipeline(cmds).await
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
