//! Command execution capability.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{Pipeline, RedisResult, Value};

use crate::command::Command;

/// Dispatch hooks for single and batched command execution.
///
/// This is the seam the tracing decorator wraps: anything that can send one
/// command, or an ordered batch of commands, to a Redis server. Implementors
/// own connection management, encoding, and retries; callers only observe the
/// returned values and errors.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a single command and return its reply.
    async fn execute(&self, cmd: &Command) -> RedisResult<Value>;

    /// Execute an ordered batch of commands and return one reply per command.
    ///
    /// Submission order is preserved; the batch is never reordered or
    /// deduplicated.
    async fn execute_pipeline(&self, cmds: &[Command]) -> RedisResult<Vec<Value>>;
}

/// Executor backed by a multiplexed connection from the redis crate.
pub struct MultiplexedExecutor {
    connection: MultiplexedConnection,
}

impl MultiplexedExecutor {
    pub fn new(connection: MultiplexedConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl CommandExecutor for MultiplexedExecutor {
    async fn execute(&self, cmd: &Command) -> RedisResult<Value> {
        let mut connection = self.connection.clone();
        cmd.to_redis().query_async(&mut connection).await
    }

    async fn execute_pipeline(&self, cmds: &[Command]) -> RedisResult<Vec<Value>> {
        let mut pipeline = Pipeline::with_capacity(cmds.len());
        for cmd in cmds {
            pipeline.add_command(cmd.to_redis());
        }
        let mut connection = self.connection.clone();
        pipeline.query_async(&mut connection).await
    }
}
