//! Redis command representation.

use redis::{Cmd, ToRedisArgs};

/// A single Redis command: an operation name plus its encoded arguments.
///
/// The tracing layer only ever reads the name; arguments are carried opaquely
/// and handed to the executor as-is.
///
/// # Example
///
/// ```rust
/// use redis_tracing::Command;
///
/// let cmd = Command::new("SET").arg("user:1").arg("alice");
/// assert_eq!(cmd.name(), "SET");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<Vec<u8>>,
}

impl Command {
    /// Create a command with the given operation name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument, encoded through [`ToRedisArgs`].
    pub fn arg(mut self, arg: impl ToRedisArgs) -> Self {
        self.args.extend(arg.to_redis_args());
        self
    }

    /// The operation name exactly as it was constructed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The encoded arguments, in order.
    pub fn args(&self) -> &[Vec<u8>] {
        &self.args
    }

    /// Build the wire command for the redis crate.
    pub fn to_redis(&self) -> Cmd {
        let mut cmd = Cmd::new();
        cmd.arg(self.name.as_bytes());
        for arg in &self.args {
            cmd.arg(arg.as_slice());
        }
        cmd
    }
}
