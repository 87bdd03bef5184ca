//! # redis-tracing
//!
//! Distributed tracing instrumentation for Redis command dispatch.
//!
//! Wrapping a client handle once per traced context is enough to get a child
//! span for every command and pipeline it executes; the call sites issuing
//! commands stay exactly as they are.
//!
//! ## Features
//!
//! - **Transparent interception**: wrapped handles behave identically to the
//!   original, returning the same values and errors
//! - **Explicit context**: the parent span travels as a plain value, never
//!   through hidden global state
//! - **Free when idle**: with no active span, wrapping returns the original
//!   handle untouched
//! - **Single and pipelined dispatch**: one span per command, one span per
//!   batch with the command names joined in order
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use redis_tracing::prelude::*;
//!
//! let client = ClientHandle::connect("redis://127.0.0.1/").await?;
//!
//! // Once per traced request:
//! let ctx = TraceContext::current();
//! let client = wrap(&ctx, client.clone());
//!
//! // Issued exactly as before, now emitting one span per dispatch.
//! let value = client.execute(&Command::new("GET").arg("user:1")).await?;
//! ```
//!
//! ## Span Tags
//!
//! | Tag | Value |
//! |-----|-------|
//! | `db.type` | Always `"redis"` |
//! | `db.method` | Operation name, or the batch names joined with `" -> "` |
//! | `peer.address` | Server address from the client configuration |
//! | `span.kind` | Always `"client"` |
//! | `otel.status_code` | `"OK"` or `"ERROR"` |
//! | `error.message` | Error details (on failure) |
//!
//! Single commands are recorded under a span named `redis.command` and
//! batches under `redis.pipeline`; the operation name lives in the
//! `db.method` tag, not in the span name.

mod client;
mod command;
mod context;
mod executor;
mod interceptor;
mod tags;

pub use client::{ClientHandle, ClientOptions};
pub use command::Command;
pub use context::{wrap, TraceContext, TracingExt};
pub use executor::{CommandExecutor, MultiplexedExecutor};
pub use interceptor::TracedExecutor;
pub use tags::{apply_span_tags, command_name, pipeline_name};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{wrap, ClientHandle, ClientOptions, Command, TraceContext, TracingExt};
}
