//! Tracing decorator over a command executor.

use std::sync::Arc;

use async_trait::async_trait;
use redis::{RedisResult, Value};
use tracing::{field, Instrument, Span};

use crate::client::ClientOptions;
use crate::command::Command;
use crate::executor::CommandExecutor;
use crate::tags::{apply_span_tags, command_name, pipeline_name};

/// An executor that brackets every dispatch with a child span of a fixed
/// parent span.
///
/// Each single command produces one `redis.command` span; each batch produces
/// one `redis.pipeline` span whose `db.method` tag joins the command names in
/// submission order. The delegated result is returned verbatim, and the span
/// closes on every exit path, error and cancellation included.
///
/// The parent span and the client configuration are captured at construction
/// time. Concurrent dispatches each get their own span; nothing is shared
/// between invocations besides the parent reference.
pub struct TracedExecutor {
    inner: Arc<dyn CommandExecutor>,
    parent: Span,
    options: ClientOptions,
}

impl TracedExecutor {
    pub fn new(inner: Arc<dyn CommandExecutor>, parent: Span, options: ClientOptions) -> Self {
        Self {
            inner,
            parent,
            options,
        }
    }

    fn command_span(&self) -> Span {
        tracing::info_span!(
            parent: &self.parent,
            "redis.command",
            db.type = field::Empty,
            db.method = field::Empty,
            peer.address = field::Empty,
            span.kind = field::Empty,
            otel.status_code = field::Empty,
            error.message = field::Empty,
        )
    }

    fn pipeline_span(&self) -> Span {
        tracing::info_span!(
            parent: &self.parent,
            "redis.pipeline",
            db.type = field::Empty,
            db.method = field::Empty,
            peer.address = field::Empty,
            span.kind = field::Empty,
            otel.status_code = field::Empty,
            error.message = field::Empty,
        )
    }
}

/// Record the delegated outcome on the span without touching the result.
fn record_outcome<T>(span: &Span, result: &RedisResult<T>) {
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(e) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", e.to_string().as_str());
            tracing::error!(parent: span, error = %e, "redis dispatch failed");
        }
    }
}

#[async_trait]
impl CommandExecutor for TracedExecutor {
    async fn execute(&self, cmd: &Command) -> RedisResult<Value> {
        let span = self.command_span();
        apply_span_tags(&span, &self.options, command_name(cmd));

        let result = self.inner.execute(cmd).instrument(span.clone()).await;

        record_outcome(&span, &result);
        result
    }

    async fn execute_pipeline(&self, cmds: &[Command]) -> RedisResult<Vec<Value>> {
        let span = self.pipeline_span();
        apply_span_tags(&span, &self.options, &pipeline_name(cmds));

        let result = self
            .inner
            .execute_pipeline(cmds)
            .instrument(span.clone())
            .await;

        record_outcome(&span, &result);
        result
    }
}
