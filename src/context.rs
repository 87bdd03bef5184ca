//! Tracing context and the wrap entry point.

use std::sync::Arc;

use tracing::Span;

use crate::client::ClientHandle;
use crate::interceptor::TracedExecutor;

/// Explicit carrier of the parent span for store instrumentation.
///
/// A context either holds an active span or nothing. Spans that are disabled,
/// because no subscriber exists or a filter rejected them, count as absent, so
/// wrapping with such a context costs nothing.
///
/// The context is a plain value handed to [`wrap`]; this crate never reads
/// thread-local state on its own. [`TraceContext::current`] is the bridge for
/// callers that keep the request span in scope.
#[derive(Debug, Clone, Default)]
pub struct TraceContext {
    parent: Option<Span>,
}

impl TraceContext {
    /// A context with no active span.
    pub fn none() -> Self {
        Self { parent: None }
    }

    /// A context carrying the given span as parent.
    ///
    /// Disabled spans are treated as absent.
    pub fn with_parent(span: Span) -> Self {
        if span.is_disabled() {
            Self { parent: None }
        } else {
            Self { parent: Some(span) }
        }
    }

    /// Snapshot the caller's current span.
    pub fn current() -> Self {
        Self::with_parent(Span::current())
    }

    /// The active parent span, if any.
    pub fn active_span(&self) -> Option<&Span> {
        self.parent.as_ref()
    }

    /// Whether instrumentation would be installed for this context.
    pub fn is_active(&self) -> bool {
        self.parent.is_some()
    }
}

/// Wrap a client handle for a tracing context.
///
/// With no active span the handle is returned unchanged: same value, same
/// executor, no allocation. With an active span the returned handle shares
/// the original configuration and dispatches through a [`TracedExecutor`]
/// bound to that span. The original handle keeps its own executor and stays
/// fully usable.
pub fn wrap(ctx: &TraceContext, client: ClientHandle) -> ClientHandle {
    match ctx.active_span() {
        Some(parent) => {
            let executor = TracedExecutor::new(
                Arc::clone(client.executor()),
                parent.clone(),
                client.options().clone(),
            );
            client.with_executor(Arc::new(executor))
        }
        None => client,
    }
}

/// Fluent wrapping for client handles.
pub trait TracingExt {
    /// Wrap this handle for the given tracing context.
    fn with_tracing(self, ctx: &TraceContext) -> ClientHandle;
}

impl TracingExt for ClientHandle {
    fn with_tracing(self, ctx: &TraceContext) -> ClientHandle {
        wrap(ctx, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use redis::{RedisResult, Value};
    use tracing_subscriber::layer::SubscriberExt;

    use crate::client::ClientOptions;
    use crate::command::Command;
    use crate::executor::CommandExecutor;

    struct NoopExecutor;

    #[async_trait]
    impl CommandExecutor for NoopExecutor {
        async fn execute(&self, _cmd: &Command) -> RedisResult<Value> {
            Ok(Value::Nil)
        }

        async fn execute_pipeline(&self, _cmds: &[Command]) -> RedisResult<Vec<Value>> {
            Ok(Vec::new())
        }
    }

    fn client() -> ClientHandle {
        ClientHandle::from_executor(
            ClientOptions::new("127.0.0.1:6379").with_database(3),
            Arc::new(NoopExecutor),
        )
    }

    #[test]
    fn inactive_context_returns_original_handle() {
        let base = client();
        let executor = Arc::clone(base.executor());

        let wrapped = wrap(&TraceContext::none(), base);

        assert!(Arc::ptr_eq(&executor, wrapped.executor()));
    }

    #[test]
    fn default_context_is_inactive() {
        assert!(!TraceContext::default().is_active());
        assert!(!TraceContext::none().is_active());
    }

    #[test]
    fn current_without_subscriber_is_inactive() {
        assert!(!TraceContext::current().is_active());
    }

    #[test]
    fn disabled_parent_counts_as_absent() {
        let ctx = TraceContext::with_parent(Span::none());
        assert!(!ctx.is_active());
    }

    #[test]
    fn active_context_swaps_executor_and_keeps_options() {
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()),
        );
        let parent = tracing::info_span!("request");

        let base = client();
        let executor = Arc::clone(base.executor());
        let options = base.options().clone();

        let wrapped = wrap(&TraceContext::with_parent(parent), base);

        assert_eq!(wrapped.options(), &options);
        assert!(!Arc::ptr_eq(&executor, wrapped.executor()));
    }

    #[test]
    fn ext_trait_matches_wrap() {
        let base = client();
        let executor = Arc::clone(base.executor());

        let wrapped = base.with_tracing(&TraceContext::none());

        assert!(Arc::ptr_eq(&executor, wrapped.executor()));
    }
}
