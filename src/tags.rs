//! Span tag and operation name formatting.

use tracing::Span;

use crate::client::ClientOptions;
use crate::command::Command;

/// Separator between command names in a pipeline's `db.method` tag.
const METHOD_SEPARATOR: &str = " -> ";

/// The operation name of a single command, verbatim.
pub fn command_name(cmd: &Command) -> &str {
    cmd.name()
}

/// The operation names of a batch, joined in submission order.
///
/// An empty batch yields an empty string.
pub fn pipeline_name(cmds: &[Command]) -> String {
    cmds.iter()
        .map(Command::name)
        .collect::<Vec<_>>()
        .join(METHOD_SEPARATOR)
}

/// Record the store tags on a dispatch span.
///
/// Every tag is set on every call: the store type, the peer address from the
/// client configuration, the client span kind, and the operation name.
pub fn apply_span_tags(span: &Span, options: &ClientOptions, method: &str) {
    span.record("db.type", "redis");
    span.record("peer.address", options.address());
    span.record("span.kind", "client");
    span.record("db.method", method);
}
