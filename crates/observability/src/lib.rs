//! Tracing/logging setup shared by binaries.

/// Tracing configuration (filters, output shape).
pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
