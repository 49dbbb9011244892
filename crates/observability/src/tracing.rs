//! Utility functions for tracing

/// Create a span for one request conversion
///
/// # Example
///
/// ```rust
/// use kirobridge_observability::conversion_span;
///
/// let span = conversion_span!("claude-sonnet-4", "conv-123", 3);
/// let _guard = span.enter();
/// // ... build the payload ...
/// ```
#[macro_export]
macro_rules! conversion_span {
    ($model:expr, $conversation_id:expr, $messages:expr) => {
        tracing::info_span!(
            "kiro.convert",
            model = $model,
            conversation.id = $conversation_id,
            messages = $messages,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// # Example
///
/// ```rust
/// use kirobridge_observability::record_error;
///
/// let parsed: Result<u32, _> = "x".parse::<u32>();
/// if let Err(e) = &parsed {
///     record_error(e);
/// }
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use kirobridge_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... operation ...
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
