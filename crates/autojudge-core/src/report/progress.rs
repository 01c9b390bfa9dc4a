//! Progress reporting for batch runs. The driver emits done/total in
//! record order; a console layer consumes via a sink.

use std::sync::Arc;

/// One progress update: how many records are done and total count.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent {
    pub done: usize,
    pub total: usize,
}

/// Sink for progress events. The driver calls this after each record.
/// Implementations may throttle (e.g. max N updates/sec or every k
/// records).
pub type ProgressSink = Arc<dyn Fn(ProgressEvent) + Send + Sync>;
