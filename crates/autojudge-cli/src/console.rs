//! Console progress: throttled done/total lines with a running rate.

use autojudge_core::report::progress::{ProgressEvent, ProgressSink};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Minimum interval between progress updates to avoid log spam.
const MIN_INTERVAL_MS: u64 = 200;

/// For large batches, emit at most every this many records (10% step).
fn step_for(total: usize) -> usize {
    if total <= 10 {
        1
    } else {
        std::cmp::max(1, total / 10)
    }
}

/// Format a single progress line. Deterministic, unit-testable.
#[must_use]
pub fn format_progress_line(done: usize, total: usize, rate: f64) -> String {
    format!("Evaluating {done}/{total} ({rate:.1} records/s)")
}

/// Returns a throttled progress sink printing to stderr. Always emits
/// the final update; intermediate updates respect the step and the
/// minimum interval.
pub fn progress_sink(total: usize) -> Option<ProgressSink> {
    if total == 0 {
        return None;
    }
    let step = step_for(total);
    let started = Instant::now();
    let last_emit: Arc<Mutex<Option<Instant>>> = Arc::new(Mutex::new(None));
    Some(Arc::new(move |ev: ProgressEvent| {
        if ev.total == 0 {
            return;
        }
        let now = Instant::now();
        let should_emit = {
            let mut guard = last_emit.lock().expect("progress throttle lock");
            let emit_final = ev.done == ev.total;
            let emit_step = ev.done.is_multiple_of(step) || ev.done == 1;
            let interval_ok = (*guard)
                .map(|t| now.saturating_duration_since(t) >= Duration::from_millis(MIN_INTERVAL_MS))
                .unwrap_or(true);
            let ok = emit_final || (emit_step && interval_ok);
            if ok {
                *guard = Some(now);
            }
            ok
        };
        if should_emit {
            let elapsed = started.elapsed().as_secs_f64().max(1e-6);
            let rate = ev.done as f64 / elapsed;
            eprintln!("{}", format_progress_line(ev.done, ev.total, rate));
        }
    }))
}
