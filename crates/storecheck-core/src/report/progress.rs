//! Progress reporting for agent invocations. The run engine emits done/total
//! after each checklist item completes; the console layer consumes via a sink.

use std::sync::Arc;

/// One progress update: completed invocations out of the planned total.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent {
    pub done: usize,
    pub total: usize,
}

/// Sink for progress events. Called once per completed invocation.
pub type ProgressSink = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

#[must_use]
pub fn format_progress_line(done: usize, total: usize) -> String {
    format!("Completed check {}/{}...", done, total)
}

/// Default sink: prints each update to stderr. Skipped for single-invocation
/// runs where "1/1" is noise.
pub fn default_progress_sink(total: usize) -> Option<ProgressSink> {
    if total <= 1 {
        return None;
    }
    Some(Arc::new(|ev: ProgressEvent| {
        eprintln!("{}", format_progress_line(ev.done, ev.total));
    }))
}
