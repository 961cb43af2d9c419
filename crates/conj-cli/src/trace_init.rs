use std::io;
use std::path::Path;
use std::sync::Once;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "conj_core=info,conj_cli=info";
const TRACE_FILE: &str = "conjtool-trace.jsonl";

/// Install the global subscriber once.
///
/// Without `log_dir`, human-readable events go to stderr. With it, events are
/// written as JSON lines to `<log_dir>/conjtool-trace.jsonl`; keep the returned
/// guard alive until exit so buffered lines are flushed. `RUST_LOG` overrides
/// the default filter.
pub fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let mut guard = None;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, TRACE_FILE);
                let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
                guard = Some(worker_guard);
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
    guard
}
