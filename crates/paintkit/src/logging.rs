// Author: Dustin Pilgrim
// License: MIT

use std::future::Future;
use std::path::Path;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use eventline::runtime::{self, LogLevel};

use crate::paths;

/// File output always; console output and debug level only when verbose.
pub fn init_logging(log_path: &Path, verbose: bool) -> Result<(), String> {
    paths::create_parent(log_path)
        .map_err(|e| format!("{}: {e}", log_path.display()))?;

    poll_ready(runtime::init());
    runtime::enable_file_output(log_path)
        .map_err(|e| format!("{}: {e}", log_path.display()))?;

    // command output goes to stdout
    runtime::enable_console_output(verbose);
    runtime::enable_console_color(verbose);
    runtime::set_log_level(level_for(verbose));
    Ok(())
}

fn level_for(verbose: bool) -> LogLevel {
    if verbose { LogLevel::Debug } else { LogLevel::Info }
}

/// Drives a future that needs no reactor.
fn poll_ready<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(v) = fut.as_mut().poll(&mut cx) {
            return v;
        }
        std::thread::yield_now();
    }
}
