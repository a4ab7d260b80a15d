//! Top-level Ctrl-C guard.
//!
//! The session blocks on stdin and DNS, so it runs on a blocking thread while
//! the async side waits for either its result or the interrupt signal.

use std::future::Future;
use std::io;

use anyhow::Context;
use contextlens_core::session::SessionEnd;
use tokio::signal;
use tracing::warn;

#[derive(Debug, PartialEq, Eq)]
pub enum Guarded<T> {
    Completed(T),
    Interrupted,
}

/// How the process winds down once the guard returns. Every variant exits 0.
#[derive(Debug, PartialEq, Eq)]
pub enum Shutdown {
    /// The session already said goodbye.
    Quiet,
    /// Input closed; print the graceful message and return.
    Graceful,
    /// Print the graceful message and exit at once, the session thread is
    /// still parked on stdin.
    Interrupted,
    /// Log the message and return.
    Failed(String),
}

pub async fn run_until_interrupted<F, T>(job: F) -> anyhow::Result<Guarded<T>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    run_until(job, signal::ctrl_c()).await
}

/// Runs `job` until it finishes or `interrupt` resolves.
///
/// If the interrupt source itself fails, the job is awaited to completion.
pub async fn run_until<F, T, S>(job: F, interrupt: S) -> anyhow::Result<Guarded<T>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
    S: Future<Output = io::Result<()>>,
{
    let mut handle = tokio::task::spawn_blocking(job);

    tokio::select! {
        joined = &mut handle => {
            let value: T = joined.context("session thread panicked")?;
            return Ok(Guarded::Completed(value));
        }
        res = interrupt => match res {
            Ok(()) => return Ok(Guarded::Interrupted),
            Err(e) => warn!("Ctrl-C handling unavailable: {e}"),
        }
    }

    let value: T = handle.await.context("session thread panicked")?;
    Ok(Guarded::Completed(value))
}

pub fn shutdown_for(outcome: anyhow::Result<Guarded<anyhow::Result<SessionEnd>>>) -> Shutdown {
    match outcome {
        Ok(Guarded::Completed(Ok(SessionEnd::Exited | SessionEnd::Declined))) => Shutdown::Quiet,
        Ok(Guarded::Completed(Ok(SessionEnd::InputClosed))) => Shutdown::Graceful,
        Ok(Guarded::Completed(Err(e))) | Err(e) => Shutdown::Failed(format!("{e:#}")),
        Ok(Guarded::Interrupted) => Shutdown::Interrupted,
    }
}
