//! Interrupt signal handling for the one-shot paste

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Interrupt signal for one-shot mode.
///
/// The flag is shared with the paste pipeline, which checks it between
/// stages and chunks; the notifier wakes the async runner. Clones share
/// both.
#[derive(Clone)]
pub struct InterruptSignal {
    interrupted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl InterruptSignal {
    /// Create a new interrupt signal handler
    pub fn new() -> Self {
        Self {
            interrupted: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Get a clone of the interrupt flag
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    /// Check if an interrupt was received
    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Mark as interrupted and wake any waiter
    pub fn trigger(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
        self.notify.notify_one();
    }

    /// Wait until an interrupt is received
    pub async fn wait(&self) {
        self.notify.notified().await;
    }

    /// Setup signal handler (SIGINT on Unix, Ctrl+C on Windows)
    pub async fn setup(&self) -> Result<(), io::Error> {
        let signal = self.clone();
        let received = interrupt_received()?;
        tokio::spawn(async move {
            received.await;
            tracing::debug!("interrupt received");
            signal.trigger();
        });

        Ok(())
    }
}

impl Default for InterruptSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn interrupt_received() -> Result<impl Future<Output = ()>, io::Error> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    Ok(async move {
        sigint.recv().await;
    })
}

#[cfg(windows)]
fn interrupt_received() -> Result<impl Future<Output = ()>, io::Error> {
    let mut ctrl_c = tokio::signal::windows::ctrl_c()?;
    Ok(async move {
        ctrl_c.recv().await;
    })
}
