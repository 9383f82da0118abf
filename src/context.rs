//! Per-call cancellation and deadlines.
//!
//! Every API method takes a [`Context`]. [`Context::background`] never cancels, leaving only
//! the timeout of the underlying HTTP client in place. Derived contexts abort the in-flight
//! request as soon as they are canceled or their deadline expires.
//!
//! ```rust
//! # use paystack_rust::Context;
//! # use std::time::Duration;
//! let (ctx, cancel) = Context::background()
//!     .with_timeout(Duration::from_secs(5))
//!     .with_cancel();
//!
//! // Calls made with `ctx` (or any of its clones) stop once `cancel.cancel()` is invoked.
//! cancel.cancel();
//! assert!(ctx.is_done());
//! ```

use crate::Error;
use futures::future::select_all;
use std::time::Duration;
use tokio::{sync::watch, time::Instant};

/// Execution context of one or more API calls.
#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<Instant>,
    // One receiver per `with_cancel` in the chain that produced this context
    cancelled: Vec<watch::Receiver<bool>>,
}

/// Handle canceling the [`Context`] it was created with, and all of its clones.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancels the associated context. Canceling more than once has no effect.
    pub fn cancel(&self) {
        // No receivers left means no call can observe the cancellation anyway
        let _ = self.sender.send(true);
    }
}

impl Context {
    /// A context which is never canceled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a copy of this context which expires after `timeout`.
    ///
    /// An earlier deadline already set on this context is kept. A timeout too large to be
    /// represented as an instant adds no deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Returns a copy of this context which expires at `deadline`.
    ///
    /// An earlier deadline already set on this context is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Returns a cancelable copy of this context, along with the handle canceling it.
    ///
    /// The copy is also canceled when this context is.
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancelled.push(receiver);
        (self, CancelHandle { sender })
    }

    /// The deadline of this context, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether this context has been canceled or its deadline has passed.
    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }

    /// The error a call made with this context would return right now, if any.
    pub fn err(&self) -> Option<Error> {
        if self.cancelled.iter().any(|rx| *rx.borrow()) {
            return Some(Error::Cancelled);
        }

        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Some(Error::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once this context is canceled or expired. Never resolves for background contexts.
    pub(crate) async fn done(&self) -> Error {
        let cancelled = async {
            if self.cancelled.is_empty() {
                return std::future::pending::<()>().await;
            }
            let waiters = self
                .cancelled
                .iter()
                .cloned()
                .map(|rx| Box::pin(wait_for_cancel(rx)));
            select_all(waiters).await;
        };

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = cancelled => Error::Cancelled,
            _ = expired => Error::DeadlineExceeded,
        }
    }
}

async fn wait_for_cancel(mut rx: watch::Receiver<bool>) {
    loop {
        let is_cancelled = *rx.borrow();
        if is_cancelled {
            return;
        }
        // The handle was dropped without canceling: this receiver can no longer fire
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
