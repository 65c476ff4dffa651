//! Back-end abstraction: the [`Driver`] trait and the cooperative
//! cancellation token [`Context`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use crate::canvas::Frame;
use crate::messages::Msg;

/// Result type used by back-ends.
pub type DriverResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (terminal, window, test harness).
///
/// The driver owns the display surface and the input device; callers never
/// manage their lifecycle beyond `init` and `close`.
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> DriverResult;

    /// Poll for input messages, sending them through `tx`.
    ///
    /// Waits at most `wait` for the first message; `Duration::ZERO` only
    /// drains what is already pending. Implementations should return early
    /// once `ctx.is_done()`.
    fn poll_msgs(&mut self, ctx: &Context, tx: &Sender<Msg>, wait: Duration) -> DriverResult;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> DriverResult;

    /// Clean up / restore the display.
    fn close(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_clones_share_flag() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
    }
}
