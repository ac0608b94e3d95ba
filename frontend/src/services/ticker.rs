//! Repeating timer behind the upload progress bar.

use gloo_timers::callback::Interval;

/// Owns at most one running [`Interval`].
///
/// Dropping the interval clears it in the browser, so holding it in an
/// `Option` makes cancellation happen exactly once.
#[derive(Default)]
pub struct UploadTicker {
    interval: Option<Interval>,
}

impl UploadTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `on_tick` every `period_ms`. Any previous interval is cancelled.
    pub fn start<F>(&mut self, period_ms: u32, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        if self.cancel() {
            log::warn!("⏱️ Restarted upload ticker while one was running");
        }
        self.interval = Some(Interval::new(period_ms, on_tick));
    }

    /// Stop the timer. Returns `false` if nothing was running.
    pub fn cancel(&mut self) -> bool {
        match self.interval.take() {
            Some(interval) => {
                drop(interval);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_without_start_is_noop() {
        let mut ticker = UploadTicker::new();
        assert!(!ticker.cancel());
        assert!(!ticker.cancel());
    }
}
