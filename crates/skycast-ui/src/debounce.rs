//! Single-slot debounced task scheduling.
//!
//! At most one scheduled action is pending at a time. Scheduling a new one
//! aborts the previous task if its quiet period has not elapsed yet, so a
//! superseded action never runs.

use std::future::Future;
use std::time::Duration;

use tokio_util::task::AbortOnDropHandle;

pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortOnDropHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `action` once the quiet period elapses, replacing any pending action.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        // Dropping the old handle aborts it.
        self.pending = Some(AbortOnDropHandle::new(handle));
    }

    /// Abort the pending action. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_action_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        for value in ["a", "ab", "abc"] {
            let tx = tx.clone();
            debouncer.schedule(async move {
                let _ = tx.send(value);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(rx.recv().await, Some("abc"));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_waits_for_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(async move {
            let _ = tx.send(());
        });
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_action() {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        let sender = tx.clone();
        debouncer.schedule(async move {
            let _ = sender.send(());
        });
        assert!(debouncer.cancel());
        assert!(!debouncer.is_pending());
        assert!(!debouncer.cancel());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
        drop(tx);
    }
}
