use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;
use vigil_core::{AgentSummary, StatusBackend, VigilError};

/// One fetch resolution, tagged so consumers can drop anything older than
/// what they already applied.
#[derive(Debug)]
pub struct PollOutcome {
    pub seq: u64,
    pub result: Result<AgentSummary, VigilError>,
}

/// The polling loop as an owned resource.
///
/// `start` spawns the loop and hands back the outcome channel; `stop`
/// aborts it, and Drop aborts too, so cancellation holds on every exit
/// path. Fetches are serialized inside the task: a tick that lands while
/// the previous fetch is still outstanding is skipped, never stacked.
pub struct Poller {
    handle: Option<JoinHandle<()>>,
    refresh_tx: mpsc::Sender<()>,
}

impl Poller {
    pub fn start(
        backend: Arc<dyn StatusBackend>,
        interval: Duration,
    ) -> (Self, mpsc::Receiver<PollOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::channel(8);
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut seq: u64 = 0;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    refresh = refresh_rx.recv() => {
                        if refresh.is_none() {
                            break;
                        }
                        ticker.reset();
                    }
                }

                seq += 1;
                let result = backend.agent_summary().await;
                if outcome_tx.send(PollOutcome { seq, result }).await.is_err() {
                    // Receiver gone: the dashboard is shutting down.
                    break;
                }
            }

            debug!("poll loop stopped");
        });

        (
            Self {
                handle: Some(handle),
                refresh_tx,
            },
            outcome_rx,
        )
    }

    /// Ask for a fetch now instead of at the next tick.
    pub fn request_refresh(&self) {
        let _ = self.refresh_tx.try_send(());
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use async_trait::async_trait;
    use vigil_core::VigilResult;

    use super::*;

    struct CountingBackend {
        calls: AtomicU64,
    }

    impl CountingBackend {
        fn new() -> Self {
            Self {
                calls: AtomicU64::new(0),
            }
        }

        fn summary(n: u64) -> AgentSummary {
            AgentSummary {
                total_agents: n as usize,
                processing_count: 0,
                waiting_count: 0,
                active_count: 0,
                agents: vec![],
                last_updated: format!("T{n}"),
                current_directory: "/x".to_string(),
            }
        }
    }

    #[async_trait]
    impl StatusBackend for CountingBackend {
        async fn init(&self) -> VigilResult<()> {
            Ok(())
        }

        async fn agent_summary(&self) -> VigilResult<AgentSummary> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Self::summary(n))
        }

        async fn quit(&self) -> VigilResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_outcomes_carry_increasing_seq() {
        let backend = Arc::new(CountingBackend::new());
        let (mut poller, mut rx) = Poller::start(backend, Duration::from_millis(10));

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.seq, 1);
        assert_eq!(second.seq, 2);
        assert!(first.result.is_ok());

        poller.stop();
    }

    #[tokio::test]
    async fn test_stop_closes_channel() {
        let backend = Arc::new(CountingBackend::new());
        let (mut poller, mut rx) = Poller::start(backend, Duration::from_millis(10));

        rx.recv().await.unwrap();
        poller.stop();

        // The aborted task drops its sender; the channel drains then closes.
        loop {
            match tokio::time::timeout(Duration::from_secs(1), rx.recv()).await {
                Ok(Some(_)) => continue,
                Ok(None) => break,
                Err(_) => panic!("channel did not close after stop"),
            }
        }
    }

    #[tokio::test]
    async fn test_request_refresh_fetches_immediately() {
        let backend = Arc::new(CountingBackend::new());
        let (poller, mut rx) = Poller::start(backend, Duration::from_secs(60));

        // First tick of an interval fires immediately.
        let first = rx.recv().await.unwrap();
        assert_eq!(first.seq, 1);

        // With a 60s cadence the only way a second outcome arrives promptly
        // is the refresh request.
        poller.request_refresh();
        let second = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("refresh did not trigger a fetch")
            .unwrap();
        assert_eq!(second.seq, 2);
    }
}
