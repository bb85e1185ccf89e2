use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Periodic tick task. The task lives exactly as long as this handle.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(period: Duration, tx: UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("tick task stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_ticks_until_dropped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_millis(5), tx);

        let first = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await;
        assert!(matches!(first, Ok(Some(AppEvent::Tick))));

        drop(ticker);
        // Once the task is gone its sender is dropped and the channel closes.
        let drained = tokio::time::timeout(Duration::from_secs(2), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }
}
