use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use data::window::{Bound, DataWindow};
use exchange::Kline;

/// Spawns the single consumer of polled bar batches.
///
/// The task exclusively owns the window: each batch is fully merged
/// (sorted, deduplicated, trimmed) before the new snapshot is published,
/// so renders never observe a partially-appended window. Ends when the
/// poller side of the channel closes.
pub fn spawn_window_task(
    bound: Bound,
    mut batches: mpsc::Receiver<Vec<Kline>>,
    snapshots: watch::Sender<Vec<Kline>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut window = DataWindow::new(bound);

        while let Some(batch) = batches.recv().await {
            window.merge(&batch, now_ms());

            if let Some(last) = window.latest() {
                log::debug!(
                    "window holds {} bar(s), last close {} at t={}",
                    window.len(),
                    last.close,
                    last.time
                );
            }

            let _ = snapshots.send(window.snapshot());
        }

        log::debug!("market feed closed; window task exiting");
    })
}

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time: u64, close: f32) -> Kline {
        Kline::new(time, close, close, close, close, 1.0)
    }

    #[tokio::test]
    async fn snapshots_are_published_fully_merged() {
        let (batch_tx, batch_rx) = mpsc::channel(4);
        let (snapshot_tx, mut snapshot_rx) = watch::channel(Vec::new());
        let handle = spawn_window_task(Bound::Count(10), batch_rx, snapshot_tx);

        batch_tx
            .send(vec![bar(3, 19_300.0), bar(1, 19_100.0), bar(2, 19_200.0)])
            .await
            .expect("task is listening");

        snapshot_rx.changed().await.expect("snapshot published");
        let times: Vec<u64> = snapshot_rx.borrow().iter().map(|b| b.time).collect();
        assert_eq!(times, vec![1, 2, 3]);

        drop(batch_tx);
        handle.await.expect("task exits once the feed closes");
    }
}
