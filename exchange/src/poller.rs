use crate::Kline;
use crate::fetcher;

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Spawns the fixed-interval market poller.
///
/// Fetches once immediately, then on every `interval` tick, sending each
/// non-empty validated batch down the channel. A failed fetch is logged
/// and retried on the next tick; the last-good window downstream is left
/// untouched. The task ends once the receiving side is dropped, so an
/// in-flight fetch after teardown completes harmlessly and its result is
/// discarded.
pub fn spawn(
    api_base: String,
    interval: Duration,
    tx: mpsc::Sender<Vec<Kline>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match fetcher::fetch_latest(&client, &api_base).await {
                Ok(bars) if bars.is_empty() => {
                    log::debug!("poll returned no new bars");
                }
                Ok(bars) => {
                    if tx.send(bars).await.is_err() {
                        log::debug!("kline consumer dropped; stopping poller");
                        return;
                    }
                }
                Err(err) => {
                    log::warn!("kline fetch failed, keeping last-good window: {err}");
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn poller_stops_once_receiver_is_dropped() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Minimal HTTP stub so the first poll succeeds and the task hits
        // the closed-channel exit path on a later send.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let body = r#"{"topic":"kline.PAXGUSDT","symbol":"PAXGUSDT","data":[{"timestamp":1,"open":1.0,"close":2.0,"low":1.0,"high":2.0,"volume":1.0}]}"#;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        let (tx, mut rx) = mpsc::channel(1);
        let handle = spawn(
            format!("http://{addr}"),
            Duration::from_millis(10),
            tx,
        );

        let batch = rx.recv().await.expect("first immediate poll");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].time, 1);

        drop(rx);
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("poller exits after receiver drop")
            .expect("poller task completes cleanly");
    }
}
