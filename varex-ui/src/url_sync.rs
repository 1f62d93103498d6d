//! Debounced synchronization of table display state into the URL.
//!
//! The table page reports every settings change (each keystroke, sort
//! click, page turn) through [`UrlSync::state_changed`]. Changes are
//! coalesced by a trailing-edge debounce and, after a quiet period, the
//! latest state is encoded to its canonical query parameters and handed to
//! the navigation callback, so results stay bookmarkable without a
//! history entry per keystroke.
//!
//! The navigation re-renders the table page with state decoded from the
//! new URL; `decode(encode(s))` reproduces `s`, so the table does not
//! visibly reset.

use dioxus::prelude::*;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future::{self, Either};
use futures::{pin_mut, StreamExt};

use varex_common::params::{self, QueryParams};
use varex_common::TableDisplayState;

/// Quiet period before a burst of table changes is written to the URL.
pub const URL_SYNC_QUIET_MS: u64 = 500;

/// Handle held by the table page; forwards state changes into the pump.
#[derive(Clone)]
pub struct UrlSync {
    tx: UnboundedSender<TableDisplayState>,
}

impl UrlSync {
    pub fn state_changed(&self, state: TableDisplayState) {
        // Fails only after teardown, when nothing is listening anyway.
        let _ = self.tx.unbounded_send(state);
    }
}

/// Hook: run a url-sync pump for this component's lifetime.
///
/// `navigate` receives the canonical query parameters for the latest
/// state; `is_active` is checked at flush time so a table that is no
/// longer the visible route never triggers a navigation. The pump task is
/// cancelled on unmount, which drops any pending flush.
pub fn use_url_sync(
    navigate: impl FnMut(QueryParams) + 'static,
    is_active: impl Fn() -> bool + 'static,
) -> UrlSync {
    let (sync, task) = use_hook(move || {
        let (tx, rx) = mpsc::unbounded();
        let task = spawn(run_url_sync(rx, URL_SYNC_QUIET_MS, navigate, is_active));
        (UrlSync { tx }, task)
    });
    use_drop(move || task.cancel());
    sync
}

/// The debounce pump. Trailing-edge with the timer reset on every event:
/// a flush happens only once `quiet_ms` elapses with no further changes,
/// and it carries the most recent state of the burst.
///
/// Ends without flushing when the sending side is dropped, even mid-burst.
pub async fn run_url_sync(
    mut rx: UnboundedReceiver<TableDisplayState>,
    quiet_ms: u64,
    mut navigate: impl FnMut(QueryParams),
    is_active: impl Fn() -> bool,
) {
    while let Some(mut latest) = rx.next().await {
        loop {
            let timer = sleep_ms(quiet_ms);
            pin_mut!(timer);
            match future::select(rx.next(), timer).await {
                // Another change within the quiet period: keep it, restart the timer.
                Either::Left((Some(next), _)) => latest = next,
                // Torn down mid-burst: no flush.
                Either::Left((None, _)) => return,
                Either::Right(((), _)) => {
                    if is_active() {
                        let query = params::encode(&latest);
                        tracing::debug!(query = query.to_query_string(), "url-sync flush");
                        navigate(query);
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn state(search: &str) -> TableDisplayState {
        TableDisplayState {
            search: search.to_string(),
            ..TableDisplayState::default()
        }
    }

    fn collector() -> (Arc<Mutex<Vec<QueryParams>>>, impl FnMut(QueryParams) + Send) {
        let flushed = Arc::new(Mutex::new(Vec::new()));
        let sink = flushed.clone();
        (flushed, move |q| sink.lock().unwrap().push(q))
    }

    async fn idle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_to_one_flush_with_latest_state() {
        let (tx, rx) = mpsc::unbounded();
        let (flushed, sink) = collector();
        let pump = tokio::spawn(run_url_sync(rx, 500, sink, || true));

        tx.unbounded_send(state("b")).unwrap();
        idle(100).await;
        tx.unbounded_send(state("br")).unwrap();
        idle(100).await;
        tx.unbounded_send(state("brca1")).unwrap();
        idle(600).await;

        let seen = flushed.lock().unwrap().clone();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].search.as_deref(), Some("brca1"));

        drop(tx);
        pump.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_resets_on_every_event() {
        let (tx, rx) = mpsc::unbounded();
        let (flushed, sink) = collector();
        let pump = tokio::spawn(run_url_sync(rx, 500, sink, || true));

        // Events 400ms apart: each restarts the quiet window, so at 800ms
        // nothing has flushed yet.
        tx.unbounded_send(state("a")).unwrap();
        idle(400).await;
        tx.unbounded_send(state("ab")).unwrap();
        idle(400).await;
        assert!(flushed.lock().unwrap().is_empty());

        idle(200).await;
        let seen = flushed.lock().unwrap().clone();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].search.as_deref(), Some("ab"));

        drop(tx);
        pump.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_flush_separately() {
        let (tx, rx) = mpsc::unbounded();
        let (flushed, sink) = collector();
        let pump = tokio::spawn(run_url_sync(rx, 500, sink, || true));

        tx.unbounded_send(state("first")).unwrap();
        idle(600).await;
        tx.unbounded_send(state("second")).unwrap();
        idle(600).await;

        let seen = flushed.lock().unwrap().clone();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].search.as_deref(), Some("first"));
        assert_eq!(seen[1].search.as_deref(), Some("second"));

        drop(tx);
        pump.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_before_quiet_period_emits_nothing() {
        let (tx, rx) = mpsc::unbounded();
        let (flushed, sink) = collector();
        let pump = tokio::spawn(run_url_sync(rx, 500, sink, || true));

        tx.unbounded_send(state("doomed")).unwrap();
        idle(100).await;
        drop(tx);
        pump.await.unwrap();

        assert!(flushed.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_inactive_view_never_navigates() {
        let (tx, rx) = mpsc::unbounded();
        let (flushed, sink) = collector();
        let pump = tokio::spawn(run_url_sync(rx, 500, sink, || false));

        tx.unbounded_send(state("hidden")).unwrap();
        idle(600).await;
        tx.unbounded_send(state("still hidden")).unwrap();
        idle(600).await;

        assert!(flushed.lock().unwrap().is_empty());

        drop(tx);
        pump.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_carries_canonical_params() {
        let (tx, rx) = mpsc::unbounded();
        let (flushed, sink) = collector();
        let pump = tokio::spawn(run_url_sync(rx, 500, sink, || true));

        tx.unbounded_send(TableDisplayState::default()).unwrap();
        idle(600).await;

        let seen = flushed.lock().unwrap().clone();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_empty());

        drop(tx);
        pump.await.unwrap();
    }
}
