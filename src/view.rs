//! The transfer list component.
//!
//! [`TransferView`] owns one fetch lifecycle: mounting starts a fetch on a
//! background job, [`TransferView::poll`] folds the result into the state,
//! and [`TransferView::render`] turns the current state into markup. The
//! fetch is tied to the view: tearing the view down (or dropping it)
//! cancels the request and discards any late result.

use crate::async_job::AsyncJob;
use crate::client::{GraphQlClient, TransferSource};
use crate::config::Config;
use crate::error::FetchError;
use crate::render::{render_table, rows, TransferRow};
use crate::state::{FetchEvent, ViewState};
use crate::tally::AssetTally;
use crate::types::Transfer;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

pub struct TransferView<S> {
    source: Arc<S>,
    state: ViewState,
    job: Option<AsyncJob<Vec<Transfer>>>,
    torn_down: bool,
}

impl TransferView<GraphQlClient> {
    /// A view backed by the indexer GraphQL endpoint in `config`.
    pub fn with_config(config: Config) -> Result<Self, FetchError> {
        Ok(Self::new(GraphQlClient::new(config)?))
    }
}

impl<S: TransferSource> TransferView<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            state: ViewState::new(),
            job: None,
            torn_down: false,
        }
    }

    pub fn on_mount(&mut self) {
        self.fetch_transfers();
    }

    /// Start a fetch cycle in the background.
    ///
    /// Returns false without issuing a request if a fetch is already in
    /// flight or the view has been torn down.
    pub fn fetch_transfers(&mut self) -> bool {
        if self.torn_down {
            tracing::debug!("Ignoring fetch on a torn down transfer view");
            return false;
        }
        if self.is_fetching() {
            tracing::debug!("Transfer fetch already in flight");
            return false;
        }

        self.state.apply(FetchEvent::Started);
        let source = Arc::clone(&self.source);
        self.job = Some(AsyncJob::spawn(move |cancel_token| async move {
            tokio::select! {
                _ = cancel_token.cancelled() => Err(anyhow::Error::from(FetchError::Cancelled)),
                result = source.fetch_transfers() => result.map_err(anyhow::Error::from),
            }
        }));
        true
    }

    /// Apply a finished fetch, if any. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(result) = self.job.as_mut().and_then(|job| job.poll()) else {
            return false;
        };
        self.job = None;

        match result {
            Ok(transfers) => {
                self.state.apply(FetchEvent::Succeeded(transfers));
                tracing::info!(
                    "Fetched {} transfers across {} assets",
                    self.state.transfers().len(),
                    self.state.asset_tally().len()
                );
            }
            Err(e) => {
                tracing::error!("Failed to fetch transfers: {:#}", e);
                self.state.apply(FetchEvent::Failed);
            }
        }
        true
    }

    /// Block the calling thread until the current fetch finishes or
    /// `timeout` elapses. Returns true if a result was applied.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.job.is_some() {
            if self.poll() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(WAIT_POLL_INTERVAL);
        }
        false
    }

    /// Cancel any in-flight fetch. Later completions are ignored and no new
    /// fetch can be started.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        if let Some(mut job) = self.job.take() {
            job.cancel();
            tracing::debug!("Cancelled in-flight transfer fetch");
        }
    }

    pub fn render(&self) -> String {
        render_table(self.state.transfers())
    }

    pub fn rows(&self) -> Vec<TransferRow> {
        rows(self.state.transfers())
    }
}

impl<S> TransferView<S> {
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.state.is_fetching()
    }

    pub fn transfers(&self) -> &[Transfer] {
        self.state.transfers()
    }

    pub fn asset_tally(&self) -> AssetTally {
        self.state.asset_tally()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StaticSource;
    use crate::ordering::is_sorted;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn transfer(id: &str, asset_id: &str, amount: u64) -> Transfer {
        Transfer::new(id, "contract", "receiver", amount, asset_id)
    }

    /// Source whose responses are scripted per call and which counts calls.
    struct ScriptedSource {
        responses: Mutex<Vec<Result<Vec<Transfer>, FetchError>>>,
        calls: AtomicUsize,
        delay: Duration,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<Transfer>, FetchError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
                delay: Duration::ZERO,
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::new(vec![Ok(vec![transfer("1", "aa", 1)])])
            }
        }
    }

    impl TransferSource for ScriptedSource {
        async fn fetch_transfers(&self) -> Result<Vec<Transfer>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Ok(Vec::new())
            } else {
                responses.remove(0)
            }
        }
    }

    #[test]
    fn test_new_view_is_idle_and_empty() {
        let view = TransferView::new(StaticSource::default());
        assert!(!view.is_fetching());
        assert!(view.transfers().is_empty());
        assert!(view.asset_tally().is_empty());
        assert!(!view.is_torn_down());
    }

    #[test]
    fn test_mount_fetches_and_sorts() {
        let mut view = TransferView::new(StaticSource::new(vec![
            transfer("12", "bb", 3),
            transfer("3", "aa", 1),
            transfer("7", "aa", 2),
        ]));
        view.on_mount();
        assert!(view.is_fetching());

        assert!(view.wait(TIMEOUT));
        assert!(!view.is_fetching());
        assert!(is_sorted(view.transfers()));
        let ids: Vec<_> = view.transfers().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "7", "12"]);
    }

    #[test]
    fn test_render_single_transfer() {
        let mut view = TransferView::new(StaticSource::new(vec![transfer("abc123", "XY9988", 5)]));
        view.on_mount();
        assert!(view.wait(TIMEOUT));

        assert_eq!(
            view.rows(),
            vec![TransferRow {
                id: "abc123".into(),
                asset: "XY".into(),
                amount: "5".into(),
            }]
        );
        assert!(view
            .render()
            .contains("<tr><th>abc123</th><td>XY</td><td>5</td></tr>"));
    }

    #[test]
    fn test_empty_response_renders_no_body_rows() {
        let mut view = TransferView::new(StaticSource::default());
        view.on_mount();
        assert!(view.wait(TIMEOUT));

        assert!(view.render().contains("<tbody></tbody>"));
        assert!(view.asset_tally().is_empty());
    }

    #[test]
    fn test_tally_counts_shared_asset_and_survives_rerender() {
        let mut view = TransferView::new(StaticSource::new(vec![
            transfer("1", "XY9988", 5),
            transfer("2", "XY9988", 6),
        ]));
        view.on_mount();
        assert!(view.wait(TIMEOUT));

        let _ = view.render();
        let _ = view.render();
        assert_eq!(view.asset_tally().get("XY9988"), Some(&2));
    }

    #[test]
    fn test_failed_fetch_keeps_previous_transfers() {
        let source = ScriptedSource::new(vec![
            Ok(vec![transfer("1", "aa", 1)]),
            Err(FetchError::Cancelled),
        ]);
        let mut view = TransferView::new(source);

        view.fetch_transfers();
        assert!(view.wait(TIMEOUT));
        let before = view.transfers().to_vec();

        view.fetch_transfers();
        assert!(view.wait(TIMEOUT));
        assert!(!view.is_fetching());
        assert_eq!(view.transfers(), before.as_slice());
    }

    #[test]
    fn test_fetch_twice_is_idempotent() {
        let rows = vec![transfer("20", "aa", 1), transfer("10", "bb", 2)];
        let mut view = TransferView::new(StaticSource::new(rows));

        view.fetch_transfers();
        assert!(view.wait(TIMEOUT));
        let first = view.transfers().to_vec();

        view.fetch_transfers();
        assert!(view.wait(TIMEOUT));
        assert_eq!(view.transfers(), first.as_slice());
    }

    #[test]
    fn test_overlapping_fetch_is_ignored() {
        let source = ScriptedSource::slow(Duration::from_millis(200));
        let mut view = TransferView::new(source);

        assert!(view.fetch_transfers());
        assert!(!view.fetch_transfers());
        assert!(view.wait(TIMEOUT));
        assert_eq!(view.source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_teardown_discards_late_completion() {
        let source = ScriptedSource::slow(Duration::from_millis(100));
        let mut view = TransferView::new(source);
        view.on_mount();

        view.teardown();
        thread::sleep(Duration::from_millis(300));

        assert!(!view.poll());
        assert!(view.transfers().is_empty());
        assert!(view.is_torn_down());
        assert!(!view.fetch_transfers());
    }

    #[test]
    fn test_poll_without_job_is_noop() {
        let mut view = TransferView::new(StaticSource::default());
        assert!(!view.poll());
        assert!(!view.wait(Duration::from_millis(10)));
    }
}
