use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::{CountingClient, VisitRequest};
use crate::config::CounterConfig;
use crate::counter::intent::{CounterIntent, Trigger};
use crate::counter::reducer::reduce;
use crate::counter::state::CounterState;

struct Inner {
    state: CounterState,
    /// Sequence number of the most recently fired trigger.
    newest_seq: u64,
    closed: bool,
}

/// The visitor-counter component.
///
/// One instance per mount. Each trigger runs one counting cycle; when cycles
/// overlap, only the one belonging to the newest trigger may commit its
/// terminal state, and nothing commits after [`close`](Self::close).
pub struct VisitorCounter {
    config: CounterConfig,
    client: CountingClient,
    inner: Mutex<Inner>,
    state_tx: watch::Sender<CounterState>,
}

impl VisitorCounter {
    /// Builds a counter against an already-resolved endpoint.
    pub fn new(endpoint: String, config: CounterConfig) -> Self {
        let client = CountingClient::new(endpoint, &config);
        let (state_tx, _) = watch::channel(CounterState::Idle);

        Self {
            config,
            client,
            inner: Mutex::new(Inner {
                state: CounterState::Idle,
                newest_seq: 0,
                closed: false,
            }),
            state_tx,
        }
    }

    /// Builds a counter from `config`, resolving the endpoint across the
    /// override/environment/file layers and logging the chosen source.
    pub fn from_config(config: CounterConfig, endpoint_override: Option<&str>) -> Self {
        let (endpoint, source) = config.resolve_endpoint(endpoint_override);
        info!(endpoint = %endpoint, source = source.as_str(), "resolved counting endpoint");
        Self::new(endpoint, config)
    }

    /// Current view state.
    pub fn state(&self) -> CounterState {
        self.inner.lock().state.clone()
    }

    /// Observer channel; receives every committed state.
    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.state_tx.subscribe()
    }

    /// The client used for counting calls.
    pub fn client(&self) -> &CountingClient {
        &self.client
    }

    /// Runs one counting cycle for `trigger` and returns the state it left
    /// the component in.
    ///
    /// Issues at most one HTTP call. If a newer trigger fires while this one
    /// is awaiting the service, this cycle's outcome is discarded on arrival
    /// and the returned state is whatever the newer cycle committed.
    pub async fn record_visit(&self, trigger: Trigger) -> CounterState {
        let path = trigger.path().to_string();

        let seq;
        {
            let mut inner = self.inner.lock();
            if inner.closed {
                return inner.state.clone();
            }
            inner.newest_seq += 1;
            seq = inner.newest_seq;

            if !self.config.counts_page(&path) {
                debug!(page = %path, "page outside allow-list, not counting");
                return self.apply(&mut inner, CounterIntent::Skip);
            }
            self.apply(&mut inner, CounterIntent::Start);
        }

        info!(page = %path, seq, "recording visit");
        let request = VisitRequest::new(&path, &self.config.user_agent);
        let outcome = self.client.record_visit(&request).await;

        let mut inner = self.inner.lock();
        if inner.closed || inner.newest_seq != seq {
            debug!(seq, newest = inner.newest_seq, "discarding stale counting response");
            return inner.state.clone();
        }

        match outcome {
            Ok(count) => self.apply(&mut inner, CounterIntent::Succeed { count }),
            Err(error) => {
                warn!(kind = error.kind(), error = %error, "visit count failed");
                self.apply(&mut inner, CounterIntent::Fail)
            }
        }
    }

    /// Tears the component down: any in-flight cycle is barred from
    /// committing and the state returns to `Idle`.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        self.apply(&mut inner, CounterIntent::Reset);
    }

    fn apply(&self, inner: &mut Inner, intent: CounterIntent) -> CounterState {
        inner.state = reduce(inner.state.clone(), intent);
        self.state_tx.send_replace(inner.state.clone());
        inner.state.clone()
    }
}
