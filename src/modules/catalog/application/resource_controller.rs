//! Generation-checked request state machine
//!
//! Every parameter change mints a new generation. A completion is published
//! only when its generation is still the latest one, so responses may arrive
//! in any order and the observable state always follows the newest request.
//! Cancellation is discard-on-arrival; nothing is aborted on the wire.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{watch, Mutex};

use super::request_state::RequestState;
use crate::modules::catalog::domain::{MovieCatalog, MovieDetail, SearchResultPage};
use crate::shared::errors::CatalogResult;
use crate::{log_debug, log_info};

pub type Generation = u64;

/// The call a controller drives, parameterized by its input
#[async_trait]
pub trait ResourceFetcher<P, T>: Send + Sync {
    async fn fetch(&self, params: &P) -> CatalogResult<T>;
}

/// A request that was started and must be completed with its generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket<P> {
    pub generation: Generation,
    pub params: P,
}

#[derive(Debug, PartialEq, Eq)]
enum Transition<P> {
    Unchanged,
    Idle,
    Load(RequestTicket<P>),
}

/// Bookkeeping behind the controller: latest generation and current input
#[derive(Debug)]
struct GenerationTracker<P> {
    latest: Generation,
    params: Option<P>,
    retired: bool,
}

impl<P: Clone + PartialEq> GenerationTracker<P> {
    fn new() -> Self {
        Self {
            latest: 0,
            params: None,
            retired: false,
        }
    }

    fn begin(&mut self, params: Option<P>) -> Transition<P> {
        if self.retired || self.params == params {
            return Transition::Unchanged;
        }
        self.params = params;
        self.advance()
    }

    fn restart(&mut self) -> Transition<P> {
        if self.retired {
            return Transition::Unchanged;
        }
        self.advance()
    }

    fn advance(&mut self) -> Transition<P> {
        self.latest += 1;
        match &self.params {
            Some(params) => Transition::Load(RequestTicket {
                generation: self.latest,
                params: params.clone(),
            }),
            None => Transition::Idle,
        }
    }

    fn is_current(&self, generation: Generation) -> bool {
        !self.retired && generation == self.latest
    }

    // Nothing minted before or after retirement can match again
    fn retire(&mut self) {
        self.retired = true;
    }
}

/// Drives one [`RequestState`] from a [`ResourceFetcher`]
pub struct ResourceController<P, T> {
    name: &'static str,
    fetcher: Arc<dyn ResourceFetcher<P, T>>,
    tracker: Mutex<GenerationTracker<P>>,
    state_tx: watch::Sender<RequestState<T>>,
}

impl<P, T> ResourceController<P, T>
where
    P: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, fetcher: Arc<dyn ResourceFetcher<P, T>>) -> Self {
        let (state_tx, _) = watch::channel(RequestState::Idle);
        Self {
            name,
            fetcher,
            tracker: Mutex::new(GenerationTracker::new()),
            state_tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state_tx.subscribe()
    }

    pub fn current(&self) -> RequestState<T> {
        self.state_tx.borrow().clone()
    }

    pub async fn params(&self) -> Option<P> {
        self.tracker.lock().await.params.clone()
    }

    pub async fn latest_generation(&self) -> Generation {
        self.tracker.lock().await.latest
    }

    pub async fn is_torn_down(&self) -> bool {
        self.tracker.lock().await.retired
    }

    /// Record new input and publish `Loading` or `Idle`.
    ///
    /// Returns the ticket to fetch with, or `None` when nothing should run
    /// (unchanged input, "no request" input, or a torn-down controller).
    pub async fn begin(&self, params: Option<P>) -> Option<RequestTicket<P>> {
        let mut tracker = self.tracker.lock().await;
        let transition = tracker.begin(params);
        self.publish_transition(transition)
    }

    /// Start a fresh generation for the current input, even if it is unchanged
    pub async fn begin_reload(&self) -> Option<RequestTicket<P>> {
        let mut tracker = self.tracker.lock().await;
        let transition = tracker.restart();
        self.publish_transition(transition)
    }

    fn publish_transition(&self, transition: Transition<P>) -> Option<RequestTicket<P>> {
        match transition {
            Transition::Unchanged => None,
            Transition::Idle => {
                log_debug!("{}: no request to run, state idle", self.name);
                self.state_tx.send_replace(RequestState::Idle);
                None
            }
            Transition::Load(ticket) => {
                log_debug!(
                    "{}: generation {} loading {:?}",
                    self.name,
                    ticket.generation,
                    ticket.params
                );
                self.state_tx.send_replace(RequestState::Loading);
                Some(ticket)
            }
        }
    }

    /// Apply an outcome if `generation` is still the latest; returns whether it was published
    pub async fn complete(&self, generation: Generation, outcome: CatalogResult<T>) -> bool {
        let tracker = self.tracker.lock().await;
        if !tracker.is_current(generation) {
            log_debug!(
                "{}: discarding stale outcome of generation {} (latest {}, torn down: {})",
                self.name,
                generation,
                tracker.latest,
                tracker.retired
            );
            return false;
        }

        let state = RequestState::from(outcome);
        match &state {
            RequestState::Failure(err) => {
                log_info!("{}: generation {} failed: {}", self.name, generation, err)
            }
            other => log_debug!("{}: generation {} -> {}", self.name, generation, other.label()),
        }
        self.state_tx.send_replace(state);
        true
    }

    /// Fetch for a ticket and complete it. The tracker is not held across the fetch.
    pub async fn run(&self, ticket: RequestTicket<P>) -> bool {
        let outcome = self.fetcher.fetch(&ticket.params).await;
        self.complete(ticket.generation, outcome).await
    }

    /// Change input and, if a request should run, fetch and complete it
    pub async fn set_params(&self, params: Option<P>) -> bool {
        match self.begin(params).await {
            Some(ticket) => self.run(ticket).await,
            None => false,
        }
    }

    pub async fn reload(&self) -> bool {
        match self.begin_reload().await {
            Some(ticket) => self.run(ticket).await,
            None => false,
        }
    }

    /// Stop publishing anything for this controller; in-flight calls are discarded on arrival
    pub async fn teardown(&self) {
        let mut tracker = self.tracker.lock().await;
        tracker.retire();
        log_debug!("{}: torn down at generation {}", self.name, tracker.latest);
    }
}

/// Search input: a normalized, non-empty query and a page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub query: String,
    pub page: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }
}

pub struct SearchFetcher {
    catalog: Arc<dyn MovieCatalog>,
}

impl SearchFetcher {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ResourceFetcher<SearchQuery, SearchResultPage> for SearchFetcher {
    async fn fetch(&self, params: &SearchQuery) -> CatalogResult<SearchResultPage> {
        self.catalog.search(&params.query, params.page).await
    }
}

pub struct DetailsFetcher {
    catalog: Arc<dyn MovieCatalog>,
}

impl DetailsFetcher {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ResourceFetcher<u64, MovieDetail> for DetailsFetcher {
    async fn fetch(&self, id: &u64) -> CatalogResult<MovieDetail> {
        self.catalog.get_details(*id).await
    }
}

pub type SearchController = ResourceController<SearchQuery, SearchResultPage>;
pub type DetailsController = ResourceController<u64, MovieDetail>;
