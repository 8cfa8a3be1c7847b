/// List controller state machine
///
/// State changes only through [`ListState::update`]; every transition is an
/// explicit [`Message`] variant and returns the side effect to run, so the
/// whole transition table is testable without a rendering surface. An async
/// [`ListController`] drives the state against a [`LaunchSource`].
use crate::domain::{FilterState, LaunchRecord, LaunchStatus, SortOrder};
use crate::errors::FetchError;
use crate::search::search_records;
use crate::utils::sort_by_launch_date;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// Fixed user-facing message shown when a fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch SpaceX data";

/// Scroll distance from the bottom of the content that triggers the next page.
pub const SCROLL_THRESHOLD_PX: f64 = 200.0;

/// Delay used to coalesce search keystrokes.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Where the controller currently is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Everything that can happen to the list, named in past tense.
#[derive(Debug)]
pub enum Message {
    StatusSelected(LaunchStatus),
    SortSelected(SortOrder),
    PageLoaded {
        generation: u64,
        records: Vec<LaunchRecord>,
    },
    FetchFailed {
        generation: u64,
    },
    ScrolledNearBottom,
    SearchChanged(String),
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch {
        generation: u64,
        filter: FilterState,
        page: u32,
    },
    None,
}

pub struct ListState {
    pub filter: FilterState,
    pub page: u32,
    pub phase: Phase,
    pub has_more: bool,
    pub search_active: bool,
    pub error: Option<&'static str>,
    /// Records accumulated across pages for the current filter.
    pub loaded: Vec<LaunchRecord>,
    /// Corpus the search runs against; refreshed on every successful fetch.
    pub snapshot: Vec<LaunchRecord>,
    /// What a rendering surface would show right now.
    pub displayed: Vec<LaunchRecord>,
    generation: u64,
}

impl ListState {
    pub fn new(filter: FilterState) -> Self {
        Self {
            filter,
            page: 1,
            phase: Phase::Idle,
            has_more: true,
            search_active: false,
            error: None,
            loaded: Vec::new(),
            snapshot: Vec::new(),
            displayed: Vec::new(),
            generation: 0,
        }
    }

    /// Kick off the initial page-1 fetch.
    pub fn start(&mut self) -> Command {
        self.reset_and_fetch()
    }

    /// Apply one message and return the side effect to run.
    pub fn update(&mut self, message: Message) -> Command {
        match message {
            Message::StatusSelected(status) => {
                self.filter.launch_status = status;
                self.reset_and_fetch()
            }
            Message::SortSelected(sort) => {
                self.filter.sort = sort;
                self.reset_and_fetch()
            }
            Message::PageLoaded {
                generation,
                records,
            } => self.apply_page(generation, records),
            Message::FetchFailed { generation } => self.apply_failure(generation),
            Message::ScrolledNearBottom => self.next_page(),
            Message::SearchChanged(term) => self.apply_search(term),
        }
    }

    /// Shared by filter changes, search clearing and startup: back to page 1
    /// with an empty loaded set and a fresh fetch. Search cannot stay active
    /// across this; only one of browsing and search is ever live.
    fn reset_and_fetch(&mut self) -> Command {
        self.page = 1;
        self.loaded.clear();
        self.has_more = true;
        self.error = None;
        self.search_active = false;
        self.phase = Phase::Loading;
        self.issue_fetch()
    }

    fn issue_fetch(&mut self) -> Command {
        self.generation += 1;
        Command::Fetch {
            generation: self.generation,
            filter: self.filter,
            page: self.page,
        }
    }

    fn apply_page(&mut self, generation: u64, mut records: Vec<LaunchRecord>) -> Command {
        if generation != self.generation {
            // A filter change outran this response; its data belongs to a
            // filter that is no longer current.
            warn!(
                "dropping stale page response (generation {generation}, current {})",
                self.generation
            );
            return Command::None;
        }

        self.has_more = !records.is_empty();
        sort_by_launch_date(&mut records, self.filter.sort);
        if self.page == 1 {
            self.loaded = records;
        } else {
            self.loaded.extend(records);
        }
        // The search corpus always tracks the freshest fetched data, even
        // while a search is showing.
        self.snapshot = self.loaded.clone();
        if !self.search_active {
            self.displayed = self.loaded.clone();
        }
        self.phase = Phase::Loaded;
        self.error = None;
        Command::None
    }

    fn apply_failure(&mut self, generation: u64) -> Command {
        if generation != self.generation {
            return Command::None;
        }
        // Previously loaded records stay visible behind the error message.
        self.phase = Phase::Error;
        self.error = Some(FETCH_ERROR_MESSAGE);
        Command::None
    }

    fn next_page(&mut self) -> Command {
        if !self.has_more || self.phase == Phase::Loading || self.search_active {
            return Command::None;
        }
        self.page += 1;
        self.phase = Phase::Loading;
        self.issue_fetch()
    }

    fn apply_search(&mut self, term: String) -> Command {
        if term.is_empty() {
            if !self.search_active {
                return Command::None;
            }
            // Leaving search restores the live paginated view, not the
            // frozen snapshot.
            return self.reset_and_fetch();
        }
        self.search_active = true;
        self.displayed = search_records(&self.snapshot, &term);
        Command::None
    }
}

/// Mirror of the browser scroll check: the viewport bottom is within the
/// threshold of the end of the content.
pub fn near_bottom(viewport_height: f64, scroll_top: f64, content_height: f64) -> bool {
    viewport_height + scroll_top >= content_height - SCROLL_THRESHOLD_PX
}

/// Source of launch pages for the controller.
#[allow(async_fn_in_trait)]
pub trait LaunchSource {
    async fn fetch_page(
        &self,
        status: LaunchStatus,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<LaunchRecord>, FetchError>;
}

/// Drives a [`ListState`] against a [`LaunchSource`], feeding fetch results
/// back through the reducer.
pub struct ListController<S: LaunchSource> {
    state: ListState,
    source: S,
}

impl<S: LaunchSource> ListController<S> {
    pub fn new(filter: FilterState, source: S) -> Self {
        Self {
            state: ListState::new(filter),
            source,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Run the initial page-1 fetch.
    pub async fn start(&mut self) {
        let command = self.state.start();
        self.run(command).await;
    }

    pub async fn dispatch(&mut self, message: Message) {
        let command = self.state.update(message);
        self.run(command).await;
    }

    async fn run(&mut self, command: Command) {
        let Command::Fetch {
            generation,
            filter,
            page,
        } = command
        else {
            return;
        };

        let message = match self
            .source
            .fetch_page(filter.launch_status, filter.page_size, page)
            .await
        {
            Ok(records) => Message::PageLoaded {
                generation,
                records,
            },
            Err(e) => {
                warn!("launch fetch failed: {e}");
                Message::FetchFailed { generation }
            }
        };
        // A completed fetch never requests another one.
        let _ = self.state.update(message);
    }
}

/// Timer-based keystroke coalescing: scheduling a new invocation cancels
/// any invocation still waiting on the delay.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }
}
