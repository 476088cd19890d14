use payloads::{
    APIClient, Category, ClientError, JokeFilter, JokeType, responses,
};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// The joke the view always asks for.
pub const JOKE_FILTER: JokeFilter = JokeFilter {
    category: Category::Programming,
    joke_type: JokeType::Single,
};

pub const LOADING_TEXT: &str = "Loading a programming joke...";
pub const FAILURE_TEXT: &str = "Sorry, something went wrong. Please try again.";
pub const EMPTY_JOKE_TEXT: &str = "No joke received from the server.";
pub const LOADING_LABEL: &str = "Loading...";
pub const IDLE_LABEL: &str = "New Joke";

/// What the joke view is currently showing.
///
/// Loading, failure and a loaded joke are mutually exclusive, so a failed
/// request forgets the previous joke and a new request forgets the failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Loading,
    Failed(String),
    Loaded(String),
}

impl DisplayState {
    /// State after a request resolves. Errors collapse into the one
    /// user-facing failure message; the detail only goes to the log.
    pub fn from_result(result: Result<responses::Joke, ClientError>) -> Self {
        match result {
            Ok(joke) => Self::Loaded(
                joke.text().unwrap_or(EMPTY_JOKE_TEXT).to_string(),
            ),
            Err(_) => Self::Failed(FAILURE_TEXT.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            LOADING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// Text for the live region.
    pub fn output_text(&self) -> &str {
        match self {
            Self::Loading => LOADING_TEXT,
            Self::Failed(message) => message,
            Self::Loaded(joke) => joke,
        }
    }
}

/// Request one joke and settle it into the state to display.
///
/// Issues exactly one request and never fails: every error becomes
/// [`DisplayState::Failed`].
pub async fn fetch_display_state(client: &APIClient) -> DisplayState {
    tracing::debug!("Requesting joke: {:?}", JOKE_FILTER);
    let result = client.get_joke(&JOKE_FILTER).await;
    match &result {
        Ok(joke) => tracing::debug!("Received joke {:?}", joke.id),
        Err(e) => tracing::warn!("Joke request failed: {e:?}"),
    }
    DisplayState::from_result(result)
}

/// Tracks whether the view that started a request is still mounted.
///
/// Clones share the flag. Requests are never cancelled, so a completion
/// that arrives after [`MountGuard::unmount`] must go through
/// [`MountGuard::apply`] and is dropped there.
#[derive(Debug, Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }

    /// Hand `value` to `update` if still mounted. Returns whether it was
    /// applied.
    pub fn apply<T>(&self, value: T, update: impl FnOnce(T)) -> bool {
        if self.is_mounted() {
            update(value);
            true
        } else {
            false
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MountGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// One run of the "new joke" action.
///
/// `set` receives `Loading` before this returns, then the settled state once
/// the returned future completes, unless `guard` was unmounted meanwhile.
pub fn request_joke<F>(
    client: APIClient,
    guard: MountGuard,
    set: F,
) -> impl Future<Output = ()> + 'static
where
    F: Fn(DisplayState) + 'static,
{
    set(DisplayState::Loading);

    async move {
        let next = fetch_display_state(&client).await;
        if !guard.apply(next, &set) {
            tracing::debug!("Discarding joke for unmounted view");
        }
    }
}
