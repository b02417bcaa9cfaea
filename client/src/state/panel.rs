//! Fetch lifecycle for one data panel.
//!
//! DESIGN
//! ======
//! `FetchState` replaces separate loading/error/data flags, so a payload and
//! an error message can never coexist. `PanelState` adds a request
//! generation: every fetch takes a [`RequestTicket`], and only the ticket of
//! the most recent fetch may settle the state. A slow response from an
//! earlier retry therefore cannot overwrite a newer one.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Load status of a panel's payload.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    /// No fetch has been issued yet.
    Idle,
    Loading,
    Success(T),
    /// Static, user-facing failure message.
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// What a panel should draw for its current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderMode<'a, T> {
    Spinner,
    /// Error message with a retry control.
    Failed(&'a str),
    Content(&'a T),
}

/// Proof that a fetch was started; required to settle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// A panel's fetch state plus the generation of its latest request.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState<T> {
    fetch: FetchState<T>,
    generation: u64,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self { fetch: FetchState::Idle, generation: 0 }
    }
}

impl<T> PanelState<T> {
    /// State of a freshly mounted panel whose first fetch is about to start.
    #[must_use]
    pub fn loading() -> Self {
        Self { fetch: FetchState::Loading, generation: 0 }
    }

    #[must_use]
    pub fn fetch(&self) -> &FetchState<T> {
        &self.fetch
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new fetch: reset to loading and invalidate older tickets.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.fetch = FetchState::Loading;
        RequestTicket(self.generation)
    }

    /// Record the outcome of the fetch identified by `ticket`.
    ///
    /// Errors are replaced by `failure_message`. Returns `false`, leaving the
    /// state untouched, when a newer fetch has started since `ticket` was issued.
    pub fn settle<E>(&mut self, ticket: RequestTicket, result: Result<T, E>, failure_message: &str) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.fetch = match result {
            Ok(payload) => FetchState::Success(payload),
            Err(_) => FetchState::Error(failure_message.to_owned()),
        };
        true
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode<'_, T> {
        match &self.fetch {
            FetchState::Idle | FetchState::Loading => RenderMode::Spinner,
            FetchState::Error(message) => RenderMode::Failed(message),
            FetchState::Success(payload) => RenderMode::Content(payload),
        }
    }
}
