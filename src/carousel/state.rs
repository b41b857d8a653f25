//! The carousel's single state container.
//!
//! Every change goes through [`CarouselState::apply`]. Refreshes are
//! single-flight: while one is pending, further `RefreshStart` actions are
//! ignored, and completions are matched against the pending ticket so a
//! late answer for an older request can never overwrite the collection.

use tracing::{
    debug,
    error,
    info,
};

use super::{
    models::{
        Card,
        CarouselConfig,
        ConfigField,
        Theme,
    },
    seed::seed_cards,
};
use crate::core::PrismError;

/// Anything that can produce a fresh card collection for a theme.
#[allow(async_fn_in_trait)]
pub trait CardSource {
    async fn fetch_cards(&self, theme: Theme, count: u32) -> Result<Vec<Card>, PrismError>;
}

/// Identifies one in-flight refresh and what it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub id: u64,
    pub theme: Theme,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdateField(ConfigField, f32),
    SetTheme(Theme),
    TogglePause,
    TogglePanel,
    RefreshStart,
    RefreshSuccess { ticket: u64, cards: Vec<Card> },
    RefreshFailure { ticket: u64, error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Applied,
    Ignored,
    RefreshStarted(RefreshTicket),
    RefreshFinished(RefreshOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Replaced(usize),
    Empty,
    Failed(String),
}

impl RefreshOutcome {
    pub fn summary(&self) -> String {
        match self {
            RefreshOutcome::Replaced(count) => format!("Generated {} cards", count),
            RefreshOutcome::Empty => "No new cards".to_string(),
            RefreshOutcome::Failed(_) => "Refresh failed".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    config: CarouselConfig,
    cards: Vec<Card>,
    theme: Theme,
    paused: bool,
    panel_open: bool,
    pending: Option<RefreshTicket>,
    next_ticket: u64,
    last_outcome: Option<RefreshOutcome>,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(CarouselConfig::default(), seed_cards())
    }
}

impl CarouselState {
    pub fn new(config: CarouselConfig, cards: Vec<Card>) -> Self {
        Self {
            config,
            cards,
            theme: Theme::default(),
            paused: false,
            panel_open: false,
            pending: None,
            next_ticket: 1,
            last_outcome: None,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<RefreshTicket> {
        self.pending
    }

    pub fn last_outcome(&self) -> Option<&RefreshOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::UpdateField(field, value) => {
                self.config.set(field, value);
                Transition::Applied
            }
            Action::SetTheme(theme) => {
                self.theme = theme;
                Transition::Applied
            }
            Action::TogglePause => {
                self.paused = !self.paused;
                Transition::Applied
            }
            Action::TogglePanel => {
                self.panel_open = !self.panel_open;
                Transition::Applied
            }
            Action::RefreshStart => self.start_refresh(),
            Action::RefreshSuccess { ticket, cards } => {
                if !self.take_pending(ticket) {
                    return Transition::Ignored;
                }
                let outcome = if cards.is_empty() {
                    info!(ticket, "Generator returned no cards, keeping current collection");
                    RefreshOutcome::Empty
                } else {
                    self.cards = reindex(cards);
                    info!(ticket, count = self.cards.len(), "Card collection replaced");
                    RefreshOutcome::Replaced(self.cards.len())
                };
                self.finish(outcome)
            }
            Action::RefreshFailure { ticket, error } => {
                if !self.take_pending(ticket) {
                    return Transition::Ignored;
                }
                error!(ticket, error = %error, "Theme refresh failed, keeping current collection");
                self.finish(RefreshOutcome::Failed(error))
            }
        }
    }

    pub fn update_field(&mut self, field: ConfigField, value: f32) {
        self.apply(Action::UpdateField(field, value));
    }

    /// Starts a refresh for the current theme and configured quantity.
    /// Returns `None` if one is already pending.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        match self.apply(Action::RefreshStart) {
            Transition::RefreshStarted(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Feeds the result of a fetch back in. Unknown or stale tickets are
    /// dropped and yield `None`.
    pub fn complete_refresh(
        &mut self,
        ticket: u64,
        result: Result<Vec<Card>, PrismError>,
    ) -> Option<RefreshOutcome> {
        let action = match result {
            Ok(cards) => Action::RefreshSuccess { ticket, cards },
            Err(e) => Action::RefreshFailure { ticket, error: e.to_string() },
        };
        match self.apply(action) {
            Transition::RefreshFinished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// One full refresh round trip. Suspends until the source answers.
    pub async fn refresh<S: CardSource>(&mut self, source: &S) -> Option<RefreshOutcome> {
        let ticket = self.begin_refresh()?;
        let result = source.fetch_cards(ticket.theme, ticket.count).await;
        self.complete_refresh(ticket.id, result)
    }

    fn start_refresh(&mut self) -> Transition {
        if let Some(pending) = self.pending {
            debug!(pending = pending.id, "Refresh already in flight, ignoring");
            return Transition::Ignored;
        }

        let ticket =
            RefreshTicket { id: self.next_ticket, theme: self.theme, count: self.config.quantity };
        self.next_ticket += 1;
        self.pending = Some(ticket);
        info!(ticket = ticket.id, theme = %ticket.theme, count = ticket.count, "Refresh started");
        Transition::RefreshStarted(ticket)
    }

    fn take_pending(&mut self, ticket: u64) -> bool {
        match self.pending {
            Some(pending) if pending.id == ticket => {
                self.pending = None;
                true
            }
            _ => {
                debug!(ticket, "Dropping result for a refresh that is not pending");
                false
            }
        }
    }

    fn finish(&mut self, outcome: RefreshOutcome) -> Transition {
        self.last_outcome = Some(outcome.clone());
        Transition::RefreshFinished(outcome)
    }
}

fn reindex(cards: Vec<Card>) -> Vec<Card> {
    cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| Card { index, ..card })
        .collect()
}
