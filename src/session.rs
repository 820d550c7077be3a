use crate::models::{ResultSet, Scheme};
use crate::ui;
use serde::Serialize;

pub const LOADING_TEXT: &str = "Finding schemes...";
pub const NO_RESULTS_TEXT: &str = "No relevant schemes found.";
pub const FETCH_ERROR_TEXT: &str = "Error fetching schemes.";
pub const FETCH_ERROR_CARD: &str = "Server error. Try again.";
pub const NOTHING_TO_EXPORT: &str = "No schemes to download!";
pub const EXPORT_ERROR_TEXT: &str = "Error generating PDF.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Rendered,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlocked;

/// Schemes handed to the PDF export, tagged with the submission that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub ticket: Ticket,
    pub schemes: Vec<Scheme>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub position: usize,
    pub state: String,
    pub title: String,
    pub summary: String,
    pub link: String,
}

/// What the page shows in the results section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsSnapshot {
    pub generation: u64,
    pub phase: Phase,
    pub section_visible: bool,
    pub count_text: String,
    pub cards: Vec<Card>,
    pub message: Option<String>,
    pub export_visible: bool,
    pub scroll_into_view: bool,
    pub export_error: Option<String>,
    pub grid_html: String,
}

#[derive(Debug, Default)]
pub struct ResultsView {
    generation: u64,
    phase: Phase,
    count_text: String,
    current: Option<Vec<Scheme>>,
    current_generation: u64,
    export_visible: bool,
    export_error: Option<String>,
}

impl ResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the loading state and hands out the ticket for this submission.
    pub fn begin_submission(&mut self) -> Ticket {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.count_text = LOADING_TEXT.to_string();
        self.export_error = None;
        Ticket(self.generation)
    }

    pub fn apply_results(&mut self, ticket: Ticket, set: ResultSet) -> Settled {
        if ticket.0 != self.generation {
            return Settled::Stale;
        }

        let rendered = set.count != 0 && !set.results.is_empty();
        self.count_text = format!("Found {} Schemes", set.count);
        self.export_visible = rendered;
        self.current = Some(if rendered { set.results } else { Vec::new() });
        self.current_generation = ticket.0;
        self.phase = Phase::Rendered;
        Settled::Applied
    }

    pub fn apply_failure(&mut self, ticket: Ticket) -> Settled {
        if ticket.0 != self.generation {
            return Settled::Stale;
        }

        self.count_text = FETCH_ERROR_TEXT.to_string();
        self.phase = Phase::Errored;
        Settled::Applied
    }

    pub fn export_schemes(&self) -> Result<Export, ExportBlocked> {
        match &self.current {
            Some(schemes) if !schemes.is_empty() => Ok(Export {
                ticket: Ticket(self.current_generation),
                schemes: schemes.clone(),
            }),
            _ => Err(ExportBlocked),
        }
    }

    /// Ignored once newer results have replaced the exported ones.
    pub fn record_export_failure(&mut self, ticket: Ticket) -> Settled {
        if ticket.0 != self.current_generation {
            return Settled::Stale;
        }
        self.export_error = Some(EXPORT_ERROR_TEXT.to_string());
        Settled::Applied
    }

    pub fn clear_export_failure(&mut self, ticket: Ticket) -> Settled {
        if ticket.0 != self.current_generation {
            return Settled::Stale;
        }
        self.export_error = None;
        Settled::Applied
    }

    pub fn snapshot(&self) -> ResultsSnapshot {
        let phase = self.phase;
        let (cards, message) = match phase {
            Phase::Idle | Phase::Loading => (Vec::new(), None),
            Phase::Errored => (Vec::new(), Some(FETCH_ERROR_CARD.to_string())),
            Phase::Rendered if !self.export_visible => {
                (Vec::new(), Some(NO_RESULTS_TEXT.to_string()))
            }
            Phase::Rendered => (self.cards(), None),
        };
        let grid_html = ui::render_grid(&cards, message.as_deref(), phase == Phase::Errored);

        ResultsSnapshot {
            generation: self.generation,
            phase,
            section_visible: phase != Phase::Idle,
            count_text: self.count_text.clone(),
            scroll_into_view: phase == Phase::Rendered && !cards.is_empty(),
            cards,
            message,
            export_visible: self.export_visible,
            export_error: self.export_error.clone(),
            grid_html,
        }
    }

    fn cards(&self) -> Vec<Card> {
        self.current
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, scheme)| Card {
                position: index + 1,
                state: scheme.state.clone(),
                title: scheme.scheme_name.clone(),
                summary: scheme.summary.clone(),
                link: scheme.link.clone(),
            })
            .collect()
    }
}
