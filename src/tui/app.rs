//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::api::{PeopleClient, PeoplePage, Person};
use crate::core::config::Config;
use crate::error::{Result, StarviewError};
use crate::tui::event::{is_quit_key, AppEvent, EventHandler};
use crate::tui::ui;

/// Message type for async fetch results
#[derive(Debug)]
pub enum FetchMessage {
    /// A page loaded successfully
    PageLoaded {
        generation: u64,
        page: u32,
        payload: PeoplePage,
    },
    /// A page fetch failed
    PageError { generation: u64, message: String },
}

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        if self.total > 0 {
            self.selected = self.total - 1;
        }
    }
}

/// Main TUI application
///
/// All state lives here and is mutated only on the event-loop task.
/// Background fetch tasks communicate through the async channel.
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Application configuration
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // People list data
    // ─────────────────────────────────────────────────────────────────────────
    /// Current page's people, fully replaced on each successful fetch
    pub people: Vec<Person>,
    /// Whether a fetch is in flight
    pub refreshing: bool,
    /// Page the next `load_next_page` will request; never reset
    pub next_page: u32,
    /// Generation token of the latest issued fetch; completions from
    /// superseded fetches are discarded on arrival
    fetch_generation: u64,

    // ─────────────────────────────────────────────────────────────────────────
    // Display state
    // ─────────────────────────────────────────────────────────────────────────
    /// List cursor
    pub list_selection: ListState,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Total count reported by the last page envelope
    pub total_count: Option<u64>,
    /// Whether the API reported a page after the current one
    pub has_next: bool,
    /// When the list was last replaced
    pub last_updated: Option<DateTime<Local>>,
    /// Tick counter for spinner animation
    pub tick_counter: u64,

    // ─────────────────────────────────────────────────────────────────────────
    // Async communication
    // ─────────────────────────────────────────────────────────────────────────
    /// Sender for fetch results (cloned into tasks)
    async_tx: mpsc::Sender<FetchMessage>,
    /// Receiver for fetch results
    async_rx: mpsc::Receiver<FetchMessage>,
}

impl App {
    /// Create a new app instance
    pub fn new(config: Config) -> Self {
        let (async_tx, async_rx) = mpsc::channel(32);

        Self {
            running: true,
            config,

            people: Vec::new(),
            refreshing: false,
            next_page: 1,
            fetch_generation: 0,

            list_selection: ListState::default(),
            status_message: None,
            show_help: false,
            total_count: None,
            has_next: false,
            last_updated: None,
            tick_counter: 0,

            async_tx,
            async_rx,
        }
    }

    /// Page shown in the list right now
    pub fn current_page(&self) -> u32 {
        self.next_page.saturating_sub(1).max(1)
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| StarviewError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| StarviewError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| StarviewError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| StarviewError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| StarviewError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| StarviewError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(Duration::from_millis(250));

        // Fetch the first page before the first draw
        self.fetch_page(self.next_page);

        // Main event loop
        while self.running {
            // Draw the UI
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| StarviewError::Terminal(e.to_string()))?;

            // Check for fetch results (non-blocking)
            while let Ok(msg) = self.async_rx.try_recv() {
                self.handle_fetch_message(msg);
            }

            // Handle events
            if let Some(event) = events.next().await {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Resize(_, _) => {
                        // Terminal resize is handled automatically by ratatui
                    }
                    AppEvent::Tick => {
                        self.tick_counter = self.tick_counter.wrapping_add(1);
                    }
                }
            }
        }

        Self::restore_terminal(&mut terminal)?;
        Ok(())
    }

    /// Apply a completion message from a background fetch
    ///
    /// Messages carrying a stale generation belong to a superseded fetch and
    /// are dropped without touching any state.
    fn handle_fetch_message(&mut self, msg: FetchMessage) {
        match msg {
            FetchMessage::PageLoaded {
                generation,
                page,
                payload,
            } => {
                if generation != self.fetch_generation {
                    tracing::debug!(generation, page, "discarding superseded page load");
                    return;
                }

                self.refreshing = false;
                self.total_count = payload.count;
                self.has_next = payload.has_next();
                self.people = payload.results;
                self.next_page = page + 1;
                self.last_updated = Some(Local::now());
                self.list_selection = ListState::new(self.people.len());
                self.status_message = if self.people.is_empty() {
                    Some("No people on this page".to_string())
                } else {
                    Some(format!(
                        "Loaded {} people from page {}",
                        self.people.len(),
                        page
                    ))
                };
            }
            FetchMessage::PageError {
                generation,
                message,
            } => {
                if generation != self.fetch_generation {
                    tracing::debug!(generation, "discarding superseded fetch error");
                    return;
                }

                // Swallowed: the list keeps its previous contents and only
                // the diagnostic log sees the failure.
                tracing::warn!(error = %message, "error fetching people page");
                self.refreshing = false;
            }
        }
    }

    /// Spawn a task to fetch one page of people
    ///
    /// Issuing a new fetch while one is in flight supersedes it: the
    /// generation token advances and the older completion is ignored on
    /// arrival. The HTTP request itself is not cancelled.
    fn fetch_page(&mut self, page: u32) {
        self.refreshing = true;
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        let generation = self.fetch_generation;

        let config = self.config.clone();
        let tx = self.async_tx.clone();

        tokio::spawn(async move {
            let result = async {
                let client = PeopleClient::from_config(&config)?;
                client.fetch_page(page).await
            }
            .await;

            match result {
                Ok(payload) => {
                    let _ = tx
                        .send(FetchMessage::PageLoaded {
                            generation,
                            page,
                            payload,
                        })
                        .await;
                }
                Err(e) => {
                    let _ = tx
                        .send(FetchMessage::PageError {
                            generation,
                            message: e.to_string(),
                        })
                        .await;
                }
            }
        });
    }

    /// Fetch the page after the last loaded one
    pub fn load_next_page(&mut self) {
        self.fetch_page(self.next_page);
    }

    /// Fetch the page currently on screen again
    pub fn reload_current_page(&mut self) {
        self.fetch_page(self.current_page());
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        if is_quit_key(&key) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('j') | KeyCode::Down => self.list_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.list_selection.previous(),
            KeyCode::Char('g') | KeyCode::Home => self.list_selection.first(),
            KeyCode::Char('G') | KeyCode::End => self.list_selection.last(),
            KeyCode::Char('r') => self.reload_current_page(),
            KeyCode::Char('n') | KeyCode::Char(' ') => self.load_next_page(),
            _ => {}
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> Person {
        Person {
            name: "Luke Skywalker".into(),
            gender: "male".into(),
        }
    }

    fn leia() -> Person {
        Person {
            name: "Leia Organa".into(),
            gender: "female".into(),
        }
    }

    fn page_with(results: Vec<Person>) -> PeoplePage {
        PeoplePage {
            results,
            count: Some(82),
            next: Some("https://swapi.dev/api/people?page=2".into()),
        }
    }

    fn loaded(generation: u64, page: u32, results: Vec<Person>) -> FetchMessage {
        FetchMessage::PageLoaded {
            generation,
            page,
            payload: page_with(results),
        }
    }

    #[test]
    fn test_initial_state() {
        let app = App::new(Config::default());
        assert!(app.people.is_empty());
        assert!(!app.refreshing);
        assert_eq!(app.next_page, 1);
        assert_eq!(app.current_page(), 1);
    }

    #[test]
    fn test_first_page_load_applies_results() {
        let mut app = App::new(Config::default());
        app.refreshing = true;
        app.fetch_generation = 1;

        app.handle_fetch_message(loaded(1, 1, vec![luke()]));

        assert_eq!(app.people, vec![luke()]);
        assert_eq!(app.next_page, 2);
        assert_eq!(app.current_page(), 1);
        assert!(!app.refreshing);
        assert_eq!(app.total_count, Some(82));
    }

    #[test]
    fn test_next_page_load_advances_counter() {
        let mut app = App::new(Config::default());
        app.fetch_generation = 1;
        app.handle_fetch_message(loaded(1, 1, vec![luke()]));
        assert_eq!(app.next_page, 2);

        app.fetch_generation = 2;
        app.handle_fetch_message(loaded(2, 2, vec![leia()]));
        assert_eq!(app.next_page, 3);
        assert_eq!(app.current_page(), 2);
    }

    #[test]
    fn test_results_are_replaced_not_appended() {
        let mut app = App::new(Config::default());
        app.fetch_generation = 1;
        app.handle_fetch_message(loaded(1, 1, vec![luke(), leia()]));
        assert_eq!(app.people.len(), 2);

        app.fetch_generation = 2;
        app.handle_fetch_message(loaded(2, 2, vec![leia()]));
        assert_eq!(app.people, vec![leia()]);
    }

    #[test]
    fn test_failed_fetch_preserves_list_and_clears_indicator() {
        let mut app = App::new(Config::default());
        app.fetch_generation = 1;
        app.handle_fetch_message(loaded(1, 1, vec![luke()]));

        app.refreshing = true;
        app.fetch_generation = 2;
        app.handle_fetch_message(FetchMessage::PageError {
            generation: 2,
            message: "connection refused".into(),
        });

        assert_eq!(app.people, vec![luke()]);
        assert_eq!(app.next_page, 2);
        assert!(!app.refreshing);
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let mut app = App::new(Config::default());

        // Two fetches issued; the newer one (generation 2) resolves first
        app.refreshing = true;
        app.fetch_generation = 2;
        app.handle_fetch_message(loaded(2, 2, vec![leia()]));
        assert_eq!(app.people, vec![leia()]);
        assert_eq!(app.next_page, 3);

        // The superseded fetch (generation 1) arrives late: no effect,
        // regardless of arrival order
        app.handle_fetch_message(loaded(1, 1, vec![luke()]));
        assert_eq!(app.people, vec![leia()]);
        assert_eq!(app.next_page, 3);
    }

    #[test]
    fn test_stale_error_does_not_clear_indicator() {
        let mut app = App::new(Config::default());

        // Latest fetch (generation 2) still in flight when the superseded
        // one fails
        app.refreshing = true;
        app.fetch_generation = 2;
        app.handle_fetch_message(FetchMessage::PageError {
            generation: 1,
            message: "timed out".into(),
        });

        assert!(app.refreshing);
    }

    #[test]
    fn test_duplicate_names_are_listed_as_is() {
        let mut app = App::new(Config::default());
        let droid = Person {
            name: "Droid".into(),
            gender: "n/a".into(),
        };

        app.fetch_generation = 1;
        app.handle_fetch_message(loaded(1, 1, vec![droid.clone(), droid.clone()]));

        assert_eq!(app.people.len(), 2);
        assert_eq!(app.list_selection.total, 2);
    }

    #[test]
    fn test_selection_resets_on_load() {
        let mut app = App::new(Config::default());
        app.fetch_generation = 1;
        app.handle_fetch_message(loaded(1, 1, vec![luke(), leia()]));

        app.list_selection.next();
        assert_eq!(app.list_selection.selected, 1);

        app.fetch_generation = 2;
        app.handle_fetch_message(loaded(2, 2, vec![leia()]));
        assert_eq!(app.list_selection.selected, 0);
        assert_eq!(app.list_selection.total, 1);
    }

    #[test]
    fn test_list_selection_wraps() {
        let mut state = ListState::new(3);
        state.previous();
        assert_eq!(state.selected, 2);
        state.next();
        assert_eq!(state.selected, 0);
        state.last();
        assert_eq!(state.selected, 2);
        state.first();
        assert_eq!(state.selected, 0);
    }

    #[tokio::test]
    async fn test_fetch_start_sets_refreshing_and_advances_generation() {
        let mut app = App::new(Config::default());
        assert!(!app.refreshing);

        app.load_next_page();
        assert!(app.refreshing);
        let first = app.fetch_generation;

        // A second refresh while in flight supersedes the first
        app.reload_current_page();
        assert!(app.refreshing);
        assert!(app.fetch_generation > first);
    }
}
