//! TUI rendering and terminal management (impure shell)

mod filter_form;
mod layout;
mod loader;
mod pagination;
mod styles;
#[cfg(test)]
mod test_support;
mod vehicle_list;

pub use filter_form::FilterForm;
pub use layout::AppLayout;
pub use loader::LoadingIndicator;
pub use pagination::PaginationBar;
pub use styles::{ColorConfig, ListingStyles};
pub use vehicle_list::VehicleTable;

use crate::config::ResolvedConfig;
use crate::model::FilterCriteria;
use crate::source::{FetchHandle, SearchRequest, SearchSource};
use crate::state::{AppState, FetchState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    Activate,
    NextPage,
    PrevPage,
}

/// Translate a key event into its action, if it has one.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::NextField),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::PrevField),
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyAction::Activate),
        KeyCode::Right | KeyCode::Char('n') => Some(KeyAction::NextPage),
        KeyCode::Left | KeyCode::Char('p') => Some(KeyAction::PrevPage),
        _ => None,
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    /// Handle to the in-flight search; dropped once the outcome arrives.
    fetch: Option<FetchHandle>,
    /// Timer tick counter driving the loading spinner.
    tick: u64,
    styles: ListingStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen and issues
    /// the session's one search request.
    pub fn new(
        source: SearchSource,
        config: &ResolvedConfig,
        criteria: FilterCriteria,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let request = SearchRequest::new(&criteria, &config.search_area);
        info!("issuing search request");
        let fetch = FetchHandle::spawn(source, request);

        Ok(Self {
            terminal,
            state: AppState::new(criteria, config.items_per_page),
            fetch: Some(fetch),
            tick: 0,
            styles: ListingStyles::new(colors),
        })
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits. Event-driven: redraws on user input and
    /// on timer ticks while the fetch is pending or the spinner animates.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Timer interval for spinner animation and fetch polling.
        const TICK_INTERVAL: Duration = Duration::from_millis(120);

        // Initial render so the screen has content immediately.
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            } else {
                // Timer elapsed - poll the fetch and animate the spinner.
                self.tick = self.tick.wrapping_add(1);
                let mut dirty = self.state.is_loading();

                if let Some(handle) = &self.fetch {
                    if let Some(outcome) = handle.poll() {
                        self.state.finish_fetch(outcome);
                        self.fetch = None;
                        dirty = true;
                    }
                }

                if dirty {
                    self.draw()?;
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit. Page intents are clamped here to
    /// `1..=total_pages` - the paginator itself never validates.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, regardless of the key map.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let action = match map_key(key) {
            Some(action) => action,
            None => return false,
        };
        debug!(?action, "key action");

        match action {
            KeyAction::Quit => return true,
            KeyAction::NextField => self.state.form.select_next(),
            KeyAction::PrevField => self.state.form.select_prev(),
            KeyAction::Activate => {
                let edit = self.state.form.activate(self.state.criteria());
                self.state.apply_edit(edit);
            }
            KeyAction::NextPage => {
                let total_pages = self.state.page_metadata().total_pages;
                let next = self.state.current_page().saturating_add(1);
                if next <= total_pages {
                    self.state.set_page(next);
                }
            }
            KeyAction::PrevPage => {
                let current = self.state.current_page();
                if current > 1 {
                    self.state.set_page(current - 1);
                }
            }
        }

        false
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &mut self.state;
        let tick = self.tick;
        let styles = self.styles;
        self.terminal
            .draw(|frame| render_app(frame, state, tick, styles))?;
        Ok(())
    }
}

/// Render one frame of the listing screen.
///
/// Takes the controller mutably because the derived accessors refresh their
/// memo in place; rendering never changes what the user sees.
pub fn render_app(frame: &mut Frame, state: &mut AppState, tick: u64, styles: ListingStyles) {
    let regions = layout::compute(frame.area());

    FilterForm::new(state.criteria(), state.form.selected, styles).render(frame, regions.form);

    let failure = match state.fetch_state() {
        FetchState::Failed(message) => Some(message.clone()),
        _ => None,
    };

    if state.is_loading() {
        LoadingIndicator::new(tick, styles).render(frame, regions.main);
    } else if let Some(message) = failure {
        let banner = Paragraph::new(vec![
            Line::from(Span::styled("The vehicle search failed.", styles.error())),
            Line::from(Span::raw(message)),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Vehicles"));
        frame.render_widget(banner, regions.main);
    } else {
        VehicleTable::new(state.page_vehicles(), styles).render(frame, regions.main);
    }

    let metadata = state.page_metadata();
    PaginationBar::new(state.current_page(), metadata, styles).render(frame, regions.pagination);

    let hints = Paragraph::new(Span::styled(
        "tab/↓/↑ select · space toggle · ←/→ page · q quit",
        styles.dim(),
    ));
    frame.render_widget(hints, regions.footer);
}

/// Set up the terminal, run the app, and restore the terminal afterwards,
/// also on the error path.
pub fn run_with_source(
    source: SearchSource,
    config: &ResolvedConfig,
    criteria: FilterCriteria,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(source, config, criteria, colors) {
        Ok(app) => app,
        Err(error) => {
            let _ = restore_terminal();
            return Err(error);
        }
    };

    let result = app.run();
    restore_terminal()?;
    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
