//! TUI rendering and event loop (impure shell).

mod about;
pub mod card;
pub mod constants;
mod detail;
mod form;
mod help;
mod home;
pub mod input_box;
pub mod layout;
mod listing;
pub mod styles;

pub use card::{CardVariant, EventCard};
pub use help::render_help_overlay;
pub use input_box::InputBox;
pub use styles::{ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{InputError, KeyAction, Route};
use crate::source::{resolve_data_file, ReadySignal, Readiness, StoreLoader};
use crate::state::AppState;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Event data could not be located or loaded
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    signal: ReadySignal,
    palette: Palette,
    /// Keeps the loader thread handle alive for the app's lifetime.
    _loader: StoreLoader,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        loader: StoreLoader,
        signal: ReadySignal,
        palette: Palette,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            signal,
            palette,
            _loader: loader,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). The loop wakes at least
    /// every tick interval so the store signal, the fallback attempt, form
    /// submissions and the banner advance without input.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK_INTERVAL: Duration = Duration::from_millis(100);

        self.tick(Instant::now());
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    _ => {}
                }
            }

            self.tick(Instant::now());
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Hand a delivered store (or its failure) to the state.
    fn poll_store(&mut self) {
        match self.signal.poll() {
            Readiness::Ready(store) => self.app_state.on_store_ready(store),
            Readiness::Failed(err) => self.app_state.on_store_failed(&err),
            Readiness::Pending | Readiness::Settled => {}
        }
    }

    fn tick(&mut self, now: Instant) {
        self.poll_store();
        self.app_state.on_tick(now);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let now = Instant::now();

        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Quit requested");
            return true;
        }

        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if self.app_state.handle_input_key(key, now) || self.app_state.handle_form_key(key, now) {
            return false;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => {
                info!("Quit requested");
                true
            }
            Some(action) => {
                self.app_state.apply_action(action, now);
                false
            }
            None => {
                debug!(?key, "Unbound key");
                false
            }
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &self.app_state;
        let palette = &self.palette;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, app_state, palette);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        loader: StoreLoader,
        signal: ReadySignal,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            signal,
            palette: Palette::with_color_config(ColorConfig::new(false)),
            _loader: loader,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Run one loop tick at `now` (test-only accessor)
    pub(crate) fn tick_test(&mut self, now: Instant) {
        self.tick(now);
    }

    /// Render a frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to the terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application.
///
/// Locates the data file, starts the background loader, then runs the event
/// loop on `start`. The terminal is restored even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(
    config: &ResolvedConfig,
    start: Route,
    no_color: bool,
) -> Result<(), TuiError> {
    let data_file = resolve_data_file(config.data_file.clone())?;
    if !data_file.exists() {
        return Err(InputError::FileNotFound { path: data_file }.into());
    }
    info!(path = %data_file.display(), location = %start, "Starting");

    let (loader, signal) = StoreLoader::spawn(data_file, config.load_delay())?;
    let app_state = AppState::new(
        start,
        config.timings(),
        config.default_sort,
        Instant::now(),
    );
    let palette = Palette::with_color_config(ColorConfig::from_env_and_args(no_color));

    let mut app = TuiApp::new(app_state, loader, signal, palette)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
