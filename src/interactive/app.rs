//! TUI application state and logic

use crate::config::ResolvedConfig;
use crate::core::{Game, Key, KeyCap, KeyStatuses, Statistics, SubmitError, keyboard_layout};
use crate::hints::{
    HintChannel, HintPayload, HintResponse, WordInfo, opening_hint, provider_from_config,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the event loop waits for input before ticking
const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub game: Game,
    pub config: ResolvedConfig,
    pub layout: Vec<Vec<KeyCap>>,
    pub hints: HintChannel,
    pub hint: Option<String>,
    pub requesting_hint: bool,
    pub word_info: Option<WordInfo>,
    pub message_shown_at: Option<Instant>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    /// Build the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the configured target does not fit the board.
    pub fn new(config: ResolvedConfig) -> Result<Self> {
        let game =
            Game::new(config.rules, config.target.clone())?.with_win_message(&config.win_message);
        let provider = provider_from_config(&config);
        let hint = opening_hint(&config, provider.as_ref(), game.state().target());
        let hints = HintChannel::new(provider, config.fallback_hint.clone());
        let layout = keyboard_layout(&config.keyboard);

        Ok(Self {
            game,
            config,
            layout,
            hints,
            hint,
            requesting_hint: false,
            word_info: None,
            message_shown_at: None,
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Restart the board; replies to requests from the previous game are ignored
    pub fn new_game(&mut self) {
        self.game.restart();
        self.hints.next_generation();
        self.hint = opening_hint(
            &self.config,
            self.hints.provider(),
            self.game.state().target(),
        );
        self.requesting_hint = false;
        self.word_info = None;
        self.message_shown_at = None;
    }

    /// Keyboard colouring for the current board
    #[must_use]
    pub fn key_statuses(&self) -> KeyStatuses {
        self.game.key_statuses()
    }

    /// Route a terminal key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.new_game();
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.game.status().is_over() {
            match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                // Board is frozen; ignore other keys
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace | KeyCode::Delete => self.press(Key::Delete),
            KeyCode::Tab => self.request_hint(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.press(Key::Char(c));
            }
            _ => {}
        }
    }

    /// Apply a game key, as typed or clicked on the on-screen keyboard
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Enter => self.submit(),
            Key::Char(_) | Key::Delete => {
                self.game.edit_input(key);
            }
        }
    }

    fn submit(&mut self) {
        match self.game.submit_guess() {
            Ok(outcome) => {
                self.message_shown_at = None;
                if outcome.status.is_over() {
                    self.stats.record(self.game.state());
                    let target = self.game.state().target().clone();
                    self.hints.request_word_info(&target);
                }
            }
            Err(SubmitError::NotEnoughLetters { .. }) => {
                self.message_shown_at = Some(Instant::now());
            }
            Err(e) => debug!("Submission ignored: {e}"),
        }
    }

    /// Ask the provider for a fresh hint unless one is already on its way
    pub fn request_hint(&mut self) {
        if self.requesting_hint || self.game.status().is_over() || !self.config.hints_enabled {
            return;
        }
        self.requesting_hint = true;
        let target = self.game.state().target().clone();
        self.hints.request_hint(&target, self.game.guesses());
    }

    /// Periodic housekeeping: expire transient messages and collect hint responses
    pub fn tick(&mut self, now: Instant) {
        if let Some(shown_at) = self.message_shown_at
            && now.duration_since(shown_at) >= self.config.message_duration
        {
            self.game.clear_transient_message();
            self.message_shown_at = None;
        }

        while let Some(response) = self.hints.try_next() {
            self.accept_response(response);
        }
    }

    /// Apply a hint response if it still belongs to the current game
    pub fn accept_response(&mut self, response: HintResponse) {
        let target = self.game.state().target();
        if !response.is_current(target, self.hints.generation()) {
            debug!(
                "Discarding response for {} from generation {}",
                response.target, response.generation
            );
            return;
        }
        match response.payload {
            HintPayload::Hint(hint) => {
                self.requesting_hint = false;
                self.hint = Some(hint);
            }
            HintPayload::WordInfo(info) => self.word_info = Some(info),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    info!("TUI started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    info!(
        "TUI closed after {} games ({} won)",
        app.stats.played, app.stats.won
    );
    Ok(())
}
