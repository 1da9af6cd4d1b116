//! TUI application state and event handling

use crate::game::{GameSession, SubmitResult};
use crate::wordlists::{RootList, WordListDictionary};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::collections::VecDeque;
use std::io::{self, Stdout};

/// How many recent messages the message panel keeps
const MESSAGE_LIMIT: usize = 5;

/// One line in the message panel
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

/// Visual category of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Running totals across games in one TUI run
#[derive(Debug, Clone, Copy, Default)]
pub struct Statistics {
    pub games_played: usize,
    pub words_found: usize,
    pub best_score: u32,
}

/// State for the interactive game screen
pub struct App {
    session: GameSession,
    dictionary: WordListDictionary,
    roots: RootList,
    pub input_buffer: String,
    pub messages: VecDeque<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(roots: RootList, dictionary: WordListDictionary) -> Self {
        let mut app = Self {
            session: GameSession::start(&roots),
            dictionary,
            roots,
            input_buffer: String::new(),
            messages: VecDeque::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };

        app.push_message(
            "Welcome! Spell words from the root's letters and press Enter.",
            MessageStyle::Info,
        );
        app.push_message("At least 4 letters, real words only, no repeats.", MessageStyle::Info);
        app
    }

    /// The game in progress, for rendering
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    /// Route one key press to the matching action
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q' | 'c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }

    /// Append a typed character; only letters make it into the buffer
    pub fn push_char(&mut self, c: char) {
        if c.is_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the input buffer as a candidate word
    ///
    /// The buffer clears on acceptance and stays put on rejection so the
    /// player can fix a near-miss.
    pub fn submit_input(&mut self) {
        let raw = self.input_buffer.clone();

        match self.session.submit(&raw, &self.dictionary) {
            SubmitResult::Accepted { word, points, score } => {
                self.input_buffer.clear();
                self.stats.words_found += 1;
                self.stats.best_score = self.stats.best_score.max(score);

                let plural = if points == 1 { "point" } else { "points" };
                let text = format!("{} accepted for {points} {plural}!", word.to_uppercase());
                self.push_message(&text, MessageStyle::Success);
            }
            SubmitResult::Rejected(rejection) if !rejection.is_silent() => {
                let text = format!("{}: {}", rejection.title(), rejection.message());
                self.push_message(&text, MessageStyle::Error);
            }
            SubmitResult::Rejected(_) => {}
        }
    }

    /// Start over with a fresh root word
    pub fn new_game(&mut self) {
        self.session.reset(&self.roots);
        self.input_buffer.clear();
        self.messages.clear();
        self.stats.games_played += 1;

        let text = format!("New game! Your root is {}.", self.session.root().to_uppercase());
        self.push_message(&text, MessageStyle::Info);
    }

    pub fn push_message(&mut self, text: &str, style: MessageStyle) {
        if self.messages.len() == MESSAGE_LIMIT {
            self.messages.pop_front();
        }
        self.messages.push_back(Message {
            text: text.to_string(),
            style,
        });
    }
}

/// Run the interactive game until the player quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be prepared or restored, or on an
/// I/O failure while drawing or reading events.
pub fn run_tui(app: App) -> Result<()> {
    let mut terminal = init_terminal()?;
    let outcome = event_loop(&mut terminal, app);
    restore_terminal(&mut terminal)?;
    outcome
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::rendering::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            // Repeat/release events would double keystrokes on Windows
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
