//! Calculator CLI - a four-function calculator keypad in the terminal.
//!
//! Usage:
//!   calc [--layout FILE] [--keys KEYS] [--trace]
//!
//! Examples:
//!   calc                          # Interactive keypad
//!   calc --keys "3+4+5="          # Press keys, print the display (12)
//!   calc --keys "5+3=="           # Repeated equals (11)
//!   calc --layout compact.json    # Interactive with a custom keypad

use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, disable_raw_mode, enable_raw_mode, ClearType},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_core::{load_layout_from_path, CalcPanel, Key, KeypadLayout, Session};

/// Width of a single keypad cell in characters.
const CELL_WIDTH: usize = 5;
/// Spaces between keypad cells.
const CELL_GAP: usize = 1;

/// Four-function calculator
#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(about = "Four-function pocket calculator")]
struct Args {
    /// Keys to press instead of running interactively (e.g. "12+3=")
    #[arg(short, long)]
    keys: Option<String>,

    /// Keypad layout JSON file for the interactive keypad
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Enable engine tracing
    #[arg(short, long)]
    trace: bool,
}

/// Batch mode panel: only notices are shown, on stderr.
struct BatchPanel;

impl CalcPanel for BatchPanel {
    fn render(&mut self, _display: &str) {}

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Terminal panel that redraws the display and keypad in place.
struct TerminalPanel {
    keypad: Vec<String>,
    /// Shown on the next render only
    notice: Option<String>,
}

impl TerminalPanel {
    fn new(layout: &KeypadLayout) -> Self {
        Self {
            keypad: layout.render_rows(CELL_WIDTH, CELL_GAP),
            notice: None,
        }
    }

    fn screen(&self, display: &str) -> Vec<String> {
        let keypad_width = self.keypad.iter().map(String::len).max().unwrap_or(0);
        let inner = keypad_width.saturating_sub(2).max(display.len() + 2);
        let border = format!("+{}+", "-".repeat(inner));

        let mut lines = vec![
            border.clone(),
            format!("|{:>w$} |", display, w = inner - 1),
            border,
        ];
        lines.extend(self.keypad.iter().cloned());
        lines.push(String::new());
        lines.push(self.notice.clone().unwrap_or_default());
        lines.push("Esc/Del: clear   Enter: equals   q: quit".to_string());
        lines
    }
}

impl CalcPanel for TerminalPanel {
    fn render(&mut self, display: &str) {
        let mut stdout = std::io::stdout();
        let _ = queue!(stdout, terminal::Clear(ClearType::All));
        for (row, line) in self.screen(display).iter().enumerate() {
            let _ = queue!(stdout, cursor::MoveTo(0, row as u16), Print(line));
        }
        let _ = stdout.flush();
        self.notice = None;
    }

    fn notify(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

/// What a terminal key press means to the calculator.
enum Input {
    Key(Key),
    Quit,
}

/// Translate crossterm key events to calculator keys.
fn translate_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Input> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Input::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Quit),
        KeyCode::Char(c) => Key::from_char(c).map(Input::Key),
        KeyCode::Enter => Some(Input::Key(Key::Equals)),
        KeyCode::Esc | KeyCode::Delete => Some(Input::Key(Key::Clear)),
        _ => None,
    }
}

fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("calc_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_interactive(layout: KeypadLayout) -> Result<(), Box<dyn std::error::Error>> {
    // Keys flow from the terminal reader to the session, one at a time
    let (key_tx, key_rx) = mpsc::channel::<Key>();

    // Enable raw mode (gracefully handle non-TTY)
    let raw_mode_enabled = enable_raw_mode().is_ok();
    let _ = execute!(std::io::stdout(), cursor::Hide);

    let panel = TerminalPanel::new(&layout);

    // Session runs in a blocking task and ends when the key channel closes
    let session_handle = tokio::task::spawn_blocking(move || {
        let mut session = Session::new(panel);
        while let Ok(key) = key_rx.recv() {
            let _ = session.press(key);
        }
        session.display().to_string()
    });

    // Terminal input reader
    let input_handle = tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    break;
                }
                _ = tokio::time::sleep(Duration::from_millis(10)) => {
                    if !event::poll(Duration::from_millis(0)).unwrap_or(false) {
                        continue;
                    }
                    let Ok(Event::Key(key_event)) = event::read() else {
                        continue;
                    };
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    match translate_key(key_event.code, key_event.modifiers) {
                        Some(Input::Quit) => break,
                        Some(Input::Key(key)) => {
                            if key_tx.send(key).is_err() {
                                break; // Session gone
                            }
                        }
                        None => {}
                    }
                }
            }
        }
        // key_tx dropped here, which stops the session
    });

    let _ = input_handle.await;
    let display = session_handle.await?;

    // Disable raw mode if we enabled it
    if raw_mode_enabled {
        let _ = disable_raw_mode();
    }
    let _ = execute!(
        std::io::stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    );

    println!("{}", display);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.trace);

    if let Some(keys) = &args.keys {
        let mut session = Session::new(BatchPanel);
        let failures = session.run_keys(keys).map_err(|e| {
            eprintln!("Invalid key sequence: {}", e);
            e
        })?;
        if failures > 0 {
            debug!(failures, "key sequence finished with errors");
        }
        println!("{}", session.display());
        return Ok(());
    }

    let layout = match &args.layout {
        Some(path) => load_layout_from_path(path).map_err(|e| {
            eprintln!("Failed to load {}: {}", path.display(), e);
            e
        })?,
        None => KeypadLayout::standard(),
    };

    run_interactive(layout).await
}
