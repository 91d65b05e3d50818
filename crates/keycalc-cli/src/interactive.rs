//! Interactive terminal calculator

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use keycalc::{ExpressionMachine, Screen};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::keymap::{KeyAction, KeyMapper};
use crate::output::{Renderer, DISPLAY_WIDTH};

const HELP: [&str; 3] = [
    "0-9 .  + - * /  Enter =",
    "Bksp Del  Delete CE  Esc C",
    "s c t l q e  fn   Ctrl+C quit",
];

/// Runs the calculator until the user quits
pub fn run_interactive(config: &CliConfig) -> CliResult<()> {
    info!("starting interactive session");
    let renderer = Renderer::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(&mut stdout, &renderer);
    let restored = restore_terminal(&mut stdout);

    info!("interactive session ended");
    result?;
    restored?;
    Ok(())
}

/// Leaves raw mode, then the alternate screen
///
/// Raw mode is disabled even when writing the escape sequences fails.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, Show, LeaveAlternateScreen)?;
    raw
}

fn event_loop<W: Write>(out: &mut W, renderer: &Renderer) -> CliResult<()> {
    let mut machine = ExpressionMachine::new();
    let mapper = KeyMapper::new();

    draw(out, renderer, &machine.screen())?;
    loop {
        if let Event::Key(key) = event::read()? {
            match mapper.handle_key(key) {
                KeyAction::Quit => break,
                KeyAction::Press(token) => {
                    let screen = machine.handle(token);
                    draw(out, renderer, &screen)?;
                }
                KeyAction::None => debug!(code = ?key.code, "ignored key"),
            }
        }
    }
    Ok(())
}

/// Draws the display rows followed by the key help
pub fn draw<W: Write>(out: &mut W, renderer: &Renderer, screen: &Screen) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    let rows = renderer.display_rows(screen, DISPLAY_WIDTH);
    let lines = rows.iter().map(String::as_str).chain([""]).chain(HELP);
    for (row, line) in (0u16..).zip(lines) {
        queue!(out, MoveTo(0, row), Print(line))?;
    }
    out.flush()
}
