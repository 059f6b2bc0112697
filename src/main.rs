//! Terminal runner (default binary).
//!
//! Mounts one game session on a tokio runtime, forwards crossterm key presses
//! to it and prints the display board as plain glyphs. Leaving (`r`, `q`,
//! Ctrl-C) unmounts the session and restores the terminal.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, queue, style, terminal};
use tokio::runtime::Runtime;

use wesm_tetris::core::GameSnapshot;
use wesm_tetris::engine::{EngineConfig, Session};
use wesm_tetris::input::should_leave;
use wesm_tetris::types::PIECE_BOX;

/// Input poll timeout; also bounds how late a gravity step is shown
const FRAME_MS: u64 = 16;

struct Terminal {
    out: Stdout,
}

impl Terminal {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        queue!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        out.flush()?;
        Ok(Self { out })
    }

    fn exit(&mut self) -> Result<()> {
        queue!(
            self.out,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in frame_lines(snapshot).iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, row as u16),
                style::Print(line)
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn frame_lines(snapshot: &GameSnapshot) -> Vec<String> {
    let mut side: Vec<String> = vec![
        format!("Score  {}", snapshot.score),
        format!("Lines  {}", snapshot.lines),
        format!("Level  {}", snapshot.level),
        String::new(),
        "Next".to_string(),
    ];
    for row in snapshot.next_shape.iter().take(PIECE_BOX) {
        let glyph = snapshot.next.as_char();
        side.push(row.iter().map(|&c| if c { glyph } else { ' ' }).collect());
    }
    side.push(String::new());
    if snapshot.game_over {
        side.push("GAME OVER".to_string());
        side.push("Enter: play again".to_string());
    } else if snapshot.paused {
        side.push("PAUSED".to_string());
    }
    side.push(String::new());
    side.push("arrows move/rotate".to_string());
    side.push("space drop  p pause".to_string());
    side.push("r/q leave".to_string());

    snapshot
        .display_board
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let cells: String = row
                .iter()
                .map(|cell| cell.map(|kind| kind.as_char()).unwrap_or('.'))
                .collect();
            match side.get(y) {
                Some(extra) if !extra.is_empty() => format!("|{}|  {}", cells, extra),
                _ => format!("|{}|", cells),
            }
        })
        .chain(std::iter::once(format!("+{}+", "-".repeat(row_width(snapshot)))))
        .collect()
}

fn row_width(snapshot: &GameSnapshot) -> usize {
    snapshot.display_board.first().map_or(0, |row| row.len())
}

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    let rt = Runtime::new()?;

    let mut term = Terminal::enter()?;
    let result = run(&mut term, &rt, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let (seed, last) = result?;
    eprintln!(
        "[Host] seed={} score={} lines={} level={} episodes={}",
        seed,
        last.score,
        last.lines,
        last.level,
        last.episode_id + 1
    );
    Ok(())
}

fn run(term: &mut Terminal, rt: &Runtime, config: EngineConfig) -> Result<(u32, GameSnapshot)> {
    let mut session = {
        let _guard = rt.enter();
        Session::mount(config)
    };
    let seed = session.seed();

    let mut shown = session.snapshot();
    term.draw(&shown)?;

    loop {
        if event::poll(Duration::from_millis(FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_leave(key) {
                        break;
                    }
                    session.handle_key(key);
                }
            }
        }

        let snapshot = session.snapshot();
        if snapshot != shown {
            shown = snapshot;
            term.draw(&shown)?;
        }
    }

    let last = rt.block_on(session.unmount())?;
    Ok((seed, last))
}
