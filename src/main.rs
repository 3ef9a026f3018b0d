//! Terminal Lights Out runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `lights_out::term`. The loop handles one event to completion before
//! reading the next, so toggles never interleave.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::{info, warn};

use lights_out::config::Cli;
use lights_out::core::{GameSnapshot, GameState};
use lights_out::input::{handle_key_event, should_quit, Cursor};
use lights_out::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use lights_out::types::{GameAction, GameConfig};

fn main() -> Result<()> {
    env_logger::init();

    let (config, seed) = Cli::parse().into_config()?;
    info!(
        "new {}x{} game, chance {}, seed {seed}",
        config.rows, config.cols, config.lit_probability
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {err}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u32) -> Result<()> {
    let mut game = GameState::new(config, seed);
    let mut cursor = Cursor::new(config.rows, config.cols);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&snap, Some(cursor.position()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Block until the next event; nothing changes without input.
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => view
                .hit_test(&snap, viewport, column, row)
                .map(GameAction::Toggle),
            Event::Resize(..) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        let Some(action) = action.and_then(|a| cursor.resolve(a)) else {
            continue;
        };

        if let Err(err) = game.apply_action(action) {
            warn!("ignored {}: {err}", action.as_str());
        }
    }
}
