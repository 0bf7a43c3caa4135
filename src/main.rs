//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and the framebuffer renderer from
//! `memory_pairs::term`. The engine is advanced with the wall-clock time that
//! passed between loop iterations.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use memory_pairs::config::AppConfig;
use memory_pairs::core::{DealRng, GameSnapshot, GameState};
use memory_pairs::input::{handle_key_event, should_quit, InputHandler, Intent};
use memory_pairs::logging;
use memory_pairs::term::{FrameBuffer, GameView, Selection, TerminalRenderer, Viewport};
use memory_pairs::types::{Phase, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let rng = config
        .seed
        .map(DealRng::new)
        .unwrap_or_else(DealRng::from_entropy);
    log::info!("deal seed {}", rng.seed());

    let mut game = GameState::with_rng(rng);
    let mut input = InputHandler::new();

    if let Some(difficulty) = config.difficulty {
        if let Some(action) = input.handle_intent(Intent::Choose(difficulty), Phase::Idle) {
            game.apply_action(action);
        }
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Render.
        if dirty {
            game.snapshot_into(&mut snap);
            let selection = Selection {
                cursor: input.cursor(),
                menu: input.menu_selection(),
            };
            view.render_into(&snap, selection, viewport, &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        if let Some(action) = input.handle_intent(intent, game.phase()) {
                            game.apply_action(action);
                        }
                        dirty = true;
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    game.snapshot_into(&mut snap);
                    let hit = view.hit_test(&snap, viewport, mouse.column, mouse.row);
                    if let Some(action) = hit.and_then(|id| input.handle_click(id, game.phase())) {
                        game.apply_action(action);
                        dirty = true;
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            // Keep the sub-millisecond remainder for the next tick.
            last_tick += Duration::from_millis(elapsed_ms as u64);
            if game.tick(elapsed_ms) {
                dirty = true;
            }
        }
    }
}
