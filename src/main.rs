//! Terminal memory game runner (default binary).
//!
//! Interactive play uses crossterm for keyboard and mouse input and the
//! framebuffer renderer from `tui-memory-term`. With `--script` the same engine
//! runs headless and prints JSON snapshots to stdout.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io::{self, Read};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::{debug, info, warn};

use tui_memory::config::Config;
use tui_memory::core::{GameSnapshot, GameState};
use tui_memory::input::{handle_key_event, should_quit, InputHandler, Intent};
use tui_memory::logging::{self, LogTarget};
use tui_memory::script::{parse_script, run_script};
use tui_memory::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_memory::types::TICK_MS;

/// Redraw at least this often so the frame recovers from terminal glitches.
const HEARTBEAT_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = Config::parse();

    if let Some(path) = config.script.as_deref() {
        return run_headless(&config, path);
    }

    let _logger = logging::init(&config.log_level, LogTarget::File(config.log_dir_or_default()))?;
    let game_config = config.game_config();
    info!(
        "starting interactive game: level {} seed {}",
        game_config.level, game_config.seed
    );
    let mut game = GameState::new(game_config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let restored = term.exit();
    finish(result, restored)
}

/// Combine the game loop result with the terminal restore result.
///
/// A loop error wins; a restore failure is logged either way and becomes the
/// exit error when the loop itself ended cleanly.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &restored {
        warn!("failed to restore terminal: {err:#}");
    }
    match result {
        Err(err) => {
            warn!("game loop failed: {err:#}");
            Err(err)
        }
        Ok(()) => restored.context("failed to restore terminal"),
    }
}

fn run_headless(config: &Config, path: &Path) -> Result<()> {
    let _logger = logging::init(&config.log_level, LogTarget::Stderr)?;

    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read script from stdin")?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?
    };

    let steps = parse_script(&text)?;
    let mut game = GameState::new(config.game_config())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&mut game, &steps, &mut out)
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new(game.level());
    let mut throttle = RenderThrottle::new(HEARTBEAT_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        let fingerprint = frame_fingerprint(&snap, input.cursor(), viewport);
        if throttle.should_render(started.elapsed().as_millis() as u64, fingerprint) {
            view.render_into(&snap, Some(input.cursor()), viewport, &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key).and_then(|c| input.handle(c)) {
                        apply_intent(game, &mut input, intent);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let hit = view.hit_test(game.level(), viewport, mouse.column, mouse.row);
                    if let Some(intent) = hit.and_then(|position| input.point_at(position)) {
                        apply_intent(game, &mut input, intent);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        // Tick with the measured elapsed time so the countdown tracks the wall clock.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            last_tick += Duration::from_millis(elapsed_ms as u64);
            game.tick(elapsed_ms);
        }
    }
}

fn apply_intent(game: &mut GameState, input: &mut InputHandler, intent: Intent) {
    match intent {
        Intent::Game(action) => {
            if !game.apply_action(action) {
                debug!("{} ignored", action.as_str());
            }
        }
        Intent::ChangeLevel(level) => match game.set_level(level) {
            Ok(()) => {
                info!("dealt a {level}x{level} board");
                input.set_level(game.level());
            }
            Err(err) => warn!("level change to {level} rejected: {err}"),
        },
    }
}

fn frame_fingerprint(snap: &GameSnapshot, cursor: usize, viewport: Viewport) -> u64 {
    let mut hasher = DefaultHasher::new();
    snap.fingerprint().hash(&mut hasher);
    cursor.hash(&mut hasher);
    viewport.hash(&mut hasher);
    hasher.finish()
}
