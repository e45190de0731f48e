use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::interval;
use tracing::info;

use crate::game::{GameConfig, GameSession, Phase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Outer loop frame rate. Snake moves are decoupled from it by the
/// session's move timer, which is fed real elapsed time per frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run the frame loop with cleanup
        let result = self.run_frame_loop(&mut terminal).await;

        // Restore terminal
        self.restore_terminal(&mut terminal)?;

        result
    }

    async fn run_frame_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut events = EventStream::new();
        let mut frames = interval(FRAME_INTERVAL);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Advance the simulation and draw
                _ = frames.tick() => {
                    let dt = last_frame.elapsed();
                    last_frame = Instant::now();

                    self.update(dt);
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn update(&mut self, dt: Duration) {
        if let Some(outcome) = self.session.advance(dt) {
            if outcome.collision.is_some() {
                let score = self.session.score.value();
                let new_best = self.metrics.on_game_over(score);
                info!(score, new_best, "game over");
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = self.input_handler.handle_key_event(key);
        self.apply_action(action);
    }

    /// Dispatch a key action against the current phase: Enter only acts
    /// on the menu, R and M only on the game-over screen, steering only
    /// during play. Quit works anywhere.
    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => self.session.steer(direction),
            KeyAction::Start => {
                if self.session.phase() == Phase::MainMenu {
                    self.session.reset();
                    self.metrics.on_game_start();
                }
            }
            KeyAction::Restart => {
                if self.session.phase() == Phase::GameOver {
                    self.session.reset();
                    self.metrics.on_game_start();
                }
            }
            KeyAction::Menu => {
                if self.session.phase() == Phase::GameOver {
                    self.session.return_to_menu();
                }
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn restore_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
