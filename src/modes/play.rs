use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, interval};

use crate::agent::Autopilot;
use crate::game::{Action, ControlMode, Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive play, with control handed back and forth between the
/// keyboard and the autopilot
///
/// Keyboard and autopilot ticks run on independent timers so each can move
/// the snake at its own pace. Only the timer matching the current control
/// mode actually advances the world.
///
/// # Controls
///
/// - Arrow keys / WASD: steer (keyboard control only)
/// - Space: hand control over, restarting the game
/// - P: pause
/// - R: restart
/// - Q / Esc / Ctrl+C: quit
pub struct PlayMode {
    engine: GameEngine<ThreadRng>,
    state: GameState,
    autopilot: Autopilot,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl PlayMode {
    pub fn new(config: GameConfig, start_mode: ControlMode) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset(start_mode);

        Self {
            engine,
            state,
            autopilot: Autopilot::new(),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableFocusChange)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // One move timer per control source
        let mut human_timer = interval(self.engine.config().human_tick());
        let mut agent_timer = interval(self.engine.config().agent_tick());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut human_timer, &mut agent_timer)?;
                    }
                }

                // Keyboard-paced move
                _ = human_timer.tick() => {
                    self.drive(ControlMode::Human);
                }

                // Autopilot-paced move
                _ = agent_timer.tick() => {
                    self.drive(ControlMode::Auto);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
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

    fn handle_event(
        &mut self,
        event: Event,
        human_timer: &mut Interval,
        agent_timer: &mut Interval,
    ) -> Result<()> {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Steer(dir) => {
                        // Steering keys only matter under keyboard control
                        if self.state.mode == ControlMode::Human {
                            self.pending_direction = Some(dir);
                        }
                    }
                    KeyAction::ToggleMode => {
                        self.start_game(self.state.mode.toggled());
                        reset_timers(human_timer, agent_timer);
                    }
                    KeyAction::TogglePause => {
                        self.state.toggle_pause();
                    }
                    KeyAction::Restart => {
                        self.start_game(self.state.mode);
                        reset_timers(human_timer, agent_timer);
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
            }

            // Losing terminal focus pauses a running game
            Event::FocusLost => {
                if self.state.is_playable() {
                    self.state.toggle_pause();
                }
            }

            _ => {}
        }

        Ok(())
    }

    /// Advance the world one move on behalf of `driver`
    ///
    /// Ticks from the source that is not in control are dropped, so both
    /// timers can run freely.
    fn drive(&mut self, driver: ControlMode) {
        if driver != self.state.mode || !self.state.is_playable() {
            return;
        }

        let action = match driver {
            ControlMode::Human => self
                .pending_direction
                .take()
                .map(Action::Move)
                .unwrap_or(Action::Continue),
            ControlMode::Auto => self
                .autopilot
                .next_move(&self.state)
                .map(Action::Move)
                .unwrap_or(Action::Continue),
        };

        let result = self.engine.step(&mut self.state, action);

        if result.terminated {
            self.metrics.on_game_over(self.state.score);
        }
    }

    /// Start a fresh game under the given control mode
    fn start_game(&mut self, mode: ControlMode) {
        self.state = self.engine.reset(mode);
        self.autopilot.reset();
        self.pending_direction = None;
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// A due tick from before a restart or handover must not fire into the
/// fresh game
fn reset_timers(human_timer: &mut Interval, agent_timer: &mut Interval) {
    human_timer.reset();
    agent_timer.reset();
}
