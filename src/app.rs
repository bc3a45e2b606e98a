use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};

use crate::chart::{load_roster, SeatRegistry, SEAT_WIDTH};
use crate::config::{ChartConfig, ConfigError};
use crate::engine::{Position, SeatId, ShuffleOrchestrator};
use crate::input::{InputEvent, InputHandler};
use crate::render::{ChartWidget, CompletionBanner, CountdownOverlay, HelpOverlay, StatusBar};

/// Target frame rate
const TARGET_FPS: u32 = 30;

/// Frame duration for target FPS
const FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS as u64);

/// Frame pacing for the render loop, and the source of the engine's
/// millisecond clock.
struct FrameClock {
    started_at: Instant,
    last_frame: Instant,
    fps_sample_start: Instant,
    fps_sample_count: u32,
    current_fps: u32,
}

impl FrameClock {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            started_at: now,
            last_frame: now,
            fps_sample_start: now,
            fps_sample_count: 0,
            current_fps: TARGET_FPS,
        }
    }

    /// Milliseconds since the app started; the engine's whole notion of time.
    fn now_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= FRAME_DURATION
    }

    fn frame_rendered(&mut self) {
        self.last_frame = Instant::now();
        self.fps_sample_count += 1;

        if self.fps_sample_start.elapsed() >= Duration::from_secs(1) {
            self.current_fps = self.fps_sample_count;
            self.fps_sample_count = 0;
            self.fps_sample_start = Instant::now();
        }
    }

    fn fps(&self) -> u32 {
        self.current_fps
    }

    fn time_until_next_frame(&self) -> Duration {
        let elapsed = self.last_frame.elapsed();
        if elapsed >= FRAME_DURATION {
            Duration::ZERO
        } else {
            FRAME_DURATION - elapsed
        }
    }
}

/// An in-flight seat drag: which seat, and where inside its box the
/// grab happened, so the seat doesn't jump under the cursor.
struct DragState {
    seat: SeatId,
    grab_dx: f32,
    grab_dy: f32,
}

/// Main application state
pub struct App {
    registry: SeatRegistry,
    orchestrator: ShuffleOrchestrator,
    frame_clock: FrameClock,
    input_handler: InputHandler,
    placement_rng: StdRng,

    show_help: bool,
    drag: Option<DragState>,

    // Last known chart area for mouse hit detection
    last_chart_area: Option<Rect>,

    running: bool,
}

impl App {
    pub fn new(config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let registry = Self::build_registry(&config)?;
        let orchestrator = ShuffleOrchestrator::new(config.timings(), config.seed);
        let placement_rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            registry,
            orchestrator,
            frame_clock: FrameClock::new(),
            input_handler: InputHandler::new(),
            placement_rng,
            show_help: false,
            drag: None,
            last_chart_area: None,
            running: true,
        })
    }

    /// Build the starting chart from the roster file, or a plain row of
    /// anonymous seats.
    fn build_registry(config: &ChartConfig) -> Result<SeatRegistry, ConfigError> {
        let Some(ref path) = config.roster else {
            return Ok(SeatRegistry::initial_row(config.seats));
        };

        let entries = load_roster(path)?;
        let mut registry = SeatRegistry::new();
        let mut row_slot = 0u16;
        for entry in entries {
            let position = match entry.coordinates() {
                Some((left, top)) => Position::new(left, top),
                None => {
                    let left = 2.0 + row_slot as f32 * (SEAT_WIDTH + 3) as f32;
                    row_slot += 1;
                    Position::new(left, 1.0)
                }
            };
            registry.add_seat(Some(entry.name), position);
        }
        Ok(registry)
    }

    /// Run the application
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        while self.running {
            self.handle_input();

            if self.frame_clock.should_render() {
                let now_ms = self.frame_clock.now_ms();
                self.orchestrator.tick(now_ms, &mut self.registry);

                terminal.draw(|frame| {
                    let area = frame.area();
                    let chart_area =
                        Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
                    self.last_chart_area = Some(chart_area);
                    self.render(area, frame.buffer_mut());
                })?;

                self.frame_clock.frame_rendered();
            }

            // Small sleep to prevent busy loop
            tokio::time::sleep(self.frame_clock.time_until_next_frame()).await;
        }

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Handle user input. Drains the queue so drags stay smooth at low
    /// frame rates.
    fn handle_input(&mut self) {
        let mut timeout = Duration::from_millis(1);

        for _ in 0..64 {
            let Some(event) = self.input_handler.poll(timeout) else {
                break;
            };
            timeout = Duration::ZERO;

            match event {
                InputEvent::Quit => self.running = false,

                InputEvent::ToggleHelp => {
                    self.show_help = !self.show_help;
                    self.input_handler.set_help_visible(self.show_help);
                }

                InputEvent::CloseHelp => {
                    self.show_help = false;
                    self.input_handler.set_help_visible(false);
                }

                InputEvent::AddSeat => {
                    if self.orchestrator.trigger_enabled() {
                        if let Some(area) = self.last_chart_area {
                            let width = area.width.saturating_sub(2);
                            let height = area.height.saturating_sub(2);
                            self.registry
                                .add_seat_random(&mut self.placement_rng, width, height);
                        }
                    }
                }

                InputEvent::RemoveSeat => {
                    if self.orchestrator.trigger_enabled() && !self.registry.is_empty() {
                        self.registry.remove_last();
                    }
                }

                InputEvent::Shuffle => {
                    // A keyboard shuffle mid-drag settles the drag first.
                    self.finish_drag();
                    let now_ms = self.frame_clock.now_ms();
                    // Rejected while a cycle is in flight; nothing to do then.
                    let _ = self.orchestrator.start(now_ms);
                }

                InputEvent::MouseDown { x, y } => self.begin_drag(x, y),

                InputEvent::MouseDrag { x, y } => self.drag_to(x, y),

                InputEvent::MouseUp { .. } => self.finish_drag(),

                InputEvent::Resize { .. } => {
                    // The chart area is recomputed on the next draw.
                }

                InputEvent::None => {}
            }
        }
    }

    /// Screen cell to chart-local coordinate, if inside the chart.
    fn chart_local(&self, x: u16, y: u16) -> Option<(f32, f32)> {
        let area = self.last_chart_area?;
        if x <= area.x || x >= area.x + area.width - 1 {
            return None;
        }
        if y <= area.y || y >= area.y + area.height - 1 {
            return None;
        }
        Some(((x - area.x - 1) as f32, (y - area.y - 1) as f32))
    }

    fn begin_drag(&mut self, x: u16, y: u16) {
        // Seats are pinned while a shuffle cycle is in flight.
        if !self.orchestrator.trigger_enabled() {
            return;
        }
        let Some((cx, cy)) = self.chart_local(x, y) else {
            return;
        };
        if let Some(seat) = self.registry.seat_at(cx, cy) {
            self.drag = Some(DragState {
                seat: seat.id.clone(),
                grab_dx: cx - seat.position.left,
                grab_dy: cy - seat.position.top,
            });
        }
    }

    fn drag_to(&mut self, x: u16, y: u16) {
        let Some(ref drag) = self.drag else {
            return;
        };
        let Some((cx, cy)) = self.chart_local(x, y) else {
            return;
        };
        let position = Position::new(
            (cx - drag.grab_dx).max(0.0),
            (cy - drag.grab_dy).max(0.0),
        );
        let id = drag.seat.clone();
        self.registry.drag_to(&id, position);
    }

    /// End any active drag, settling the seat's default position.
    fn finish_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.registry.settle(&drag.seat);
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let chart_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
        let status_area = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(1),
            area.width,
            1,
        );

        ChartWidget::new(self.registry.seats())
            .dragging(self.drag.as_ref().map(|d| &d.seat))
            .animating(self.orchestrator.phase() == crate::engine::Phase::Animating)
            .render(chart_area, buf);

        StatusBar::new(self.registry.len(), self.orchestrator.phase())
            .fps(self.frame_clock.fps())
            .render(status_area, buf);

        if let Some(value) = self.orchestrator.countdown_value() {
            CountdownOverlay::new(value).render(chart_area, buf);
        }

        if self.orchestrator.banner_visible() {
            CompletionBanner.render(chart_area, buf);
        }

        if self.show_help {
            HelpOverlay.render(chart_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_validates_config() {
        let config = ChartConfig {
            shuffle_duration_ms: 0,
            ..ChartConfig::default()
        };
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_app_starts_with_configured_row() {
        let config = ChartConfig {
            seats: 4,
            seed: Some(1),
            ..ChartConfig::default()
        };
        let app = App::new(config).unwrap();
        assert_eq!(app.registry.len(), 4);
    }

    #[test]
    fn test_render_full_frame_does_not_panic() {
        let config = ChartConfig {
            seed: Some(1),
            ..ChartConfig::default()
        };
        let app = App::new(config).unwrap();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
    }
}
