mod animator;
mod countdown;
mod orchestrator;
mod permutation;

pub use animator::{AnimationJob, ShuffleSession};
pub use countdown::Countdown;
pub use orchestrator::{Phase, ShuffleError, ShuffleOrchestrator, Timings};
pub use permutation::shuffle_positions;

/// Unique identifier for a seat
pub type SeatId = String;

/// A 2D position in chart-local coordinates.
///
/// The engine never interprets the unit; the TUI layer happens to use
/// terminal cells, but any pixel-like space works the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub left: f32,
    pub top: f32,
}

impl Position {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Linear interpolation toward another position
    pub fn lerp(&self, target: &Position, t: f32) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position {
            left: self.left + (target.left - self.left) * t,
            top: self.top + (target.top - self.top) * t,
        }
    }

}

impl Default for Position {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A read-only view of one seat as the engine sees it: identity plus the
/// live on-screen coordinate and the last settled default coordinate.
#[derive(Debug, Clone)]
pub struct SeatSnapshot {
    pub id: SeatId,
    pub current: Position,
    pub default: Position,
}

/// Source of seats for a shuffle. Implemented by the seat registry;
/// order is registry order and must be stable across one session.
pub trait SeatStore {
    fn snapshot(&self) -> Vec<SeatSnapshot>;
}

/// Render target for interpolated positions. The engine writes through
/// this once per tick per unfinished seat; it never touches identity or
/// default positions.
pub trait PositionSink {
    fn write_position(&mut self, id: &SeatId, pos: Position);
}
