use rand::Rng;

use crate::engine::{Position, PositionSink, SeatId, SeatSnapshot, SeatStore};

use super::seat::Seat;
use super::{SEAT_HEIGHT, SEAT_WIDTH};

/// Horizontal gap between seats in the initial row layout
const ROW_GAP: u16 = 3;

/// Ordered collection of seats. Insertion order is the shuffle order;
/// removal always takes the most recently added seat, mirroring the
/// +/- controls of the chart.
pub struct SeatRegistry {
    seats: Vec<Seat>,
    next_seat_number: usize,
}

impl SeatRegistry {
    pub fn new() -> Self {
        Self {
            seats: Vec::new(),
            next_seat_number: 1,
        }
    }

    /// Build the starting chart: one row of anonymous seats along the top.
    pub fn initial_row(count: usize) -> Self {
        let mut registry = Self::new();
        for i in 0..count {
            let left = 2.0 + i as f32 * (SEAT_WIDTH + ROW_GAP) as f32;
            registry.add_seat(None, Position::new(left, 1.0));
        }
        registry
    }

    pub fn add_seat(&mut self, label: Option<String>, position: Position) -> &Seat {
        let number = self.next_seat_number;
        self.next_seat_number += 1;

        let seat = Seat::new(
            format!("seat-{}", number),
            label.unwrap_or_else(|| format!("Student {}", number)),
            position,
            self.seats.len(),
        );
        self.seats.push(seat);
        self.seats.last().unwrap()
    }

    /// Add a seat at a random spot inside a chart of the given size.
    pub fn add_seat_random<R: Rng>(&mut self, rng: &mut R, width: u16, height: u16) -> &Seat {
        let max_left = width.saturating_sub(SEAT_WIDTH).max(1) as f32;
        let max_top = height.saturating_sub(SEAT_HEIGHT).max(1) as f32;
        let position = Position::new(rng.gen_range(0.0..max_left), rng.gen_range(0.0..max_top));
        self.add_seat(None, position)
    }

    /// Remove the most recently added seat, if any.
    pub fn remove_last(&mut self) -> Option<Seat> {
        self.seats.pop()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Topmost seat whose box covers the given chart-local cell.
    /// Later seats draw on top, so search back to front.
    pub fn seat_at(&self, x: f32, y: f32) -> Option<&Seat> {
        self.seats.iter().rev().find(|seat| {
            x >= seat.position.left
                && x < seat.position.left + SEAT_WIDTH as f32
                && y >= seat.position.top
                && y < seat.position.top + SEAT_HEIGHT as f32
        })
    }

    /// Move a seat's live position during a drag. The default position
    /// is untouched until the drag settles.
    pub fn drag_to(&mut self, id: &SeatId, position: Position) {
        if let Some(seat) = self.seat_mut(id) {
            seat.position = position;
        }
    }

    /// End a drag: the live position becomes the new default.
    pub fn settle(&mut self, id: &SeatId) {
        if let Some(seat) = self.seat_mut(id) {
            seat.default_position = seat.position;
        }
    }

    fn seat_mut(&mut self, id: &SeatId) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| &s.id == id)
    }
}

impl Default for SeatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatStore for SeatRegistry {
    fn snapshot(&self) -> Vec<SeatSnapshot> {
        self.seats
            .iter()
            .map(|seat| SeatSnapshot {
                id: seat.id.clone(),
                current: seat.position,
                default: seat.default_position,
            })
            .collect()
    }
}

impl PositionSink for SeatRegistry {
    fn write_position(&mut self, id: &SeatId, pos: Position) {
        if let Some(seat) = self.seat_mut(id) {
            seat.position = pos;
        }
    }
}
