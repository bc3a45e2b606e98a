mod registry;
mod roster;
mod seat;

pub use registry::SeatRegistry;
pub use roster::{load_roster, RosterEntry};
pub use seat::Seat;

/// Footprint of one seat box on the chart, in cells. Shared by layout,
/// hit testing, and rendering so a seat is grabbable anywhere on its box.
pub const SEAT_WIDTH: u16 = 12;
pub const SEAT_HEIGHT: u16 = 3;
