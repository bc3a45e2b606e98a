use crate::engine::{Position, SeatId};

/// One assignable spot on the chart.
///
/// `position` is the live rendered coordinate; `default_position` is the
/// last settled one (updated when a drag ends, read as the shuffle's
/// source of truth). Identity never changes after creation.
#[derive(Debug, Clone)]
pub struct Seat {
    pub id: SeatId,
    pub label: String,
    pub position: Position,
    pub default_position: Position,

    /// Index into the seat color palette, assigned at creation
    pub color_index: usize,
}

impl Seat {
    pub fn new(id: SeatId, label: String, position: Position, color_index: usize) -> Self {
        Self {
            id,
            label,
            position,
            default_position: position,
            color_index,
        }
    }

    /// Label trimmed to fit inside a seat box.
    pub fn short_label(&self, max_width: usize) -> String {
        if self.label.chars().count() <= max_width {
            self.label.clone()
        } else {
            let truncated: String = self.label.chars().take(max_width.saturating_sub(1)).collect();
            format!("{}…", truncated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seat_default_matches_position() {
        let seat = Seat::new(
            "seat-1".to_string(),
            "Student 1".to_string(),
            Position::new(2.0, 1.0),
            0,
        );
        assert_eq!(seat.default_position, seat.position);
    }

    #[test]
    fn test_short_label_truncates() {
        let seat = Seat::new(
            "seat-1".to_string(),
            "A very long student name".to_string(),
            Position::default(),
            0,
        );
        assert_eq!(seat.short_label(10), "A very lo…");
        assert_eq!(seat.short_label(30), "A very long student name");
    }
}
