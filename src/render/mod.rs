pub mod chart;
pub mod colors;
pub mod overlay;
pub mod status_bar;

pub use chart::ChartWidget;
pub use colors::{dim_color, seat_color, SEAT_COLORS};
pub use overlay::{CompletionBanner, CountdownOverlay, HelpOverlay};
pub use status_bar::StatusBar;
