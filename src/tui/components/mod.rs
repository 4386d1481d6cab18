mod list_view;
mod slider_track;
mod status_bar;

pub use list_view::ListView;
pub use slider_track::{SliderTrack, thumb_span};
pub use status_bar::StatusBar;
