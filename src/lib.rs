pub mod cli;
pub mod config;
pub mod console;
pub mod list;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use console::{Console, VerbosityLevel, console, init_console};
pub use list::{
    DragContext, DragTolerance, RedrawFlag, Site, SliderState, TrackRect, VirtualList,
};
