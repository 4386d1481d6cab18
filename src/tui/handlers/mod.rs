pub mod key_scroll_handler;
pub mod quit_handler;
pub mod slider_mouse_handler;

pub use key_scroll_handler::KeyScrollHandler;
pub use quit_handler::QuitHandler;
pub use slider_mouse_handler::SliderMouseHandler;
