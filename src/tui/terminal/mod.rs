mod lifecycle;

pub use lifecycle::ListTerminal;
pub use lifecycle::init_terminal;
pub use lifecycle::restore_terminal;
