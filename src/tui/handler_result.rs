#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandlerResult {
    NotHandled,
    Handled,
    ShouldQuit,
}
