use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receiver of change notifications from a [`VirtualList`](super::VirtualList).
///
/// `refresh` is called synchronously, after the model's accessors already
/// reflect the new state, and at most once per mutating call.
pub trait Site {
    fn refresh(&mut self);
}

impl<F: FnMut()> Site for F {
    fn refresh(&mut self) {
        self()
    }
}

/// Shared dirty flag for renderers that poll instead of being called back.
///
/// Clones share the same flag, so the view can hand one clone to the model
/// and keep another to check before drawing.
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Arc<AtomicBool>);

impl RedrawFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the flag without going through a model, e.g. on terminal resize.
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl Site for RedrawFlag {
    fn refresh(&mut self) {
        self.request();
    }
}
