//! Recording tab-scroll sink

use std::cell::RefCell;
use std::rc::Rc;
use surface_api::TabScrollSink;

/// Scroll sink that counts hints
///
/// The hint is fire-and-forget; the only thing worth asserting is how many
/// times it was raised.
#[derive(Debug, Clone, Default)]
pub struct RecordingScrollSink {
    hints: Rc<RefCell<usize>>,
}

impl RecordingScrollSink {
    /// Creates a sink with zero recorded hints
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scroll hints raised so far
    pub fn hint_count(&self) -> usize {
        *self.hints.borrow()
    }
}

impl TabScrollSink for RecordingScrollSink {
    fn notify_tab_scroll_needed(&mut self) {
        *self.hints.borrow_mut() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_are_counted() {
        let mut sink = RecordingScrollSink::new();
        sink.notify_tab_scroll_needed();
        sink.notify_tab_scroll_needed();
        assert_eq!(sink.hint_count(), 2);
    }

    #[test]
    fn test_clones_share_count() {
        let sink = RecordingScrollSink::new();
        let mut session_side = sink.clone();
        session_side.notify_tab_scroll_needed();
        assert_eq!(sink.hint_count(), 1);
    }
}
