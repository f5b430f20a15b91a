//! Debounce coalescing and timing contracts

#[cfg(test)]
mod tests {
    use crate::test_helpers::SessionHarness;
    use services_save_scheduler::SaveScheduler;
    use session_types::DocumentPath;
    use std::time::Duration;

    #[test]
    fn test_rapid_edits_coalesce_into_one_save_with_last_content() {
        let mut h = SessionHarness::new();
        h.open("/notes.md", "draft");

        // Five edits, each within the quiet period of the previous one
        for value in ["d", "dr", "dra", "draf", "draft final"] {
            h.edit("/notes.md", value);
            h.advance(Duration::from_millis(200));
        }
        assert!(h.gateway.save_requests().is_empty());

        h.advance(SaveScheduler::DEFAULT_QUIET_PERIOD);

        let saves = h.gateway.save_requests();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].path, DocumentPath::new("/notes.md"));
        assert_eq!(saves[0].content, "draft final");
    }

    #[test]
    fn test_no_save_fires_before_quiet_period_elapses() {
        let mut h = SessionHarness::new();
        h.open("/a.txt", "a");
        h.edit("/a.txt", "a edited");

        h.advance(Duration::from_millis(999));
        assert!(h.gateway.save_requests().is_empty());
        assert!(h.session.is_dirty(&DocumentPath::new("/a.txt")));

        h.advance(Duration::from_millis(1));
        assert_eq!(h.gateway.save_requests().len(), 1);
    }

    #[test]
    fn test_separate_quiet_periods_save_separately() {
        let mut h = SessionHarness::new();
        h.open("/a.txt", "a");

        h.edit("/a.txt", "first");
        h.advance(SaveScheduler::DEFAULT_QUIET_PERIOD);
        h.edit("/a.txt", "second");
        h.advance(SaveScheduler::DEFAULT_QUIET_PERIOD);

        let contents: Vec<_> = h
            .gateway
            .save_requests()
            .iter()
            .map(|save| save.content.clone())
            .collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[test]
    fn test_two_documents_debounce_independently() {
        let mut h = SessionHarness::new();
        h.open("/a.txt", "a");
        h.open("/b.txt", "b");

        h.edit("/a.txt", "a edited");
        h.advance(Duration::from_millis(600));
        h.edit("/b.txt", "b edited");

        // Only a's quiet period has elapsed
        h.advance(Duration::from_millis(400));
        let saves = h.gateway.save_requests();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].path, DocumentPath::new("/a.txt"));

        h.advance(Duration::from_millis(600));
        assert_eq!(h.gateway.save_requests().len(), 2);
    }

    #[test]
    fn test_identical_value_does_not_rearm() {
        let mut h = SessionHarness::new();
        h.open("/a.txt", "a");

        // The subscription only fires on real changes
        h.edit("/a.txt", "a");
        assert!(!h.session.is_dirty(&DocumentPath::new("/a.txt")));

        h.advance(Duration::from_millis(2000));
        assert!(h.gateway.save_requests().is_empty());
    }

    #[test]
    fn test_focus_lost_flushes_exactly_the_dirty_set() {
        let mut h = SessionHarness::new();
        h.open("/a.txt", "a");
        h.open("/b.txt", "b");
        h.open("/c.txt", "c");

        h.edit("/a.txt", "a!");
        h.edit("/c.txt", "c!");

        let flushed = h.session.focus_lost();
        assert_eq!(flushed, 2);

        let mut saved_paths: Vec<_> = h
            .gateway
            .save_requests()
            .iter()
            .map(|save| save.path.as_str().to_string())
            .collect();
        saved_paths.sort();
        assert_eq!(saved_paths, vec!["/a.txt", "/c.txt"]);

        // A second focus loss has nothing left to flush
        assert_eq!(h.session.focus_lost(), 0);
        assert_eq!(h.gateway.save_requests().len(), 2);
    }

    #[test]
    fn test_superseded_timer_never_saves_stale_content() {
        let mut h = SessionHarness::new();
        h.open("/a.txt", "a");

        h.edit("/a.txt", "stale");
        // Capture the tasks due for the first edit without delivering them
        h.edit("/a.txt", "fresh");
        let elapsed = h.scheduler.advance(SaveScheduler::DEFAULT_QUIET_PERIOD);
        assert_eq!(elapsed.len(), 1, "superseded timer was cancelled");

        for task in elapsed {
            h.session.save_timer_elapsed(task);
        }
        let saves = h.gateway.save_requests();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].content, "fresh");
    }
}
