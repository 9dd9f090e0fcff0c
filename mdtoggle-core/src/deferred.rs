//! Deferred selection restoration
//!
//! A command first replaces the buffer, then schedules the selection it wants
//! the surface to show. The selection can only be applied once the surface
//! displays the new buffer, otherwise the offsets would point into stale text.
//! Only the newest restoration is kept. It is applied on the next
//! [`SelectionScheduler::run_pending`] call that finds the surface in sync.

use crate::selection::Selection;
use crate::surface::TextSurface;

/// A selection waiting for the surface to catch up with buffer revision `rev`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    pub rev: u64,
    pub selection: Selection,
}

/// Holds the latest selection restoration; a new one replaces the old
#[derive(Debug, Default)]
pub struct SelectionScheduler {
    pending: Option<PendingSelection>,
}

impl SelectionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a restoration for buffer revision `rev`
    pub fn schedule(&mut self, rev: u64, selection: Selection) {
        let next = PendingSelection { rev, selection };
        if let Some(prev) = self.pending.replace(next) {
            log::trace!(
                "Selection for rev {} superseded by rev {}",
                prev.rev,
                rev
            );
        }
    }

    /// Latest queued restoration, if any
    pub fn pending(&self) -> Option<PendingSelection> {
        self.pending
    }

    /// Apply the latest restoration if the surface already shows `buffer`.
    ///
    /// Restorations for older revisions are dropped. If the surface has not
    /// picked up the new text yet, the restoration stays queued for the next
    /// call. Returns the selection that was applied.
    pub fn run_pending<S>(&mut self, surface: &mut S, rev: u64, buffer: &str) -> Option<Selection>
    where
        S: TextSurface + ?Sized,
    {
        let pending = self.pending?;

        if pending.rev != rev {
            log::trace!("Dropping stale selection for rev {} (now {})", pending.rev, rev);
            self.pending = None;
            return None;
        }

        if surface.value() != buffer {
            log::trace!("Surface has not caught up with rev {}, deferring", rev);
            return None;
        }

        surface.set_selection_range(pending.selection);
        surface.focus();
        self.pending = None;
        log::trace!(
            "Restored selection {}..{} for rev {}",
            pending.selection.start,
            pending.selection.end,
            rev
        );
        Some(pending.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_applies_once_surface_is_in_sync() {
        let mut scheduler = SelectionScheduler::new();
        let mut surface = MemorySurface::new("old");
        scheduler.schedule(2, Selection::new(2, 5));

        // Surface still shows the old text
        assert_eq!(scheduler.run_pending(&mut surface, 2, "**new**"), None);
        assert!(scheduler.pending().is_some());
        assert!(!surface.is_focused());

        surface.set_value("**new**");
        assert_eq!(
            scheduler.run_pending(&mut surface, 2, "**new**"),
            Some(Selection::new(2, 5))
        );
        assert_eq!(surface.selection(), Selection::new(2, 5));
        assert!(surface.is_focused());
        assert_eq!(scheduler.pending(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut scheduler = SelectionScheduler::new();
        let mut surface = MemorySurface::new("abcdef");
        scheduler.schedule(3, Selection::new(0, 1));
        scheduler.schedule(3, Selection::new(2, 4));

        assert_eq!(
            scheduler.run_pending(&mut surface, 3, "abcdef"),
            Some(Selection::new(2, 4))
        );
    }

    #[test]
    fn test_stale_revision_dropped() {
        let mut scheduler = SelectionScheduler::new();
        let mut surface = MemorySurface::new("abc");
        scheduler.schedule(1, Selection::new(0, 1));

        assert_eq!(scheduler.run_pending(&mut surface, 2, "abc"), None);
        assert_eq!(scheduler.pending(), None);
        assert_eq!(surface.selection(), Selection::cursor(0));
    }

    #[test]
    fn test_nothing_pending() {
        let mut scheduler = SelectionScheduler::default();
        let mut surface = MemorySurface::new("");
        assert_eq!(scheduler.run_pending(&mut surface, 0, ""), None);
    }

    #[test]
    fn test_newer_revision_replaces_older() {
        let mut scheduler = SelectionScheduler::new();
        scheduler.schedule(4, Selection::new(0, 2));
        scheduler.schedule(5, Selection::cursor(3));
        assert_eq!(
            scheduler.pending(),
            Some(PendingSelection {
                rev: 5,
                selection: Selection::cursor(3),
            })
        );

        let mut surface = MemorySurface::new("abcd");
        assert_eq!(scheduler.run_pending(&mut surface, 4, "abcd"), None);
        assert_eq!(scheduler.pending(), None);
    }
}
