//! Panel grid state
//!
//! The in-memory list of active player panels. The grid is only ever
//! mutated from the GUI update loop in response to discrete user actions,
//! so no locking is involved.

use tracing::{debug, info};
use uuid::Uuid;

/// Default upper bound on the number of panels created at once.
pub const DEFAULT_PANEL_CAP: usize = 100;

/// One visual slot rendering a single embedded video.
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: Uuid,
    /// Raw user-supplied video reference (URL or bare id).
    pub reference: String,
}

impl Panel {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference: reference.into(),
        }
    }
}

/// Layout flavor of a panel. Extraction logic is shared; only the aspect
/// ratio of the playback frame differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Standard 16:9 player.
    Browser,
    /// Short-form vertical 9:16 player.
    Shorts,
}

impl PanelKind {
    /// Width-to-height ratio of the playback frame.
    pub fn aspect_ratio(&self) -> f32 {
        match self {
            PanelKind::Browser => 16.0 / 9.0,
            PanelKind::Shorts => 9.0 / 16.0,
        }
    }
}

/// The set of active panels plus its creation cap.
#[derive(Debug, Clone)]
pub struct PanelGrid {
    panels: Vec<Panel>,
    cap: usize,
}

impl Default for PanelGrid {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_CAP)
    }
}

impl PanelGrid {
    pub fn new(cap: usize) -> Self {
        Self {
            panels: Vec::new(),
            cap,
        }
    }

    /// Replace the active set with `count_input` panels all showing
    /// `reference`. The count is clamped to the cap; a non-positive or
    /// unparseable count, or an empty reference, leaves the grid untouched.
    ///
    /// Returns the number of panels created (0 when nothing happened).
    pub fn start(&mut self, count_input: &str, reference: &str) -> usize {
        let reference = reference.trim();
        if reference.is_empty() {
            debug!("start ignored: empty reference");
            return 0;
        }

        let count = count_input.trim().parse::<i64>().unwrap_or(0);
        if count <= 0 {
            debug!(count, "start ignored: non-positive panel count");
            return 0;
        }
        // Clamp before narrowing so oversized counts can't wrap on 32-bit
        // targets.
        let count = count.min(self.cap as i64) as usize;

        self.panels = (0..count).map(|_| Panel::new(reference)).collect();
        info!(count, reference, "panel grid replaced");
        count
    }

    /// Remove a panel by id. Removal only succeeds while more than one
    /// panel exists; the last panel always stays.
    pub fn remove(&mut self, id: Uuid) -> bool {
        if !self.can_remove() {
            debug!(%id, "remove ignored: last remaining panel");
            return false;
        }
        let before = self.panels.len();
        self.panels.retain(|p| p.id != id);
        before != self.panels.len()
    }

    /// Whether the remove affordance should be shown at all.
    pub fn can_remove(&self) -> bool {
        self.panels.len() > 1
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Grid column count as a step function of the panel count:
    /// 1 panel gets a single column, 2 and 3 panels spread out, anything
    /// larger folds back to two columns.
    pub fn columns(&self) -> usize {
        match self.panels.len() {
            0 | 1 => 1,
            2 => 2,
            3 => 3,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_creates_requested_panels() {
        let mut grid = PanelGrid::default();
        assert_eq!(grid.start("3", "dQw4w9WgXcQ"), 3);
        assert_eq!(grid.len(), 3);
        assert!(grid.panels().iter().all(|p| p.reference == "dQw4w9WgXcQ"));
    }

    #[test]
    fn start_replaces_previous_set() {
        let mut grid = PanelGrid::default();
        grid.start("4", "first");
        let old_ids: Vec<Uuid> = grid.panels().iter().map(|p| p.id).collect();

        grid.start("2", "second");
        assert_eq!(grid.len(), 2);
        assert!(grid.panels().iter().all(|p| !old_ids.contains(&p.id)));
    }

    #[test]
    fn start_clamps_to_cap() {
        let mut grid = PanelGrid::new(5);
        assert_eq!(grid.cap(), 5);
        assert_eq!(grid.start("50", "dQw4w9WgXcQ"), 5);
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn oversized_count_clamps_without_wrapping() {
        let mut grid = PanelGrid::new(3);
        // 2^32 would wrap to 0 under a naive usize narrowing on 32-bit
        // targets; it must clamp to the cap instead.
        assert_eq!(grid.start("4294967296", "dQw4w9WgXcQ"), 3);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.start(&i64::MAX.to_string(), "dQw4w9WgXcQ"), 3);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn zero_negative_or_garbage_count_is_noop() {
        let mut grid = PanelGrid::default();
        grid.start("2", "dQw4w9WgXcQ");

        for count in ["0", "-3", "", "abc"] {
            assert_eq!(grid.start(count, "dQw4w9WgXcQ"), 0);
            assert_eq!(grid.len(), 2, "count input {:?} must not disturb grid", count);
        }
    }

    #[test]
    fn empty_reference_is_noop() {
        let mut grid = PanelGrid::default();
        assert_eq!(grid.start("2", "   "), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn remove_keeps_last_panel() {
        let mut grid = PanelGrid::default();
        grid.start("2", "dQw4w9WgXcQ");

        let first = grid.panels()[0].id;
        assert!(grid.remove(first));
        assert_eq!(grid.len(), 1);

        let last = grid.panels()[0].id;
        assert!(!grid.remove(last));
        assert_eq!(grid.len(), 1);
        assert!(!grid.can_remove());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut grid = PanelGrid::default();
        grid.start("3", "dQw4w9WgXcQ");
        assert!(!grid.remove(Uuid::new_v4()));
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn column_step_function() {
        let mut grid = PanelGrid::default();
        assert_eq!(grid.columns(), 1);

        let expected = [(1, 1), (2, 2), (3, 3), (4, 2), (5, 2), (12, 2)];
        for (count, cols) in expected {
            grid.start(&count.to_string(), "dQw4w9WgXcQ");
            assert_eq!(grid.columns(), cols, "{} panels", count);
        }
    }

    #[test]
    fn aspect_ratios() {
        assert!(PanelKind::Browser.aspect_ratio() > 1.0);
        assert!(PanelKind::Shorts.aspect_ratio() < 1.0);
    }
}
