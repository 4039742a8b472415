//! Active-section tracker backing navigation highlighting.
//!
//! Mirrors an intersection-observer feed: each page section reports its
//! visibility ratio as it enters or leaves the viewport, and the tracker
//! publishes the section with the highest ratio as "current". It never
//! reports empty once initialized; when every section has left the viewport
//! it retains the last known value.

use std::collections::HashMap;

#[derive(Debug)]
pub struct SectionTracker {
    /// Sections currently intersecting the viewport, by visibility ratio
    visible: HashMap<String, f64>,
    current: String,
}

impl SectionTracker {
    /// Create a tracker initialized to the first section of the page
    pub fn new(first_section: impl Into<String>) -> Self {
        Self {
            visible: HashMap::new(),
            current: first_section.into(),
        }
    }

    /// Feed one observer callback entry and return the current section
    pub fn observe(&mut self, section_id: &str, ratio: f64, is_intersecting: bool) -> &str {
        if is_intersecting {
            self.visible.insert(section_id.to_string(), ratio);
        } else {
            self.visible.remove(section_id);
        }
        self.recompute();
        &self.current
    }

    /// Identifier of the section the navigation should highlight
    pub fn current(&self) -> &str {
        &self.current
    }

    fn recompute(&mut self) {
        // Ties resolve by section id so the winner is deterministic
        let best = self
            .visible
            .iter()
            .max_by(|(id_a, ratio_a), (id_b, ratio_b)| {
                ratio_a
                    .partial_cmp(ratio_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| id_b.cmp(id_a))
            })
            .map(|(id, _)| id.clone());

        if let Some(id) = best {
            self.current = id;
        }
        // No visible sections: keep the last known value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialized_to_first_section() {
        let tracker = SectionTracker::new("hero");
        assert_eq!(tracker.current(), "hero");
    }

    #[test]
    fn test_highest_ratio_wins() {
        let mut tracker = SectionTracker::new("hero");
        tracker.observe("about", 0.3, true);
        tracker.observe("projects", 0.6, true);
        assert_eq!(tracker.current(), "projects");
    }

    #[test]
    fn test_current_follows_ratio_changes() {
        let mut tracker = SectionTracker::new("hero");
        tracker.observe("about", 0.8, true);
        assert_eq!(tracker.current(), "about");
        tracker.observe("about", 0.2, true);
        tracker.observe("contact", 0.5, true);
        assert_eq!(tracker.current(), "contact");
    }

    #[test]
    fn test_retains_last_known_when_all_exit() {
        let mut tracker = SectionTracker::new("hero");
        tracker.observe("about", 0.3, true);
        tracker.observe("projects", 0.6, true);
        tracker.observe("about", 0.0, false);
        tracker.observe("projects", 0.0, false);
        // Never reports empty: last winner sticks
        assert_eq!(tracker.current(), "projects");
    }

    #[test]
    fn test_exit_of_leader_promotes_runner_up() {
        let mut tracker = SectionTracker::new("hero");
        tracker.observe("about", 0.3, true);
        tracker.observe("projects", 0.6, true);
        tracker.observe("projects", 0.0, false);
        assert_eq!(tracker.current(), "about");
    }
}
