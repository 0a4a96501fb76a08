//! Cursor over a feature area's scenario table.

use super::{FeatureArea, Scenario, ScenarioSet};

/// Walks a [`ScenarioSet`] roughly cyclically: the cursor advances on
/// demand and wraps to zero after the last index.
///
/// All operations are total functions over the fixed in-memory table;
/// on an empty set `current()` is `None` and `advance()` is a no-op.
/// Single consumer, synchronous calls, no shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRotator {
    set: ScenarioSet,
    cursor: usize,
}

impl ScenarioRotator {
    /// Rotator over a known feature area, cursor at zero.
    pub fn new(area: FeatureArea) -> Self {
        Self {
            set: ScenarioSet::for_area(area),
            cursor: 0,
        }
    }

    /// Rotator from a raw tag; unrecognized tags get an empty table.
    pub fn for_tag(tag: &str) -> Self {
        Self {
            set: ScenarioSet::for_tag(tag),
            cursor: 0,
        }
    }

    /// The full ordered scenario list.
    pub fn scenarios(&self) -> &[Scenario] {
        self.set.scenarios()
    }

    /// Zero-based cursor position. Always a valid index while the set
    /// is non-empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The scenario under the cursor, or `None` if the table is empty.
    pub fn current(&self) -> Option<&Scenario> {
        self.set.get(self.cursor)
    }

    /// Move the cursor forward one position, wrapping at the end, and
    /// return the scenario now under it. No-op on an empty table.
    pub fn advance(&mut self) -> Option<&Scenario> {
        if self.set.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.set.len();
        self.set.get(self.cursor)
    }

    /// Put the cursor back at zero. No other side effects.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_starts_at_first_scenario() {
        for area in FeatureArea::ALL {
            let rotator = ScenarioRotator::new(area);
            let first = rotator.current().expect("non-empty table");
            assert_eq!(first.id, rotator.scenarios()[0].id);
            assert_eq!(rotator.cursor(), 0);
        }
    }

    #[test]
    fn test_advance_wraps_after_full_cycle() {
        for area in FeatureArea::ALL {
            let mut rotator = ScenarioRotator::new(area);
            let start = rotator.current().unwrap().id;
            let n = rotator.scenarios().len();
            for _ in 0..n {
                rotator.advance();
            }
            assert_eq!(rotator.current().unwrap().id, start);
        }
    }

    #[test]
    fn test_treatment_checker_cycle_example() {
        // Three scenarios -> three advances return to scenario 1.
        let mut rotator = ScenarioRotator::new(FeatureArea::TreatmentChecker);
        assert_eq!(rotator.scenarios().len(), 3);
        assert_eq!(rotator.current().unwrap().name, "Physical Therapy Treatment");

        rotator.advance();
        rotator.advance();
        rotator.advance();
        let back = rotator.current().unwrap();
        assert_eq!(back.id, 1);
        assert_eq!(back.name, "Physical Therapy Treatment");
    }

    #[test]
    fn test_advance_returns_new_current() {
        let mut rotator = ScenarioRotator::new(FeatureArea::Documentation);
        let second = rotator.advance().unwrap().id;
        assert_eq!(rotator.current().unwrap().id, second);
    }

    #[test]
    fn test_reset_restores_first() {
        let mut rotator = ScenarioRotator::new(FeatureArea::ClaimPredictor);
        rotator.advance();
        rotator.advance();
        rotator.reset();
        assert_eq!(rotator.cursor(), 0);
        assert_eq!(
            rotator.current().unwrap().id,
            rotator.scenarios()[0].id
        );
    }

    #[test]
    fn test_empty_table_is_total() {
        let mut rotator = ScenarioRotator::for_tag("no-such-page");
        assert!(rotator.scenarios().is_empty());
        assert!(rotator.current().is_none());
        assert!(rotator.advance().is_none());
        rotator.reset();
        assert!(rotator.current().is_none());
    }
}
