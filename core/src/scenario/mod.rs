//! Mock scenario tables and the scenario rotator
//!
//! Every feature area owns an ordered, immutable table of canned result
//! objects. Pages walk that table through a [`ScenarioRotator`] cursor:
//! `current()` for the scenario under the cursor, `advance()` to move on
//! (wrapping at the end), `reset()` to start over.

mod rotator;
mod tables;

pub use rotator::ScenarioRotator;

use crate::claim::ClaimPrediction;
use crate::documentation::DocumentationReport;
use crate::eob::EobStatement;
use crate::policy::PolicyAnalysis;
use crate::treatment::TreatmentCoverage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of feature-area tags that own scenario tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureArea {
    UploadPolicy,
    TreatmentChecker,
    Documentation,
    ClaimPredictor,
    PersonaEob,
}

impl FeatureArea {
    pub const ALL: [FeatureArea; 5] = [
        FeatureArea::UploadPolicy,
        FeatureArea::TreatmentChecker,
        FeatureArea::Documentation,
        FeatureArea::ClaimPredictor,
        FeatureArea::PersonaEob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureArea::UploadPolicy => "upload-policy",
            FeatureArea::TreatmentChecker => "treatment-checker",
            FeatureArea::Documentation => "documentation",
            FeatureArea::ClaimPredictor => "claim-predictor",
            FeatureArea::PersonaEob => "persona-eob",
        }
    }
}

impl fmt::Display for FeatureArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload-policy" => Ok(FeatureArea::UploadPolicy),
            "treatment-checker" => Ok(FeatureArea::TreatmentChecker),
            "documentation" => Ok(FeatureArea::Documentation),
            "claim-predictor" => Ok(FeatureArea::ClaimPredictor),
            "persona-eob" => Ok(FeatureArea::PersonaEob),
            other => Err(format!("unknown feature area: {other}")),
        }
    }
}

/// The canned result object a scenario carries. Shape varies per
/// feature area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScenarioPayload {
    Policy(PolicyAnalysis),
    Treatment(TreatmentCoverage),
    Documentation(DocumentationReport),
    Claim(ClaimPrediction),
    Eob(EobStatement),
}

/// One canned example result shown in place of real computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique within the owning set.
    pub id: u32,
    pub name: String,
    pub description: String,
    pub expected_result: String,
    pub payload: ScenarioPayload,
}

/// The immutable, ordered scenario table for one feature area.
///
/// Constructed once per feature area; order matters only for rotation
/// sequencing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSet {
    area: Option<FeatureArea>,
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Table for a known feature area.
    pub fn for_area(area: FeatureArea) -> Self {
        Self {
            area: Some(area),
            scenarios: tables::scenarios_for(area),
        }
    }

    /// Table for a raw tag. Unrecognized tags yield an empty set.
    pub fn for_tag(tag: &str) -> Self {
        match tag.parse::<FeatureArea>() {
            Ok(area) => Self::for_area(area),
            Err(_) => Self {
                area: None,
                scenarios: Vec::new(),
            },
        }
    }

    pub fn area(&self) -> Option<FeatureArea> {
        self.area
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_area_has_three_scenarios() {
        for area in FeatureArea::ALL {
            let set = ScenarioSet::for_area(area);
            assert_eq!(set.len(), 3, "{area} should have 3 scenarios");
        }
    }

    #[test]
    fn test_scenario_ids_are_unique_in_set() {
        for area in FeatureArea::ALL {
            let set = ScenarioSet::for_area(area);
            let mut ids: Vec<u32> = set.scenarios().iter().map(|s| s.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), set.len());
        }
    }

    #[test]
    fn test_unrecognized_tag_yields_empty_set() {
        let set = ScenarioSet::for_tag("billing-portal");
        assert!(set.is_empty());
        assert_eq!(set.area(), None);
    }

    #[test]
    fn test_tag_round_trip() {
        for area in FeatureArea::ALL {
            assert_eq!(area.as_str().parse::<FeatureArea>(), Ok(area));
        }
    }

    #[test]
    fn test_payload_shapes_match_their_area() {
        let set = ScenarioSet::for_area(FeatureArea::TreatmentChecker);
        for scenario in set.scenarios() {
            assert!(matches!(scenario.payload, ScenarioPayload::Treatment(_)));
        }
        let set = ScenarioSet::for_area(FeatureArea::PersonaEob);
        for scenario in set.scenarios() {
            assert!(matches!(scenario.payload, ScenarioPayload::Eob(_)));
        }
    }
}
