//! Policy analysis mock engine
//!
//! "Analyzes" an uploaded policy by returning a canned set of coverage
//! clauses with plain-language explanations and glossary-term chips.

use serde::{Deserialize, Serialize};

/// One policy clause with its simplified explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDetail {
    pub clause: String,
    pub explanation: String,
    pub category: String,
}

impl CoverageDetail {
    pub fn new(
        clause: impl Into<String>,
        explanation: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            clause: clause.into(),
            explanation: explanation.into(),
            category: category.into(),
        }
    }
}

/// Result of a policy analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAnalysis {
    pub file_name: String,
    pub coverage_details: Vec<CoverageDetail>,
    pub glossary_terms: Vec<String>,
}

impl PolicyAnalysis {
    /// Glossary terms that appear in a detail's clause or explanation,
    /// matched as case-insensitive substrings.
    pub fn terms_for(&self, detail: &CoverageDetail) -> Vec<&str> {
        let clause = detail.clause.to_lowercase();
        let explanation = detail.explanation.to_lowercase();
        self.glossary_terms
            .iter()
            .filter(|term| {
                let t = term.to_lowercase();
                clause.contains(&t) || explanation.contains(&t)
            })
            .map(|s| s.as_str())
            .collect()
    }
}

/// Produce the default mock analysis for an uploaded policy file.
pub fn analyze_policy(file_name: &str) -> PolicyAnalysis {
    PolicyAnalysis {
        file_name: file_name.to_string(),
        coverage_details: vec![
            CoverageDetail::new(
                "Annual Deductible: $2,500 per individual, $5,000 per family",
                "You must pay this amount out-of-pocket before insurance coverage begins each year.",
                "deductible",
            ),
            CoverageDetail::new(
                "Copayment: $30 for primary care visits, $50 for specialists",
                "Fixed amount you pay for covered services, regardless of the actual cost.",
                "copay",
            ),
            CoverageDetail::new(
                "Out-of-Network Coverage: 60% after deductible",
                "If you visit providers outside your insurance network, you pay 40% of the cost.",
                "network",
            ),
            CoverageDetail::new(
                "Emergency Room: $500 copay, waived if admitted",
                "You pay $500 for ER visits, but this fee is removed if you're admitted to the hospital.",
                "emergency",
            ),
        ],
        glossary_terms: vec![
            "deductible".to_string(),
            "copay".to_string(),
            "network".to_string(),
            "emergency".to_string(),
        ],
    }
}

/// Hover definition for the glossary chips shown under each clause.
pub fn chip_definition(term: &str) -> &'static str {
    match term {
        "deductible" => {
            "The amount you pay for covered health care services before your insurance plan starts to pay."
        }
        "copay" => {
            "A fixed amount you pay for a covered health care service after you've paid your deductible."
        }
        "network" => {
            "The facilities, providers and suppliers your health insurer has contracted with to provide health care services."
        }
        "emergency" => {
            "A medical condition manifesting itself by acute symptoms of sufficient severity that a prudent layperson could reasonably expect the absence of immediate medical attention to result in serious jeopardy to the individual's health."
        }
        _ => "Definition not available",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analysis_has_four_clauses() {
        let analysis = analyze_policy("HealthPolicy_Basic.pdf");
        assert_eq!(analysis.file_name, "HealthPolicy_Basic.pdf");
        assert_eq!(analysis.coverage_details.len(), 4);
        assert_eq!(analysis.glossary_terms.len(), 4);
    }

    #[test]
    fn test_terms_match_clause_and_explanation() {
        let analysis = analyze_policy("policy.pdf");
        // The deductible clause mentions "deductible" only.
        let terms = analysis.terms_for(&analysis.coverage_details[0]);
        assert_eq!(terms, vec!["deductible"]);
        // The out-of-network clause mentions both deductible and network.
        let terms = analysis.terms_for(&analysis.coverage_details[2]);
        assert!(terms.contains(&"deductible"));
        assert!(terms.contains(&"network"));
    }

    #[test]
    fn test_chip_definitions() {
        assert!(chip_definition("copay").starts_with("A fixed amount"));
        assert_eq!(chip_definition("premium"), "Definition not available");
    }
}
