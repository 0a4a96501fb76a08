//! Insurance glossary
//!
//! A fixed table of terms with definitions, examples and related terms,
//! searchable by substring and filterable by category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glossary term categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Costs,
    Coverage,
    Claims,
    Providers,
    Benefits,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Costs,
        Category::Coverage,
        Category::Claims,
        Category::Providers,
        Category::Benefits,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Costs => "Costs & Payments",
            Category::Coverage => "Coverage",
            Category::Claims => "Claims",
            Category::Providers => "Providers",
            Category::Benefits => "Benefits",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "costs" => Ok(Category::Costs),
            "coverage" => Ok(Category::Coverage),
            "claims" => Ok(Category::Claims),
            "providers" => Ok(Category::Providers),
            "benefits" => Ok(Category::Benefits),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// One glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub category: Category,
    pub definition: String,
    pub example: String,
    pub related_terms: Vec<String>,
}

fn term(
    term: &str,
    category: Category,
    definition: &str,
    example: &str,
    related: &[&str],
) -> GlossaryTerm {
    GlossaryTerm {
        term: term.to_string(),
        category,
        definition: definition.to_string(),
        example: example.to_string(),
        related_terms: related.iter().map(|s| s.to_string()).collect(),
    }
}

/// The full glossary table.
pub fn all_terms() -> Vec<GlossaryTerm> {
    vec![
        term(
            "Deductible",
            Category::Costs,
            "The amount you pay for covered health care services before your insurance plan starts to pay.",
            "If your deductible is $1,000, you pay the first $1,000 of covered services yourself.",
            &["Copay", "Coinsurance", "Out-of-pocket maximum"],
        ),
        term(
            "Copay (Copayment)",
            Category::Costs,
            "A fixed amount you pay for a covered health care service after you've paid your deductible.",
            "Your plan might have a $20 copay for doctor visits and a $10 copay for prescription drugs.",
            &["Deductible", "Coinsurance"],
        ),
        term(
            "Coinsurance",
            Category::Costs,
            "Your share of the costs of a covered health care service, calculated as a percentage.",
            "If your coinsurance is 20%, you pay 20% of the cost and insurance pays 80%.",
            &["Copay", "Deductible", "Out-of-pocket maximum"],
        ),
        term(
            "Out-of-pocket Maximum",
            Category::Costs,
            "The most you have to pay for covered services in a plan year. After you reach this amount, insurance pays 100%.",
            "If your out-of-pocket max is $6,000, you won't pay more than that for covered services in a year.",
            &["Deductible", "Copay", "Coinsurance"],
        ),
        term(
            "Premium",
            Category::Costs,
            "The amount you pay for your health insurance every month.",
            "Your monthly premium might be $300, regardless of whether you use health services.",
            &["Deductible", "Coverage"],
        ),
        term(
            "Network",
            Category::Providers,
            "The facilities, providers and suppliers your health insurer has contracted with to provide health care services.",
            "Using in-network providers typically costs less than out-of-network providers.",
            &["In-network", "Out-of-network", "Provider"],
        ),
        term(
            "In-network",
            Category::Providers,
            "Healthcare providers who have a contract with your insurance company to provide services at discounted rates.",
            "Visiting an in-network doctor means lower costs for you.",
            &["Network", "Out-of-network", "Provider"],
        ),
        term(
            "Out-of-network",
            Category::Providers,
            "Healthcare providers who don't have a contract with your insurance company.",
            "Out-of-network care usually costs more and may not be covered at all.",
            &["Network", "In-network", "Provider"],
        ),
        term(
            "Primary Care Provider (PCP)",
            Category::Providers,
            "A doctor who provides general medical care and coordinates your overall healthcare.",
            "Your PCP might be a family doctor, internist, or general practitioner.",
            &["Specialist", "Referral", "Network"],
        ),
        term(
            "Specialist",
            Category::Providers,
            "A doctor who focuses on a specific area of medicine or a particular group of patients.",
            "A cardiologist (heart doctor) or dermatologist (skin doctor) are specialists.",
            &["Primary Care Provider", "Referral"],
        ),
        term(
            "Pre-authorization",
            Category::Claims,
            "Approval from your insurance company before you receive certain treatments or services.",
            "You might need pre-authorization for an MRI or surgery.",
            &["Claims", "Coverage", "Benefits"],
        ),
        term(
            "Explanation of Benefits (EOB)",
            Category::Claims,
            "A statement from your insurance company explaining what medical treatments were paid for.",
            "Your EOB shows what you owe, what insurance paid, and why claims were processed certain ways.",
            &["Claims", "Benefits", "Coverage"],
        ),
        term(
            "Claim",
            Category::Claims,
            "A request for payment that you or your healthcare provider submits to your insurance company.",
            "When you visit the doctor, they submit a claim to your insurance for the services provided.",
            &["EOB", "Benefits", "Coverage"],
        ),
        term(
            "Preventive Care",
            Category::Benefits,
            "Healthcare services that help prevent illness or detect problems early when they're easier to treat.",
            "Annual check-ups, vaccinations, and cancer screenings are preventive care.",
            &["Benefits", "Coverage", "Wellness"],
        ),
        term(
            "Essential Health Benefits",
            Category::Benefits,
            "A set of healthcare service categories that must be covered by certain plans.",
            "These include emergency care, maternity care, mental health services, and prescription drugs.",
            &["Coverage", "Benefits", "Preventive Care"],
        ),
        term(
            "Formulary",
            Category::Coverage,
            "A list of prescription drugs covered by your insurance plan.",
            "If your medication is on the formulary, you'll pay less than for non-formulary drugs.",
            &["Coverage", "Benefits", "Prescription drugs"],
        ),
        term(
            "Grace Period",
            Category::Coverage,
            "The period after your premium payment is due during which coverage continues.",
            "You might have a 30-day grace period to pay your premium before coverage is terminated.",
            &["Premium", "Coverage"],
        ),
        term(
            "Waiting Period",
            Category::Coverage,
            "The time you must wait before your insurance coverage begins or before certain benefits are available.",
            "Some plans have a waiting period for maternity benefits or pre-existing conditions.",
            &["Coverage", "Benefits", "Pre-existing condition"],
        ),
    ]
}

/// Filter terms by a case-insensitive substring over term names and
/// definitions, and optionally by category.
pub fn search(query: &str, category: Option<Category>) -> Vec<GlossaryTerm> {
    let query = query.to_lowercase();
    all_terms()
        .into_iter()
        .filter(|t| {
            let matches_search = query.is_empty()
                || t.term.to_lowercase().contains(&query)
                || t.definition.to_lowercase().contains(&query);
            let matches_category = category.map(|c| c == t.category).unwrap_or(true);
            matches_search && matches_category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size_and_categories() {
        let terms = all_terms();
        assert_eq!(terms.len(), 18);
        for category in Category::ALL {
            assert!(terms.iter().any(|t| t.category == category));
        }
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(search("", None).len(), all_terms().len());
    }

    #[test]
    fn test_search_matches_definitions_too() {
        // "deductible" appears in the Copay and Coinsurance definitions
        // via related wording as well as its own entry.
        let results = search("deductible", None);
        assert!(results.iter().any(|t| t.term == "Deductible"));
        assert!(results.iter().any(|t| t.term == "Copay (Copayment)"));
        assert!(results.len() >= 2);
    }

    #[test]
    fn test_category_filter() {
        let results = search("", Some(Category::Providers));
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|t| t.category == Category::Providers));

        let results = search("formulary", Some(Category::Providers));
        assert!(results.is_empty());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Costs".parse::<Category>(), Ok(Category::Costs));
        assert!("dental".parse::<Category>().is_err());
    }
}
