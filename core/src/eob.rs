//! Explanation-of-benefits statements and persona views
//!
//! An EOB statement is a set of service lines plus totals. The persona
//! only changes how a statement is presented; the analyst view derives a
//! few extra figures from the same numbers.

use serde::{Deserialize, Serialize};

/// Interface personas the EOB viewer can render for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Senior,
    Professional,
    Family,
    Analyst,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Senior,
        Persona::Professional,
        Persona::Family,
        Persona::Analyst,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::Senior => "Senior",
            Persona::Professional => "Professional",
            Persona::Family => "Family",
            Persona::Analyst => "Analyst",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Persona::Senior => "Large fonts, simple navigation, clear explanations",
            Persona::Professional => "Detailed data, comprehensive analysis, quick access",
            Persona::Family => "Family-friendly interface with visual aids and summaries",
            Persona::Analyst => "Advanced analytics, trends, and detailed reporting",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Persona::Senior => &["Large text", "High contrast", "Voice narration", "Simple layout"],
            Persona::Professional => &["Detailed tables", "Export options", "Quick filters", "Analytics"],
            Persona::Family => &["Visual summaries", "Family plans", "Cost breakdowns", "Kid-friendly"],
            Persona::Analyst => &["Advanced charts", "Trend analysis", "Data export", "Comparisons"],
        }
    }
}

/// One billed service on the statement. Amounts are dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub description: String,
    pub code: String,
    pub charges: f64,
    pub allowed_amount: f64,
    pub deductible: f64,
    pub copay: f64,
    pub coinsurance: f64,
    pub paid_by_insurance: f64,
    pub patient_responsibility: f64,
}

impl ServiceLine {
    /// Allowed amount as a share of billed charges.
    pub fn charge_rate(&self) -> f64 {
        self.allowed_amount / self.charges * 100.0
    }

    /// Insurance payment as a share of the allowed amount.
    pub fn allow_rate(&self) -> f64 {
        self.paid_by_insurance / self.allowed_amount * 100.0
    }

    /// Patient responsibility as a share of the allowed amount.
    pub fn patient_share(&self) -> f64 {
        self.patient_responsibility / self.allowed_amount * 100.0
    }
}

/// Statement totals across all service lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EobTotals {
    pub total_charges: f64,
    pub total_allowed: f64,
    pub total_deductible: f64,
    pub total_copay: f64,
    pub total_coinsurance: f64,
    pub total_paid_by_insurance: f64,
    pub total_patient_responsibility: f64,
}

/// A full explanation-of-benefits statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EobStatement {
    pub patient_name: String,
    pub claim_number: String,
    pub service_date: String,
    pub provider: String,
    pub services: Vec<ServiceLine>,
    pub totals: EobTotals,
}

impl EobStatement {
    /// Difference between billed charges and the allowed amount.
    pub fn provider_discount(&self) -> f64 {
        self.totals.total_charges - self.totals.total_allowed
    }

    /// Share of the allowed amount the insurer paid.
    pub fn insurance_coverage_rate(&self) -> f64 {
        self.totals.total_paid_by_insurance / self.totals.total_allowed * 100.0
    }

    /// Share of the allowed amount left to the patient.
    pub fn patient_share_rate(&self) -> f64 {
        self.totals.total_patient_responsibility / self.totals.total_allowed * 100.0
    }
}

fn line(
    description: &str,
    code: &str,
    amounts: [f64; 7],
) -> ServiceLine {
    let [charges, allowed_amount, deductible, copay, coinsurance, paid_by_insurance, patient_responsibility] =
        amounts;
    ServiceLine {
        description: description.to_string(),
        code: code.to_string(),
        charges,
        allowed_amount,
        deductible,
        copay,
        coinsurance,
        paid_by_insurance,
        patient_responsibility,
    }
}

/// Default statement shown before any "upload" has happened.
pub fn default_statement() -> EobStatement {
    EobStatement {
        patient_name: "John Doe".to_string(),
        claim_number: "CLM-2024-001234".to_string(),
        service_date: "2024-01-15".to_string(),
        provider: "Metropolitan Medical Center".to_string(),
        services: vec![
            line(
                "Office Visit - Level 4",
                "99214",
                [350.00, 280.00, 50.00, 30.00, 40.00, 160.00, 120.00],
            ),
            line(
                "Blood Test - Comprehensive",
                "80053",
                [150.00, 120.00, 0.00, 0.00, 24.00, 96.00, 24.00],
            ),
        ],
        totals: EobTotals {
            total_charges: 500.00,
            total_allowed: 400.00,
            total_deductible: 50.00,
            total_copay: 30.00,
            total_coinsurance: 64.00,
            total_paid_by_insurance: 256.00,
            total_patient_responsibility: 144.00,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<F: Fn(&ServiceLine) -> f64>(statement: &EobStatement, f: F) -> f64 {
        statement.services.iter().map(f).sum()
    }

    #[test]
    fn test_default_totals_match_service_lines() {
        let statement = default_statement();
        assert_eq!(sum(&statement, |s| s.charges), statement.totals.total_charges);
        assert_eq!(sum(&statement, |s| s.allowed_amount), statement.totals.total_allowed);
        assert_eq!(
            sum(&statement, |s| s.paid_by_insurance),
            statement.totals.total_paid_by_insurance
        );
        assert_eq!(
            sum(&statement, |s| s.patient_responsibility),
            statement.totals.total_patient_responsibility
        );
    }

    #[test]
    fn test_analyst_derivations() {
        let statement = default_statement();
        assert_eq!(statement.provider_discount(), 100.0);
        assert_eq!(statement.insurance_coverage_rate(), 64.0);
        assert_eq!(statement.patient_share_rate(), 36.0);
    }

    #[test]
    fn test_service_line_rates() {
        let statement = default_statement();
        let first = &statement.services[0];
        assert_eq!(first.charge_rate(), 80.0);
        assert!((first.allow_rate() - 57.142).abs() < 0.01);
        assert!((first.patient_share() - 42.857).abs() < 0.01);
    }

    #[test]
    fn test_persona_tables() {
        assert_eq!(Persona::ALL.len(), 4);
        for persona in Persona::ALL {
            assert!(!persona.description().is_empty());
            assert_eq!(persona.features().len(), 4);
        }
    }
}
