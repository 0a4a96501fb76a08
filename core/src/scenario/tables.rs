//! The canned scenario data, one table per feature area.

use super::{FeatureArea, Scenario, ScenarioPayload};
use crate::claim::{ClaimPrediction, Improvement, Priority, RiskFactor, Severity};
use crate::documentation::{ClaimType, DocumentationReport};
use crate::eob::{EobStatement, EobTotals, ServiceLine};
use crate::policy::{CoverageDetail, PolicyAnalysis};
use crate::treatment::TreatmentCoverage;

pub(super) fn scenarios_for(area: FeatureArea) -> Vec<Scenario> {
    match area {
        FeatureArea::UploadPolicy => upload_policy(),
        FeatureArea::TreatmentChecker => treatment_checker(),
        FeatureArea::Documentation => documentation(),
        FeatureArea::ClaimPredictor => claim_predictor(),
        FeatureArea::PersonaEob => persona_eob(),
    }
}

fn scenario(
    id: u32,
    name: &str,
    description: &str,
    expected_result: &str,
    payload: ScenarioPayload,
) -> Scenario {
    Scenario {
        id,
        name: name.to_string(),
        description: description.to_string(),
        expected_result: expected_result.to_string(),
        payload,
    }
}

fn upload_policy() -> Vec<Scenario> {
    vec![
        scenario(
            1,
            "Basic Health Insurance Policy",
            "Standard individual health insurance policy with typical coverage",
            "Policy analyzed with deductible, copay, and coverage details",
            ScenarioPayload::Policy(PolicyAnalysis {
                file_name: "HealthPolicy_Basic.pdf".to_string(),
                coverage_details: vec![
                    CoverageDetail::new(
                        "Annual Deductible: $1,500 per individual",
                        "You pay $1,500 before insurance starts covering costs.",
                        "deductible",
                    ),
                    CoverageDetail::new(
                        "Primary Care Copay: $25",
                        "Fixed $25 fee for each primary care visit.",
                        "copay",
                    ),
                ],
                glossary_terms: vec!["deductible".to_string(), "copay".to_string()],
            }),
        ),
        scenario(
            2,
            "Family Health Insurance Policy",
            "Comprehensive family policy with multiple dependents",
            "Family policy with dependent coverage and family deductible",
            ScenarioPayload::Policy(PolicyAnalysis {
                file_name: "HealthPolicy_Family.pdf".to_string(),
                coverage_details: vec![
                    CoverageDetail::new(
                        "Family Deductible: $3,000 per year",
                        "Combined family deductible before coverage begins.",
                        "deductible",
                    ),
                    CoverageDetail::new(
                        "Dependent Coverage: Children up to 26",
                        "Coverage extends to children until age 26.",
                        "dependents",
                    ),
                ],
                glossary_terms: vec!["deductible".to_string()],
            }),
        ),
        scenario(
            3,
            "High-Deductible Health Plan",
            "HDHP with Health Savings Account eligibility",
            "High-deductible plan with HSA benefits highlighted",
            ScenarioPayload::Policy(PolicyAnalysis {
                file_name: "HealthPolicy_HDHP.pdf".to_string(),
                coverage_details: vec![
                    CoverageDetail::new(
                        "High Deductible: $5,000 individual",
                        "Higher deductible but HSA eligible for tax savings.",
                        "deductible",
                    ),
                    CoverageDetail::new(
                        "HSA Contribution Limit: $3,650",
                        "Maximum tax-deductible HSA contribution allowed.",
                        "hsa",
                    ),
                ],
                glossary_terms: vec!["deductible".to_string()],
            }),
        ),
    ]
}

fn treatment(
    name: &str,
    coverage_percentage: u8,
    estimated_cost: u32,
    copay: u32,
    requirements: &[&str],
) -> TreatmentCoverage {
    TreatmentCoverage {
        treatment: name.to_string(),
        covered: true,
        coverage_percentage,
        estimated_cost,
        copay,
        deductible_applies: false,
        requirements: requirements.iter().map(|s| s.to_string()).collect(),
        alternatives: Vec::new(),
    }
}

fn treatment_checker() -> Vec<Scenario> {
    vec![
        scenario(
            1,
            "Physical Therapy Treatment",
            "Standard physical therapy coverage check",
            "High coverage with prior authorization required",
            ScenarioPayload::Treatment(treatment(
                "Physical Therapy",
                85,
                1200,
                40,
                &["Prior authorization required", "Referral from physician"],
            )),
        ),
        scenario(
            2,
            "MRI Scan Diagnostic",
            "Advanced imaging coverage verification",
            "Covered with pre-approval and high cost sharing",
            ScenarioPayload::Treatment(treatment(
                "MRI Scan",
                70,
                2800,
                100,
                &["Pre-authorization mandatory", "Medical necessity review"],
            )),
        ),
        scenario(
            3,
            "Specialist Consultation",
            "Cardiology specialist visit coverage",
            "Excellent coverage with standard copay",
            ScenarioPayload::Treatment(treatment(
                "Cardiology Consultation",
                90,
                450,
                50,
                &["Referral from primary care"],
            )),
        ),
    ]
}

fn documentation_report(
    claim_type: ClaimType,
    completeness: u8,
    missing: &[&str],
    improvements: &[&str],
    days: u32,
) -> DocumentationReport {
    DocumentationReport {
        claim_type,
        completeness,
        missing_documents: missing.iter().map(|s| s.to_string()).collect(),
        suggested_improvements: improvements.iter().map(|s| s.to_string()).collect(),
        estimated_processing_days: days,
    }
}

fn documentation() -> Vec<Scenario> {
    vec![
        scenario(
            1,
            "Surgery Documentation",
            "Complete surgical claim documentation",
            "High completeness with all required documents",
            ScenarioPayload::Documentation(documentation_report(
                ClaimType::Surgery,
                95,
                &["Photo ID"],
                &["Ensure all signatures are visible"],
                5,
            )),
        ),
        scenario(
            2,
            "Emergency Care Documentation",
            "Emergency room visit claim validation",
            "Moderate completeness with missing ambulance records",
            ScenarioPayload::Documentation(documentation_report(
                ClaimType::Emergency,
                75,
                &["Ambulance records", "Discharge summary"],
                &["Include complete timeline", "Add emergency contact info"],
                7,
            )),
        ),
        scenario(
            3,
            "Preventive Care Documentation",
            "Annual checkup and vaccination records",
            "Complete documentation with fast processing",
            ScenarioPayload::Documentation(documentation_report(
                ClaimType::Preventive,
                100,
                &[],
                &["Documentation is complete"],
                2,
            )),
        ),
    ]
}

fn claim_predictor() -> Vec<Scenario> {
    vec![
        scenario(
            1,
            "Routine Surgery Claim",
            "Standard surgical procedure claim prediction",
            "High approval likelihood with minor documentation needs",
            ScenarioPayload::Claim(ClaimPrediction {
                approval_likelihood: 92,
                confidence_score: 88,
                risk_factors: vec![RiskFactor {
                    factor: "Missing pre-authorization".to_string(),
                    severity: Severity::Medium,
                    impact: "May delay processing".to_string(),
                }],
                improvements: vec![Improvement {
                    action: "Submit pre-authorization form".to_string(),
                    priority: Priority::High,
                    impact: "Documentation".to_string(),
                }],
                expected_processing_days: None,
                similar_claims: None,
            }),
        ),
        scenario(
            2,
            "Complex Emergency Claim",
            "Multi-day emergency hospitalization claim",
            "Moderate approval likelihood requiring additional review",
            ScenarioPayload::Claim(ClaimPrediction {
                approval_likelihood: 78,
                confidence_score: 82,
                risk_factors: vec![
                    RiskFactor {
                        factor: "High cost threshold".to_string(),
                        severity: Severity::High,
                        impact: "Requires additional review".to_string(),
                    },
                    RiskFactor {
                        factor: "Out-of-network provider".to_string(),
                        severity: Severity::Medium,
                        impact: "Reduced coverage".to_string(),
                    },
                ],
                improvements: vec![Improvement {
                    action: "Prepare medical necessity documentation".to_string(),
                    priority: Priority::Medium,
                    impact: "Appeal".to_string(),
                }],
                expected_processing_days: None,
                similar_claims: None,
            }),
        ),
        scenario(
            3,
            "Preventive Care Claim",
            "Annual wellness visit and screening claim",
            "Excellent approval likelihood with full coverage",
            ScenarioPayload::Claim(ClaimPrediction {
                approval_likelihood: 98,
                confidence_score: 95,
                risk_factors: vec![],
                improvements: vec![Improvement {
                    action: "Submit within 30 days for faster processing".to_string(),
                    priority: Priority::Low,
                    impact: "Optimization".to_string(),
                }],
                expected_processing_days: None,
                similar_claims: None,
            }),
        ),
    ]
}

fn line(description: &str, code: &str, amounts: [f64; 7]) -> ServiceLine {
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

fn persona_eob() -> Vec<Scenario> {
    vec![
        scenario(
            1,
            "Complex Cardiology Visit",
            "Multi-service cardiology consultation with diagnostics",
            "EOB with cardiology services and varied persona views",
            ScenarioPayload::Eob(EobStatement {
                patient_name: "Margaret Johnson".to_string(),
                claim_number: "CLM-2024-002345".to_string(),
                service_date: "2024-02-20".to_string(),
                provider: "Central Heart Institute".to_string(),
                services: vec![
                    line(
                        "Cardiology Consultation - Level 5",
                        "99215",
                        [450.00, 380.00, 100.00, 50.00, 46.00, 184.00, 196.00],
                    ),
                    line(
                        "Echocardiogram",
                        "93306",
                        [850.00, 720.00, 0.00, 0.00, 144.00, 576.00, 144.00],
                    ),
                    line(
                        "Stress Test",
                        "93017",
                        [600.00, 480.00, 0.00, 0.00, 96.00, 384.00, 96.00],
                    ),
                ],
                totals: EobTotals {
                    total_charges: 1900.00,
                    total_allowed: 1580.00,
                    total_deductible: 100.00,
                    total_copay: 50.00,
                    total_coinsurance: 286.00,
                    total_paid_by_insurance: 1144.00,
                    total_patient_responsibility: 436.00,
                },
            }),
        ),
        scenario(
            2,
            "Pediatric Emergency Room",
            "Child's emergency room visit with family coverage",
            "Emergency EOB with family-friendly interface options",
            ScenarioPayload::Eob(EobStatement {
                patient_name: "Emma Rodriguez (Age 8)".to_string(),
                claim_number: "CLM-2024-003456".to_string(),
                service_date: "2024-03-15".to_string(),
                provider: "Children's Emergency Center".to_string(),
                services: vec![
                    line(
                        "ER Visit - High Complexity",
                        "99285",
                        [1200.00, 950.00, 0.00, 150.00, 0.00, 800.00, 150.00],
                    ),
                    line(
                        "X-Ray - Arm (2 views)",
                        "73060",
                        [350.00, 280.00, 0.00, 0.00, 56.00, 224.00, 56.00],
                    ),
                ],
                totals: EobTotals {
                    total_charges: 1550.00,
                    total_allowed: 1230.00,
                    total_deductible: 0.00,
                    total_copay: 150.00,
                    total_coinsurance: 56.00,
                    total_paid_by_insurance: 1024.00,
                    total_patient_responsibility: 206.00,
                },
            }),
        ),
        scenario(
            3,
            "Annual Executive Physical",
            "Comprehensive executive health assessment with analytics",
            "Executive physical EOB with professional analytics view",
            ScenarioPayload::Eob(EobStatement {
                patient_name: "Dr. Robert Chen".to_string(),
                claim_number: "CLM-2024-004567".to_string(),
                service_date: "2024-04-10".to_string(),
                provider: "Executive Health Partners".to_string(),
                services: vec![
                    line(
                        "Comprehensive Physical Exam",
                        "99396",
                        [750.00, 600.00, 0.00, 0.00, 120.00, 480.00, 120.00],
                    ),
                    line(
                        "Complete Metabolic Panel",
                        "80053",
                        [200.00, 160.00, 0.00, 0.00, 32.00, 128.00, 32.00],
                    ),
                    line(
                        "Lipid Panel",
                        "80061",
                        [150.00, 120.00, 0.00, 0.00, 24.00, 96.00, 24.00],
                    ),
                    line(
                        "EKG Interpretation",
                        "93000",
                        [100.00, 80.00, 0.00, 0.00, 16.00, 64.00, 16.00],
                    ),
                ],
                totals: EobTotals {
                    total_charges: 1200.00,
                    total_allowed: 960.00,
                    total_deductible: 0.00,
                    total_copay: 0.00,
                    total_coinsurance: 192.00,
                    total_paid_by_insurance: 768.00,
                    total_patient_responsibility: 192.00,
                },
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treatment_checker_first_scenario() {
        let scenarios = scenarios_for(FeatureArea::TreatmentChecker);
        assert_eq!(scenarios[0].id, 1);
        assert_eq!(scenarios[0].name, "Physical Therapy Treatment");
        match &scenarios[0].payload {
            ScenarioPayload::Treatment(t) => {
                assert_eq!(t.coverage_percentage, 85);
                assert_eq!(t.estimated_cost, 1200);
                assert_eq!(t.copay, 40);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_eob_scenario_totals_are_consistent() {
        for scenario in scenarios_for(FeatureArea::PersonaEob) {
            let ScenarioPayload::Eob(statement) = &scenario.payload else {
                panic!("persona-eob scenario without EOB payload");
            };
            let charges: f64 = statement.services.iter().map(|s| s.charges).sum();
            let paid: f64 = statement.services.iter().map(|s| s.paid_by_insurance).sum();
            let owed: f64 = statement
                .services
                .iter()
                .map(|s| s.patient_responsibility)
                .sum();
            assert!((charges - statement.totals.total_charges).abs() < f64::EPSILON);
            assert!((paid - statement.totals.total_paid_by_insurance).abs() < f64::EPSILON);
            assert!((owed - statement.totals.total_patient_responsibility).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_documentation_scenarios_span_claim_types() {
        let scenarios = scenarios_for(FeatureArea::Documentation);
        let types: Vec<ClaimType> = scenarios
            .iter()
            .map(|s| match &s.payload {
                ScenarioPayload::Documentation(report) => report.claim_type,
                other => panic!("unexpected payload: {other:?}"),
            })
            .collect();
        assert_eq!(
            types,
            vec![ClaimType::Surgery, ClaimType::Emergency, ClaimType::Preventive]
        );
    }
}
