//! Claim approval predictor page
//!
//! Pick a sample claim file, "upload" it, then run the mock prediction
//! to see approval likelihood, risk factors, and improvement tips.

use super::{start_processing, use_processing_timer};
use crate::interactive::components::Spinner;
use claimpulse_core::claim::{predict_claim, ClaimPrediction};
use claimpulse_core::scenario::{FeatureArea, ScenarioPayload, ScenarioRotator};
use claimpulse_core::upload::{sample_claim_files, validate_claim_upload};
use claimpulse_core::{DemoConfig, DemoOperation};
use iocraft::prelude::*;
use rand::rngs::StdRng;
use std::time::Instant;

/// Properties for the claim predictor page
#[derive(Default, Props)]
pub struct ClaimPredictorPageProps {
    /// Demo runtime configuration
    pub config: DemoConfig,
}

/// Store an accepted upload; a rejected file reports an error and leaves
/// the previously uploaded file (and any prediction) in place.
fn store_upload(
    file: &claimpulse_core::upload::FileMeta,
    uploaded: &mut Option<String>,
    error: &mut Option<String>,
) {
    match validate_claim_upload(file) {
        Ok(()) => {
            *error = None;
            *uploaded = Some(file.name.clone());
        }
        Err(validation) => {
            *error = Some(validation.user_message());
        }
    }
}

/// Claim predictor page component
#[component]
pub fn ClaimPredictorPage(
    mut hooks: Hooks,
    props: &ClaimPredictorPageProps,
) -> impl Into<AnyElement<'static>> {
    let selected = hooks.use_state(|| 0usize);
    let uploaded_name = hooks.use_state(|| None::<String>);
    let prediction = hooks.use_state(|| None::<ClaimPrediction>);
    let error = hooks.use_state(|| None::<String>);
    let processing = hooks.use_state(|| false);
    let deadline = hooks.use_state(|| None::<Instant>);
    let rotator = hooks.use_state(|| ScenarioRotator::new(FeatureArea::ClaimPredictor));
    let scenario_name = hooks.use_state(|| None::<String>);
    let rng = hooks.use_state({
        let config = props.config.clone();
        move || config.rng()
    });

    use_processing_timer(&mut hooks, deadline, processing);

    let files = sample_claim_files();
    let file_count = files.len();
    let delay = props.config.processing_delay(DemoOperation::ClaimPrediction);

    hooks.use_terminal_events({
        let files = files.clone();
        let mut selected = selected;
        let mut uploaded_name = uploaded_name;
        let mut prediction = prediction;
        let mut error = error;
        let mut rotator = rotator;
        let mut scenario_name = scenario_name;
        let mut rng = rng;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Up => {
                        let current = selected.get();
                        if current > 0 {
                            selected.set(current - 1);
                        }
                    }
                    KeyCode::Down => {
                        let current = selected.get();
                        if current + 1 < file_count {
                            selected.set(current + 1);
                        }
                    }
                    KeyCode::Enter => {
                        let file = &files[selected.get()];
                        let mut current_upload = uploaded_name.read().clone();
                        let mut current_error = error.read().clone();
                        store_upload(file, &mut current_upload, &mut current_error);
                        uploaded_name.set(current_upload);
                        error.set(current_error);
                    }
                    KeyCode::Char('p') => {
                        if uploaded_name.read().is_none() {
                            error.set(Some(
                                "Please upload a claim document first.".to_string(),
                            ));
                        } else {
                            let mut current_rng: StdRng = rng.read().clone();
                            scenario_name.set(None);
                            error.set(None);
                            prediction.set(Some(predict_claim(&mut current_rng)));
                            rng.set(current_rng);
                            start_processing(delay, deadline, processing);
                        }
                    }
                    KeyCode::Char('n') => {
                        let mut current = rotator.read().clone();
                        let scenario = if scenario_name.read().is_none() {
                            current.current().cloned()
                        } else {
                            current.advance().cloned()
                        };
                        if let Some(scenario) = scenario {
                            if let ScenarioPayload::Claim(scenario_prediction) = &scenario.payload {
                                error.set(None);
                                prediction.set(Some(scenario_prediction.clone()));
                                scenario_name.set(Some(scenario.name.clone()));
                                start_processing(delay, deadline, processing);
                            }
                        }
                        rotator.set(current);
                    }
                    KeyCode::Char('r') => {
                        let mut current = rotator.read().clone();
                        current.reset();
                        rotator.set(current);
                        scenario_name.set(None);
                        prediction.set(None);
                        uploaded_name.set(None);
                        error.set(None);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: "Select a claim document (PDF or Word, up to 10MB):", color: Color::White)
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                #(files.iter().enumerate().map(|(i, file)| {
                    let is_selected = i == selected.get();
                    let marker = if is_selected { "❯ " } else { "  " };
                    element! {
                        Text(
                            content: format!("{}{} ({}, {})", marker, file.name, file.display_size(), file.mime),
                            color: if is_selected { Color::Rgb { r: 96, g: 165, b: 250 } } else { Color::White },
                        )
                    }
                }).collect::<Vec<_>>())
            }

            #(uploaded_name.read().as_ref().map(|name| element! {
                Text(content: format!("Uploaded: {}", name), color: Color::Green)
            }))

            Text(
                content: "Enter upload · p predict · n next scenario · r reset",
                color: Color::DarkGrey,
            )

            #(error.read().as_ref().map(|message| element! {
                View(margin_top: 1) {
                    Text(content: format!("✗ {}", message), color: Color::Red)
                }
            }))

            #(if processing.get() {
                Some(element! {
                    View(margin_top: 1) {
                        Spinner(message: "Analyzing your claim...".to_string())
                    }
                })
            } else {
                None
            })

            #(if !processing.get() {
                prediction.read().as_ref().map(|p| render_prediction(p, scenario_name.read().as_deref()))
            } else {
                None
            })
        }
    }
}

fn render_prediction(
    prediction: &ClaimPrediction,
    scenario_name: Option<&str>,
) -> AnyElement<'static> {
    let header = match scenario_name {
        Some(name) => format!("Scenario: {}", name),
        None => "Claim prediction".to_string(),
    };
    let likelihood_color = if prediction.approval_likelihood >= 85 {
        Color::Green
    } else if prediction.approval_likelihood >= 70 {
        Color::Yellow
    } else {
        Color::Red
    };

    let risk_factors: Vec<AnyElement<'static>> = prediction
        .risk_factors
        .iter()
        .map(|risk| {
            element! {
                Text(
                    content: format!("  • [{}] {} — {}", risk.severity, risk.factor, risk.impact),
                    color: Color::White,
                )
            }
            .into()
        })
        .collect();

    let improvements: Vec<AnyElement<'static>> = prediction
        .improvements
        .iter()
        .map(|improvement| {
            element! {
                Text(
                    content: format!(
                        "  • [{}] {} ({})",
                        improvement.priority, improvement.action, improvement.impact
                    ),
                    color: Color::White,
                )
            }
            .into()
        })
        .collect();

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: header, color: Color::Green, weight: Weight::Bold)
            Text(
                content: format!("Approval likelihood: {}%", prediction.approval_likelihood),
                color: likelihood_color,
                weight: Weight::Bold,
            )
            Text(
                content: format!("Confidence: {}%", prediction.confidence_score),
                color: Color::White,
            )
            #(prediction.expected_processing_days.map(|days| element! {
                Text(content: format!("Expected processing: {} days", days), color: Color::White)
            }))
            #(prediction.similar_claims.as_ref().map(|similar| element! {
                Text(
                    content: format!(
                        "Similar claims: {} with {}% approved",
                        similar.total_similar, similar.approval_rate
                    ),
                    color: Color::White,
                )
            }))
            #((!prediction.risk_factors.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column, margin_top: 1) {
                    Text(content: "Risk factors:", color: Color::White, weight: Weight::Bold)
                    #(risk_factors)
                }
            }))
            #((!prediction.improvements.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column, margin_top: 1) {
                    Text(content: "Ways to improve:", color: Color::White, weight: Weight::Bold)
                    #(improvements)
                }
            }))
        }
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_upload_keeps_previous_file() {
        let files = sample_claim_files();
        let mut uploaded = None;
        let mut error = None;

        store_upload(&files[0], &mut uploaded, &mut error);
        assert_eq!(uploaded.as_deref(), Some("Claim_Surgery_0412.pdf"));
        assert!(error.is_none());

        let oversized = files
            .iter()
            .find(|f| validate_claim_upload(f).is_err())
            .expect("sample list carries a rejected file");
        store_upload(oversized, &mut uploaded, &mut error);
        assert_eq!(uploaded.as_deref(), Some("Claim_Surgery_0412.pdf"));
        assert!(error.is_some());
    }
}
