//! Policy upload and analysis page
//!
//! Pick one of the sample files, "upload" it, and read the resulting
//! plain-language coverage breakdown. 'n' and 'r' walk the canned
//! scenarios instead of analyzing a file.

use super::{start_processing, use_processing_timer};
use crate::interactive::components::Spinner;
use claimpulse_core::policy::{analyze_policy, chip_definition, PolicyAnalysis};
use claimpulse_core::scenario::{FeatureArea, ScenarioPayload, ScenarioRotator};
use claimpulse_core::upload::{sample_policy_files, validate_policy_upload};
use claimpulse_core::{DemoConfig, DemoOperation};
use iocraft::prelude::*;
use std::time::Instant;

/// Properties for the policy upload page
#[derive(Default, Props)]
pub struct UploadPolicyPageProps {
    /// Demo runtime configuration
    pub config: DemoConfig,
}

/// Analyze an accepted upload; a rejected file reports an error and
/// leaves any previously displayed analysis in place. Returns whether
/// the file was accepted.
fn store_analysis(
    file: &claimpulse_core::upload::FileMeta,
    result: &mut Option<PolicyAnalysis>,
    error: &mut Option<String>,
) -> bool {
    match validate_policy_upload(file) {
        Ok(()) => {
            *error = None;
            *result = Some(analyze_policy(&file.name));
            true
        }
        Err(validation) => {
            *error = Some(validation.user_message());
            false
        }
    }
}

/// Policy upload page component
#[component]
pub fn UploadPolicyPage(
    mut hooks: Hooks,
    props: &UploadPolicyPageProps,
) -> impl Into<AnyElement<'static>> {
    let selected = hooks.use_state(|| 0usize);
    let result = hooks.use_state(|| None::<PolicyAnalysis>);
    let error = hooks.use_state(|| None::<String>);
    let processing = hooks.use_state(|| false);
    let deadline = hooks.use_state(|| None::<Instant>);
    let rotator = hooks.use_state(|| ScenarioRotator::new(FeatureArea::UploadPolicy));
    let scenario_name = hooks.use_state(|| None::<String>);

    use_processing_timer(&mut hooks, deadline, processing);

    let files = sample_policy_files();
    let file_count = files.len();
    let delay = props.config.processing_delay(DemoOperation::PolicyAnalysis);

    hooks.use_terminal_events({
        let files = files.clone();
        let mut selected = selected;
        let mut result = result;
        let mut error = error;
        let mut rotator = rotator;
        let mut scenario_name = scenario_name;
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
                        let mut current_result = result.read().clone();
                        let mut current_error = error.read().clone();
                        if store_analysis(file, &mut current_result, &mut current_error) {
                            scenario_name.set(None);
                            start_processing(delay, deadline, processing);
                        }
                        result.set(current_result);
                        error.set(current_error);
                    }
                    KeyCode::Char('n') => {
                        let mut current = rotator.read().clone();
                        let scenario = if scenario_name.read().is_none() {
                            current.current().cloned()
                        } else {
                            current.advance().cloned()
                        };
                        if let Some(scenario) = scenario {
                            if let ScenarioPayload::Policy(analysis) = &scenario.payload {
                                error.set(None);
                                result.set(Some(analysis.clone()));
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
                        result.set(None);
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
            Text(content: "Select a policy document (PDF, up to 10MB):", color: Color::White)
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
            Text(
                content: "Enter upload · n next scenario · r reset",
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
                        Spinner(message: "Analyzing your policy...".to_string())
                    }
                })
            } else {
                None
            })

            #(if !processing.get() {
                result.read().as_ref().map(|analysis| render_analysis(analysis, scenario_name.read().as_deref()))
            } else {
                None
            })
        }
    }
}

fn render_analysis(
    analysis: &PolicyAnalysis,
    scenario_name: Option<&str>,
) -> AnyElement<'static> {
    let header = match scenario_name {
        Some(name) => format!("Scenario: {}", name),
        None => format!("Analysis of {}", analysis.file_name),
    };

    let details: Vec<AnyElement<'static>> = analysis
        .coverage_details
        .iter()
        .map(|detail| {
            let terms = analysis.terms_for(detail);
            let chips = if terms.is_empty() {
                String::new()
            } else {
                let expanded: Vec<String> = terms
                    .iter()
                    .map(|term| format!("{}: {}", term, chip_definition(term)))
                    .collect();
                expanded.join(" · ")
            };
            element! {
                View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                    Text(content: format!("• {}", detail.clause), color: Color::White, weight: Weight::Bold)
                    Text(content: format!("  {}", detail.explanation), color: Color::White)
                    #((!chips.is_empty()).then(|| element! {
                        Text(content: format!("  {}", chips), color: Color::DarkGrey)
                    }))
                }
            }
            .into()
        })
        .collect();

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: header, color: Color::Green, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                #(details)
            }
        }
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_upload_keeps_previous_analysis() {
        let files = sample_policy_files();
        let mut result = None;
        let mut error = None;

        assert!(store_analysis(&files[0], &mut result, &mut error));
        let analyzed = result.clone().expect("analysis stored");
        assert_eq!(analyzed.file_name, "HealthPolicy_Basic.pdf");

        let rejected = files
            .iter()
            .find(|f| validate_policy_upload(f).is_err())
            .expect("sample list carries a rejected file");
        assert!(!store_analysis(rejected, &mut result, &mut error));
        assert_eq!(result, Some(analyzed));
        assert!(error.is_some());
    }
}
