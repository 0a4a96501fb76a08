//! Treatment coverage checker page
//!
//! Type a treatment name (or Tab through the quick examples) and press
//! Enter to check coverage. Scenario stepping sits on ctrl+n/ctrl+r so
//! every plain letter stays available for typing.

use super::{start_processing, use_processing_timer};
use crate::interactive::components::Spinner;
use claimpulse_core::scenario::{FeatureArea, ScenarioPayload, ScenarioRotator};
use claimpulse_core::treatment::{check_treatment, TreatmentCoverage, QUICK_EXAMPLES};
use claimpulse_core::{DemoConfig, DemoOperation};
use iocraft::prelude::*;
use rand::rngs::StdRng;
use std::time::Instant;

/// Properties for the treatment checker page
#[derive(Default, Props)]
pub struct TreatmentCheckerPageProps {
    /// Demo runtime configuration
    pub config: DemoConfig,
}

/// Treatment checker page component
#[component]
pub fn TreatmentCheckerPage(
    mut hooks: Hooks,
    props: &TreatmentCheckerPageProps,
) -> impl Into<AnyElement<'static>> {
    let input = hooks.use_state(String::new);
    let result = hooks.use_state(|| None::<TreatmentCoverage>);
    let error = hooks.use_state(|| None::<String>);
    let processing = hooks.use_state(|| false);
    let deadline = hooks.use_state(|| None::<Instant>);
    let rotator = hooks.use_state(|| ScenarioRotator::new(FeatureArea::TreatmentChecker));
    let scenario_name = hooks.use_state(|| None::<String>);
    let rng = hooks.use_state({
        let config = props.config.clone();
        move || config.rng()
    });

    use_processing_timer(&mut hooks, deadline, processing);

    let delay = props.config.processing_delay(DemoOperation::TreatmentCheck);

    hooks.use_terminal_events({
        let mut input = input;
        let mut result = result;
        let mut error = error;
        let mut rotator = rotator;
        let mut scenario_name = scenario_name;
        let mut rng = rng;
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Tab => {
                        // Cycle through the quick examples
                        let current = input.read().clone();
                        let next = match QUICK_EXAMPLES.iter().position(|e| *e == current) {
                            Some(i) => QUICK_EXAMPLES[(i + 1) % QUICK_EXAMPLES.len()],
                            None => QUICK_EXAMPLES[0],
                        };
                        input.set(next.to_string());
                    }
                    KeyCode::Enter => {
                        let treatment = input.read().clone();
                        let mut current_rng: StdRng = rng.read().clone();
                        scenario_name.set(None);
                        match check_treatment(&treatment, &mut current_rng) {
                            Ok(coverage) => {
                                error.set(None);
                                result.set(Some(coverage));
                                start_processing(delay, deadline, processing);
                            }
                            Err(validation) => {
                                result.set(None);
                                error.set(Some(validation.user_message()));
                            }
                        }
                        rng.set(current_rng);
                    }
                    KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                        let mut current = rotator.read().clone();
                        let scenario = if scenario_name.read().is_none() {
                            current.current().cloned()
                        } else {
                            current.advance().cloned()
                        };
                        if let Some(scenario) = scenario {
                            if let ScenarioPayload::Treatment(coverage) = &scenario.payload {
                                error.set(None);
                                result.set(Some(coverage.clone()));
                                scenario_name.set(Some(scenario.name.clone()));
                                start_processing(delay, deadline, processing);
                            }
                        }
                        rotator.set(current);
                    }
                    KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                        let mut current = rotator.read().clone();
                        current.reset();
                        rotator.set(current);
                        scenario_name.set(None);
                        result.set(None);
                        error.set(None);
                    }
                    KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                        let mut current = input.read().clone();
                        current.push(c);
                        input.set(current);
                    }
                    KeyCode::Backspace => {
                        let mut current = input.read().clone();
                        current.pop();
                        input.set(current);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: "Which treatment do you want to check?", color: Color::White)
            View(
                border_style: BorderStyle::Round,
                border_color: Color::Rgb { r: 59, g: 130, b: 246 },
                padding_left: 1,
                padding_right: 1,
                margin_bottom: 1,
            ) {
                #(if input.read().is_empty() {
                    element! {
                        Text(content: "e.g. Physical Therapy (Tab for examples)", color: Color::DarkGrey)
                    }
                } else {
                    element! {
                        Text(content: input.read().clone(), color: Color::White)
                    }
                })
            }
            Text(
                content: "Enter check · Tab quick examples · ctrl+n next scenario · ctrl+r reset",
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
                        Spinner(message: "Checking your coverage...".to_string())
                    }
                })
            } else {
                None
            })

            #(if !processing.get() {
                result.read().as_ref().map(|coverage| render_coverage(coverage, scenario_name.read().as_deref()))
            } else {
                None
            })
        }
    }
}

fn render_coverage(
    coverage: &TreatmentCoverage,
    scenario_name: Option<&str>,
) -> AnyElement<'static> {
    let header = match scenario_name {
        Some(name) => format!("Scenario: {}", name),
        None => format!("Coverage for {}", coverage.treatment),
    };
    let status = if coverage.covered {
        ("✓ Covered", Color::Green)
    } else {
        ("✗ Not covered", Color::Red)
    };

    let requirements: Vec<AnyElement<'static>> = coverage
        .requirements
        .iter()
        .map(|req| {
            element! {
                Text(content: format!("  • {}", req), color: Color::White)
            }
            .into()
        })
        .collect();

    let alternatives: Vec<AnyElement<'static>> = coverage
        .alternatives
        .iter()
        .map(|alt| {
            element! {
                Text(
                    content: format!(
                        "  • {} — {}% covered, est. ${}",
                        alt.name, alt.coverage_percentage, alt.estimated_cost
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
            Text(content: status.0, color: status.1)
            Text(
                content: format!(
                    "Coverage: {}% · Estimated cost: ${} · Copay: ${} · Deductible applies: {}",
                    coverage.coverage_percentage,
                    coverage.estimated_cost,
                    coverage.copay,
                    if coverage.deductible_applies { "yes" } else { "no" },
                ),
                color: Color::White,
            )
            #((!coverage.requirements.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column, margin_top: 1) {
                    Text(content: "Requirements:", color: Color::White, weight: Weight::Bold)
                    #(requirements)
                }
            }))
            #((!coverage.alternatives.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column, margin_top: 1) {
                    Text(content: "Alternatives:", color: Color::White, weight: Weight::Bold)
                    #(alternatives)
                }
            }))
        }
    }
    .into()
}
