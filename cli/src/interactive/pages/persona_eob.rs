//! Persona-based EOB viewer page
//!
//! Renders the same explanation-of-benefits statement four ways: the
//! senior view keeps it simple, the professional and analyst views add
//! per-line figures, and the family view leans on summaries.

use super::{start_processing, use_processing_timer};
use crate::interactive::components::Spinner;
use claimpulse_core::eob::{default_statement, EobStatement, Persona};
use claimpulse_core::scenario::{FeatureArea, ScenarioPayload, ScenarioRotator};
use claimpulse_core::{DemoConfig, DemoOperation};
use iocraft::prelude::*;
use std::time::Instant;

/// Properties for the EOB viewer page
#[derive(Default, Props)]
pub struct PersonaEobPageProps {
    /// Demo runtime configuration
    pub config: DemoConfig,
}

/// Persona-based EOB viewer page component
#[component]
pub fn PersonaEobPage(
    mut hooks: Hooks,
    props: &PersonaEobPageProps,
) -> impl Into<AnyElement<'static>> {
    let persona_index = hooks.use_state(|| 0usize);
    let statement = hooks.use_state(default_statement);
    let processing = hooks.use_state(|| false);
    let deadline = hooks.use_state(|| None::<Instant>);
    let rotator = hooks.use_state(|| ScenarioRotator::new(FeatureArea::PersonaEob));
    let scenario_name = hooks.use_state(|| None::<String>);

    use_processing_timer(&mut hooks, deadline, processing);

    let delay = props.config.processing_delay(DemoOperation::EobProcessing);

    hooks.use_terminal_events({
        let mut persona_index = persona_index;
        let mut statement = statement;
        let mut rotator = rotator;
        let mut scenario_name = scenario_name;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Left => {
                        let current = persona_index.get();
                        persona_index
                            .set((current + Persona::ALL.len() - 1) % Persona::ALL.len());
                        start_processing(delay, deadline, processing);
                    }
                    KeyCode::Right | KeyCode::Tab => {
                        let current = persona_index.get();
                        persona_index.set((current + 1) % Persona::ALL.len());
                        start_processing(delay, deadline, processing);
                    }
                    KeyCode::Char('n') => {
                        let mut current = rotator.read().clone();
                        let scenario = if scenario_name.read().is_none() {
                            current.current().cloned()
                        } else {
                            current.advance().cloned()
                        };
                        if let Some(scenario) = scenario {
                            if let ScenarioPayload::Eob(eob) = &scenario.payload {
                                statement.set(eob.clone());
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
                        statement.set(default_statement());
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    let persona = Persona::ALL[persona_index.get()];
    let current_statement = statement.read().clone();

    element! {
        View(flex_direction: FlexDirection::Column) {
            View(flex_direction: FlexDirection::Row, margin_bottom: 1) {
                #(Persona::ALL.iter().enumerate().map(|(i, p)| {
                    let is_selected = i == persona_index.get();
                    element! {
                        Text(
                            content: format!(" {} ", p.display_name()),
                            color: if is_selected { Color::Black } else { Color::White },
                            background_color: if is_selected {
                                Some(Color::Rgb { r: 96, g: 165, b: 250 })
                            } else {
                                None
                            },
                        )
                    }
                }).collect::<Vec<_>>())
            }
            Text(content: persona.description(), color: Color::DarkGrey)
            Text(
                content: format!("Features: {}", persona.features().join(" · ")),
                color: Color::DarkGrey,
            )
            Text(
                content: "←/→ persona · n next scenario · r reset",
                color: Color::DarkGrey,
            )

            #(scenario_name.read().as_ref().map(|name| element! {
                View(margin_top: 1) {
                    Text(content: format!("Scenario: {}", name), color: Color::Green, weight: Weight::Bold)
                }
            }))

            #(if processing.get() {
                Some(element! {
                    View(margin_top: 1) {
                        Spinner(message: "Preparing your statement...".to_string())
                    }
                })
            } else {
                None
            })

            #(if !processing.get() {
                Some(render_statement(&current_statement, persona))
            } else {
                None
            })
        }
    }
}

fn render_statement(statement: &EobStatement, persona: Persona) -> AnyElement<'static> {
    let detailed = matches!(persona, Persona::Professional | Persona::Analyst);

    let lines: Vec<AnyElement<'static>> = statement
        .services
        .iter()
        .map(|service| {
            let summary = if detailed {
                format!(
                    "• {} ({}) — billed ${:.2}, allowed ${:.2}, insurer paid ${:.2}, you owe ${:.2}",
                    service.description,
                    service.code,
                    service.charges,
                    service.allowed_amount,
                    service.paid_by_insurance,
                    service.patient_responsibility,
                )
            } else {
                format!(
                    "• {} — you owe ${:.2}",
                    service.description, service.patient_responsibility,
                )
            };
            element! {
                View(flex_direction: FlexDirection::Column) {
                    Text(content: summary, color: Color::White)
                    #((persona == Persona::Analyst).then(|| element! {
                        Text(
                            content: format!(
                                "    allowed {:.0}% of billed · insurer covered {:.0}% · your share {:.0}%",
                                service.charge_rate(), service.allow_rate(), service.patient_share(),
                            ),
                            color: Color::DarkGrey,
                        )
                    }))
                }
            }
            .into()
        })
        .collect();

    let totals = &statement.totals;
    let summary = match persona {
        Persona::Senior => format!(
            "Your total cost for this visit is ${:.2}. Insurance paid ${:.2}.",
            totals.total_patient_responsibility, totals.total_paid_by_insurance,
        ),
        Persona::Family => format!(
            "Out of ${:.2} billed, your family pays ${:.2}. The rest is covered.",
            totals.total_charges, totals.total_patient_responsibility,
        ),
        Persona::Professional => format!(
            "Billed ${:.2} · allowed ${:.2} · deductible ${:.2} · copay ${:.2} · coinsurance ${:.2} · insurer ${:.2} · patient ${:.2}",
            totals.total_charges,
            totals.total_allowed,
            totals.total_deductible,
            totals.total_copay,
            totals.total_coinsurance,
            totals.total_paid_by_insurance,
            totals.total_patient_responsibility,
        ),
        Persona::Analyst => format!(
            "Provider discount ${:.2} · insurer covered {:.1}% of allowed · patient share {:.1}%",
            statement.provider_discount(),
            statement.insurance_coverage_rate(),
            statement.patient_share_rate(),
        ),
    };

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(
                content: format!(
                    "{} · {} · {} · {}",
                    statement.patient_name, statement.claim_number,
                    statement.service_date, statement.provider,
                ),
                color: Color::White,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                #(lines)
            }
            View(margin_top: 1) {
                Text(content: summary, color: Color::Green)
            }
        }
    }
    .into()
}
