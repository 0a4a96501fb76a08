//! Claim documentation validator page
//!
//! Choose a claim type, "upload" sample paperwork one file at a time,
//! then validate and read the completeness report. Supporting documents
//! have a tighter size limit than the main uploads, and the sample list
//! includes one file that trips it.

use super::{start_processing, use_processing_timer};
use crate::interactive::components::Spinner;
use claimpulse_core::documentation::{
    is_document_present, validate_documentation, ClaimType, DocumentationReport,
};
use claimpulse_core::scenario::{FeatureArea, ScenarioPayload, ScenarioRotator};
use claimpulse_core::upload::{sample_document_files, validate_document_upload, FileMeta};
use claimpulse_core::{DemoConfig, DemoOperation};
use iocraft::prelude::*;
use rand::rngs::StdRng;
use std::time::Instant;

/// Properties for the documentation validator page
#[derive(Default, Props)]
pub struct DocumentationPageProps {
    /// Demo runtime configuration
    pub config: DemoConfig,
}

/// Take the next sample document off the pick list and "upload" it. A
/// rejected file reports an error and leaves prior uploads untouched;
/// either way the cursor moves on so the run can continue.
fn upload_next(
    files: &[FileMeta],
    cursor: &mut usize,
    uploaded: &mut Vec<String>,
    error: &mut Option<String>,
) {
    let Some(file) = files.get(*cursor) else {
        return;
    };
    *cursor += 1;
    match validate_document_upload(file) {
        Ok(()) => {
            *error = None;
            uploaded.push(file.name.clone());
        }
        Err(validation) => {
            *error = Some(validation.user_message());
        }
    }
}

/// Documentation validator page component
#[component]
pub fn DocumentationPage(
    mut hooks: Hooks,
    props: &DocumentationPageProps,
) -> impl Into<AnyElement<'static>> {
    let selected_type = hooks.use_state(|| 0usize);
    let uploaded = hooks.use_state(Vec::<String>::new);
    let sample_cursor = hooks.use_state(|| 0usize);
    let error = hooks.use_state(|| None::<String>);
    let report = hooks.use_state(|| None::<DocumentationReport>);
    let processing = hooks.use_state(|| false);
    let deadline = hooks.use_state(|| None::<Instant>);
    let rotator = hooks.use_state(|| ScenarioRotator::new(FeatureArea::Documentation));
    let scenario_name = hooks.use_state(|| None::<String>);
    let rng = hooks.use_state({
        let config = props.config.clone();
        move || config.rng()
    });

    use_processing_timer(&mut hooks, deadline, processing);

    let delay = props
        .config
        .processing_delay(DemoOperation::DocumentationValidation);
    let files = sample_document_files();

    hooks.use_terminal_events({
        let files = files.clone();
        let mut selected_type = selected_type;
        let mut uploaded = uploaded;
        let mut sample_cursor = sample_cursor;
        let mut error = error;
        let mut report = report;
        let mut rotator = rotator;
        let mut scenario_name = scenario_name;
        let mut rng = rng;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Up => {
                        let current = selected_type.get();
                        if current > 0 {
                            selected_type.set(current - 1);
                            uploaded.set(Vec::new());
                            sample_cursor.set(0);
                            error.set(None);
                            report.set(None);
                        }
                    }
                    KeyCode::Down => {
                        let current = selected_type.get();
                        if current + 1 < ClaimType::ALL.len() {
                            selected_type.set(current + 1);
                            uploaded.set(Vec::new());
                            sample_cursor.set(0);
                            error.set(None);
                            report.set(None);
                        }
                    }
                    KeyCode::Char('u') => {
                        let mut current_cursor = sample_cursor.get();
                        let mut current = uploaded.read().clone();
                        let mut current_error = error.read().clone();
                        upload_next(&files, &mut current_cursor, &mut current, &mut current_error);
                        sample_cursor.set(current_cursor);
                        uploaded.set(current);
                        error.set(current_error);
                    }
                    KeyCode::Char('v') | KeyCode::Enter => {
                        let claim_type = ClaimType::ALL[selected_type.get()];
                        let names = uploaded.read().clone();
                        let mut current_rng: StdRng = rng.read().clone();
                        scenario_name.set(None);
                        report.set(Some(validate_documentation(
                            claim_type,
                            &names,
                            &mut current_rng,
                        )));
                        rng.set(current_rng);
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
                            if let ScenarioPayload::Documentation(scenario_report) =
                                &scenario.payload
                            {
                                report.set(Some(scenario_report.clone()));
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
                        report.set(None);
                        uploaded.set(Vec::new());
                        sample_cursor.set(0);
                        error.set(None);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    let claim_type = ClaimType::ALL[selected_type.get()];
    let uploaded_names = uploaded.read().clone();

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: "What kind of claim are you documenting?", color: Color::White)
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                #(ClaimType::ALL.iter().enumerate().map(|(i, ct)| {
                    let is_selected = i == selected_type.get();
                    let marker = if is_selected { "❯ " } else { "  " };
                    element! {
                        Text(
                            content: format!("{}{}", marker, ct.display_name()),
                            color: if is_selected { Color::Rgb { r: 96, g: 165, b: 250 } } else { Color::White },
                        )
                    }
                }).collect::<Vec<_>>())
            }

            Text(content: "Required documents:", color: Color::White, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                #(claim_type.required_documents().iter().map(|doc| {
                    let have = is_document_present(doc, &uploaded_names);
                    let (marker, color) = if have { ("☑ ", Color::Green) } else { ("☐ ", Color::White) };
                    element! {
                        Text(content: format!("{}{}", marker, doc), color: color)
                    }
                }).collect::<Vec<_>>())
            }

            #((!uploaded_names.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                    Text(content: "Uploaded files:", color: Color::White, weight: Weight::Bold)
                    #(uploaded_names.iter().map(|name| element! {
                        Text(content: format!("  {}", name), color: Color::Green)
                    }).collect::<Vec<_>>())
                }
            }))

            Text(
                content: "u upload sample document · v/Enter validate · n next scenario · r reset",
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
                        Spinner(message: "Validating your documentation...".to_string())
                    }
                })
            } else {
                None
            })

            #(if !processing.get() {
                report.read().as_ref().map(|r| render_report(r, scenario_name.read().as_deref()))
            } else {
                None
            })
        }
    }
}

fn render_report(report: &DocumentationReport, scenario_name: Option<&str>) -> AnyElement<'static> {
    let header = match scenario_name {
        Some(name) => format!("Scenario: {}", name),
        None => format!("{} claim report", report.claim_type.display_name()),
    };
    let completeness_color = if report.completeness >= 90 {
        Color::Green
    } else if report.completeness >= 70 {
        Color::Yellow
    } else {
        Color::Red
    };

    let missing: Vec<AnyElement<'static>> = report
        .missing_documents
        .iter()
        .map(|doc| {
            element! {
                Text(content: format!("  • {}", doc), color: Color::Red)
            }
            .into()
        })
        .collect();

    let suggestions: Vec<AnyElement<'static>> = report
        .suggested_improvements
        .iter()
        .map(|tip| {
            element! {
                Text(content: format!("  • {}", tip), color: Color::White)
            }
            .into()
        })
        .collect();

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: header, color: Color::Green, weight: Weight::Bold)
            Text(
                content: format!("Completeness: {}%", report.completeness),
                color: completeness_color,
            )
            Text(
                content: format!("Estimated processing: {} days", report.estimated_processing_days),
                color: Color::White,
            )
            #((!report.missing_documents.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column, margin_top: 1) {
                    Text(content: "Missing documents:", color: Color::White, weight: Weight::Bold)
                    #(missing)
                }
            }))
            #((!report.suggested_improvements.is_empty()).then(|| element! {
                View(flex_direction: FlexDirection::Column, margin_top: 1) {
                    Text(content: "Suggestions:", color: Color::White, weight: Weight::Bold)
                    #(suggestions)
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
    fn test_oversized_sample_is_rejected_and_prior_uploads_kept() {
        let files = sample_document_files();
        let mut cursor = 0;
        let mut uploaded = Vec::new();
        let mut error = None;

        for _ in 0..files.len() {
            upload_next(&files, &mut cursor, &mut uploaded, &mut error);
        }

        assert_eq!(cursor, files.len());
        assert_eq!(uploaded.len(), files.len() - 1);
        assert!(!uploaded.iter().any(|n| n == "Hospital_Admission_Records.pdf"));
        assert!(error.is_some());

        // exhausted list: another press changes nothing
        upload_next(&files, &mut cursor, &mut uploaded, &mut error);
        assert_eq!(uploaded.len(), files.len() - 1);
    }
}
