//! Home page with the feature menu

use crate::interactive::components::ClaimPulseLogo;
use iocraft::prelude::*;

/// Feature menu entries: route id, title, one-line description
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "upload-policy",
        "Policy Upload",
        "Upload a policy document and get a plain-language breakdown",
    ),
    (
        "treatment-checker",
        "Treatment Checker",
        "Check whether a treatment is covered and what it costs",
    ),
    (
        "documentation",
        "Documentation Validator",
        "Verify a claim's paperwork is complete before submitting",
    ),
    (
        "claim-predictor",
        "Claim Predictor",
        "Estimate how likely a claim is to be approved",
    ),
    (
        "persona-eob",
        "EOB Viewer",
        "Read an Explanation of Benefits, tailored to how you like it",
    ),
    (
        "glossary",
        "Glossary",
        "Plain-language definitions of insurance jargon",
    ),
    (
        "feedback",
        "Feedback",
        "Tell us what you think of the demo",
    ),
    (
        "about",
        "About",
        "What ClaimPulse is, who it's for, and how to reach us",
    ),
];

/// Properties for the home page
#[derive(Default, Props)]
pub struct HomePageProps {
    /// Called with the route id of the chosen feature
    pub on_navigate: Handler<'static, String>,
}

/// Home page component with the feature menu
#[component]
pub fn HomePage(mut hooks: Hooks, props: &mut HomePageProps) -> impl Into<AnyElement<'static>> {
    let selected = hooks.use_state(|| 0usize);

    hooks.use_terminal_events({
        let mut selected = selected;
        let mut on_navigate = props.on_navigate.take();
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
                        if current + 1 < FEATURES.len() {
                            selected.set(current + 1);
                        }
                    }
                    KeyCode::Enter => {
                        let (route, _, _) = FEATURES[selected.get()];
                        on_navigate(route.to_string());
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    element! {
        View(flex_direction: FlexDirection::Column) {
            View(margin_bottom: 1) {
                ClaimPulseLogo
            }
            Text(
                content: "Understand your health insurance, one claim at a time.",
                color: Color::White,
            )
            View(margin_top: 1, flex_direction: FlexDirection::Column) {
                #(FEATURES.iter().enumerate().map(|(i, (_, title, description))| {
                    let is_selected = i == selected.get();
                    let marker = if is_selected { "❯ " } else { "  " };
                    let color = if is_selected {
                        Color::Rgb { r: 96, g: 165, b: 250 }
                    } else {
                        Color::White
                    };
                    element! {
                        View(flex_direction: FlexDirection::Row) {
                            Text(content: format!("{}{}", marker, title), color: color, weight: if is_selected { Weight::Bold } else { Weight::Normal })
                            Text(content: format!("  {}", description), color: Color::DarkGrey)
                        }
                    }
                }).collect::<Vec<_>>())
            }
            View(margin_top: 1) {
                Text(
                    content: "Demo only. Everything here runs on mock data; no real claims are processed.",
                    color: Color::DarkGrey,
                )
            }
        }
    }
}
