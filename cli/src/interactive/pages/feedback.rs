//! Feedback form page
//!
//! Tab moves between fields. The rating field takes 1-5, the category
//! field cycles with Left/Right, and the text fields take free input.
//! Enter submits; an accepted submission clears the form.

use super::{start_processing, use_processing_timer};
use crate::interactive::components::Spinner;
use claimpulse_core::feedback::{self, FeedbackForm, CATEGORIES};
use claimpulse_core::{DemoConfig, DemoOperation};
use iocraft::prelude::*;
use std::time::Instant;

/// Fields the form cursor can sit on, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Rating,
    Name,
    Email,
    Category,
    Text,
}

const FIELD_ORDER: [Field; 5] = [
    Field::Rating,
    Field::Name,
    Field::Email,
    Field::Category,
    Field::Text,
];

/// Properties for the feedback page
#[derive(Default, Props)]
pub struct FeedbackPageProps {
    /// Demo runtime configuration
    pub config: DemoConfig,
}

/// Feedback form page component
#[component]
pub fn FeedbackPage(mut hooks: Hooks, props: &FeedbackPageProps) -> impl Into<AnyElement<'static>> {
    let form = hooks.use_state(FeedbackForm::default);
    let focus = hooks.use_state(|| 0usize);
    let error = hooks.use_state(|| None::<String>);
    let confirmation = hooks.use_state(|| None::<String>);
    let processing = hooks.use_state(|| false);
    let deadline = hooks.use_state(|| None::<Instant>);

    use_processing_timer(&mut hooks, deadline, processing);

    let delay = props
        .config
        .processing_delay(DemoOperation::FeedbackSubmission);

    hooks.use_terminal_events({
        let mut form = form;
        let mut focus = focus;
        let mut error = error;
        let mut confirmation = confirmation;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                let field = FIELD_ORDER[focus.get()];
                match code {
                    KeyCode::Tab => {
                        focus.set((focus.get() + 1) % FIELD_ORDER.len());
                    }
                    KeyCode::BackTab => {
                        focus.set((focus.get() + FIELD_ORDER.len() - 1) % FIELD_ORDER.len());
                    }
                    KeyCode::Enter => {
                        let current = form.read().clone();
                        match feedback::submit(&current) {
                            Ok(submission) => {
                                error.set(None);
                                confirmation.set(Some(format!(
                                    "Thanks for your feedback! Reference: {}",
                                    submission.id
                                )));
                                // Accepted submissions clear the form
                                form.set(FeedbackForm::default());
                                focus.set(0);
                                start_processing(delay, deadline, processing);
                            }
                            Err(validation) => {
                                confirmation.set(None);
                                error.set(Some(validation.user_message()));
                            }
                        }
                    }
                    KeyCode::Char(c @ '1'..='5') if field == Field::Rating => {
                        let mut current = form.read().clone();
                        current.rating = c as u8 - b'0';
                        form.set(current);
                    }
                    KeyCode::Left | KeyCode::Right if field == Field::Category => {
                        let mut current = form.read().clone();
                        let position = CATEGORIES
                            .iter()
                            .position(|cat| *cat == current.category)
                            .unwrap_or(0);
                        let next = if code == KeyCode::Right {
                            (position + 1) % CATEGORIES.len()
                        } else {
                            (position + CATEGORIES.len() - 1) % CATEGORIES.len()
                        };
                        current.category = CATEGORIES[next].to_string();
                        form.set(current);
                    }
                    KeyCode::Char(c)
                        if matches!(field, Field::Name | Field::Email | Field::Text) =>
                    {
                        let mut current = form.read().clone();
                        match field {
                            Field::Name => current.name.push(c),
                            Field::Email => current.email.push(c),
                            Field::Text => current.text.push(c),
                            _ => {}
                        }
                        form.set(current);
                    }
                    KeyCode::Backspace
                        if matches!(field, Field::Name | Field::Email | Field::Text) =>
                    {
                        let mut current = form.read().clone();
                        match field {
                            Field::Name => {
                                current.name.pop();
                            }
                            Field::Email => {
                                current.email.pop();
                            }
                            Field::Text => {
                                current.text.pop();
                            }
                            _ => {}
                        }
                        form.set(current);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    let current_form = form.read().clone();
    let focused = FIELD_ORDER[focus.get()];

    let stars: String = (1..=5)
        .map(|i| if i <= current_form.rating { '★' } else { '☆' })
        .collect();
    let caption = feedback::rating_caption(current_form.rating).unwrap_or("Press 1-5 to rate");
    let category_label = if current_form.category.is_empty() {
        "←/→ to choose"
    } else {
        current_form.category.as_str()
    };

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: "How was your experience with ClaimPulse?", color: Color::White)
            View(flex_direction: FlexDirection::Column, margin_top: 1, margin_bottom: 1) {
                #(field_row("Rating *", &format!("{}  {}", stars, caption), focused == Field::Rating))
                #(field_row("Name", &current_form.name, focused == Field::Name))
                #(field_row("Email", &current_form.email, focused == Field::Email))
                #(field_row("Category", category_label, focused == Field::Category))
                #(field_row("Feedback *", &current_form.text, focused == Field::Text))
            }
            Text(
                content: "Tab next field · Enter submit · * required",
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
                        Spinner(message: "Sending your feedback...".to_string())
                    }
                })
            } else {
                None
            })

            #(if !processing.get() {
                confirmation.read().as_ref().map(|message| element! {
                    View(margin_top: 1) {
                        Text(content: format!("✓ {}", message), color: Color::Green)
                    }
                })
            } else {
                None
            })
        }
    }
}

fn field_row(label: &str, value: &str, focused: bool) -> AnyElement<'static> {
    let marker = if focused { "❯ " } else { "  " };
    let label_color = if focused {
        Color::Rgb { r: 96, g: 165, b: 250 }
    } else {
        Color::White
    };

    element! {
        View(flex_direction: FlexDirection::Row) {
            Text(content: format!("{}{:<12}", marker, label), color: label_color)
            Text(content: value.to_string(), color: Color::White)
        }
    }
    .into()
}
