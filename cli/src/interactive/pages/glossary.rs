//! Insurance glossary page
//!
//! Live search over the glossary. Tab cycles the category filter.

use claimpulse_core::glossary::{search, Category};
use iocraft::prelude::*;

/// Properties for the glossary page
#[derive(Default, Props)]
pub struct GlossaryPageProps {}

/// Glossary page component
#[component]
pub fn GlossaryPage(mut hooks: Hooks, _props: &GlossaryPageProps) -> impl Into<AnyElement<'static>> {
    let query = hooks.use_state(String::new);
    // 0 = all categories, 1..=5 = Category::ALL entries
    let category_index = hooks.use_state(|| 0usize);

    hooks.use_terminal_events({
        let mut query = query;
        let mut category_index = category_index;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Tab => {
                        category_index.set((category_index.get() + 1) % (Category::ALL.len() + 1));
                    }
                    KeyCode::Char(c) => {
                        let mut current = query.read().clone();
                        current.push(c);
                        query.set(current);
                    }
                    KeyCode::Backspace => {
                        let mut current = query.read().clone();
                        current.pop();
                        query.set(current);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    let category = match category_index.get() {
        0 => None,
        i => Some(Category::ALL[i - 1]),
    };
    let category_label = category.map_or("All", |c| c.display_name());
    let current_query = query.read().clone();
    let terms = search(&current_query, category);

    element! {
        View(flex_direction: FlexDirection::Column) {
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: Color::Rgb { r: 59, g: 130, b: 246 },
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: "Search: ", color: Color::Rgb { r: 96, g: 165, b: 250 })
                #(if current_query.is_empty() {
                    element! {
                        Text(content: "type to filter terms", color: Color::DarkGrey)
                    }
                } else {
                    element! {
                        Text(content: current_query.clone(), color: Color::White)
                    }
                })
            }
            Text(
                content: format!("Category: {} (Tab to change)", category_label),
                color: Color::DarkGrey,
            )

            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                #(if terms.is_empty() {
                    vec![element! {
                        Text(content: "No terms matched.", color: Color::DarkGrey)
                    }.into()]
                } else {
                    terms.iter().map(|term| {
                        element! {
                            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                                Text(
                                    content: format!("{} [{}]", term.term, term.category.display_name()),
                                    color: Color::White,
                                    weight: Weight::Bold,
                                )
                                Text(content: format!("  {}", term.definition), color: Color::White)
                                Text(content: format!("  Example: {}", term.example), color: Color::DarkGrey)
                                #((!term.related_terms.is_empty()).then(|| element! {
                                    Text(
                                        content: format!("  Related: {}", term.related_terms.join(", ")),
                                        color: Color::DarkGrey,
                                    )
                                }))
                            }
                        }
                        .into()
                    }).collect::<Vec<AnyElement<'static>>>()
                })
            }
            Text(content: format!("{} term(s)", terms.len()), color: Color::DarkGrey)
        }
    }
}
