//! Fallback page for unknown routes

use iocraft::prelude::*;

/// Properties for the not-found page
#[derive(Default, Props)]
pub struct NotFoundPageProps {
    /// The route id that failed to resolve
    pub route: String,
}

/// Fallback page shown when the router lands on an unknown route
#[component]
pub fn NotFoundPage(_hooks: Hooks, props: &NotFoundPageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            width: 100pct,
            height: 100pct,
            padding: 2,
        ) {
            Text(content: "Page Not Found", weight: Weight::Bold, color: Color::Red)
            Text(content: format!("Unknown route: {}", props.route))
            Text(content: "Press Esc to return home.", color: Color::DarkGrey)
        }
    }
}
