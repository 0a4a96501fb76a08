//! About page with the project blurb, use cases, and contact details

use iocraft::prelude::*;

const USE_CASES: &[(&str, &str)] = &[
    (
        "Patient Advocacy",
        "Help patients understand their coverage before medical procedures",
    ),
    (
        "Family Planning",
        "Assist families in choosing the right insurance plans for their needs",
    ),
    (
        "Claim Preparation",
        "Ensure all documentation is complete before submitting claims",
    ),
];

/// About page component
#[component]
pub fn AboutPage(_hooks: Hooks) -> impl Into<AnyElement<'static>> {
    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: "About ClaimPulse", color: Color::Green, weight: Weight::Bold)
            Text(
                content: "Making complex insurance processes simple and accessible for everyone.",
                color: Color::White,
            )

            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                Text(content: "Our vision", color: Color::White, weight: Weight::Bold)
                Text(
                    content: "Healthcare insurance shouldn't be a maze of confusion. ClaimPulse turns",
                    color: Color::White,
                )
                Text(
                    content: "complex insurance documents into clear, actionable insights so anyone can",
                    color: Color::White,
                )
                Text(
                    content: "navigate their benefits and make informed healthcare decisions.",
                    color: Color::White,
                )
            }

            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                Text(content: "Use cases", color: Color::White, weight: Weight::Bold)
                #(USE_CASES.iter().map(|(title, description)| element! {
                    Text(content: format!("  • {} — {}", title, description), color: Color::White)
                }).collect::<Vec<_>>())
            }

            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                Text(content: "Contact", color: Color::White, weight: Weight::Bold)
                Text(content: "  Email: contact@claimpulse.com", color: Color::White)
                Text(content: "  Support: support@claimpulse.com", color: Color::White)
                Text(content: "  Phone: +1 (555) 123-4567", color: Color::White)
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
