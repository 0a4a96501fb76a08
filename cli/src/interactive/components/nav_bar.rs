//! Navigation bar component
//!
//! Single-line header showing the current page and global key hints.

use iocraft::prelude::*;

/// Properties for the navigation bar component
#[derive(Props)]
pub struct NavBarProps {
    /// Human-readable name of the current page
    pub page_name: String,
    /// Whether the current page is the home page
    pub is_home: bool,
}

impl Default for NavBarProps {
    fn default() -> Self {
        Self {
            page_name: "Home".to_string(),
            is_home: true,
        }
    }
}

/// Navigation bar with current page name and key hints
#[component]
pub fn NavBar(_hooks: Hooks, props: &NavBarProps) -> impl Into<AnyElement<'static>> {
    let hint = if props.is_home {
        "↑/↓ select · Enter open · Esc quit"
    } else {
        "Esc home"
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
            margin_bottom: 1,
            border_style: BorderStyle::Round,
            border_color: Color::Rgb { r: 59, g: 130, b: 246 },
        ) {
            View(flex_direction: FlexDirection::Row) {
                Text(
                    content: "ClaimPulse",
                    color: Color::Rgb { r: 96, g: 165, b: 250 },
                    weight: Weight::Bold,
                )
                Text(content: format!("  {}", props.page_name), color: Color::White)
            }
            Text(content: hint, color: Color::DarkGrey)
        }
    }
}
