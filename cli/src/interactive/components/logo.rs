//! ClaimPulse logo component
//!
//! ASCII wordmark with a blue gradient, shown on the home page.

use iocraft::prelude::*;

// Static logo lines with individual colors for gradient effect
pub const CLAIMPULSE_LOGO_LINES: &[&str] = &[
    r"  ___ _      _       ___      _       ",
    r" / __| |__ _(_)_ __ | _ \_  _| |___ ___",
    r"| (__| / _` | | '  \|  _/ || | (_-</ -_)",
    r" \___|_\__,_|_|_|_|_|_|  \_,_|_/__/\___|",
];

// Color gradient from bright blue to darker blue
pub const LOGO_COLORS: &[(u8, u8, u8)] = &[
    (96, 165, 250),  // Bright blue
    (59, 130, 246),  // Slightly darker
    (37, 99, 235),   // Medium
    (29, 78, 216),   // Dark
];

/// ClaimPulse ASCII wordmark component with gradient colors
#[component]
pub fn ClaimPulseLogo(_hooks: Hooks) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "logo-content", flex_direction: FlexDirection::Column) {
            #(CLAIMPULSE_LOGO_LINES.iter().enumerate().map(|(i, line)| {
                let color = LOGO_COLORS.get(i).unwrap_or(&(30, 64, 175));
                element! {
                    Text(
                        content: *line,
                        color: Color::Rgb { r: color.0, g: color.1, b: color.2 },
                        weight: Weight::Bold,
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
