//! Processing spinner component
//!
//! Animated spinner shown while a page simulates processing.

use iocraft::prelude::*;
use std::time::Duration;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 80;

/// Properties for the spinner component
#[derive(Props)]
pub struct SpinnerProps {
    /// Message shown next to the spinner
    pub message: String,
}

impl Default for SpinnerProps {
    fn default() -> Self {
        Self {
            message: "Processing...".to_string(),
        }
    }
}

/// Animated spinner with a message
#[component]
pub fn Spinner(mut hooks: Hooks, props: &SpinnerProps) -> impl Into<AnyElement<'static>> {
    let frame = hooks.use_state(|| 0usize);

    let mut frame_clone = frame;
    hooks.use_future(async move {
        loop {
            smol::Timer::after(Duration::from_millis(FRAME_INTERVAL_MS)).await;
            frame_clone.set((frame_clone.get() + 1) % SPINNER_FRAMES.len());
        }
    });

    element! {
        View(flex_direction: FlexDirection::Row) {
            Text(
                content: SPINNER_FRAMES[frame.get()],
                color: Color::Rgb { r: 96, g: 165, b: 250 },
            )
            Text(content: format!(" {}", props.message), color: Color::White)
        }
    }
}
