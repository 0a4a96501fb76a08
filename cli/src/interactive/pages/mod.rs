//! Page components for the interactive application
//!
//! One page per demo feature, switched by the router in the app shell.

pub mod about;
pub mod claim_predictor;
pub mod documentation;
pub mod feedback;
pub mod glossary;
pub mod home;
pub mod not_found;
pub mod persona_eob;
pub mod treatment_checker;
pub mod upload_policy;

pub use about::AboutPage;
pub use claim_predictor::ClaimPredictorPage;
pub use documentation::DocumentationPage;
pub use feedback::FeedbackPage;
pub use glossary::GlossaryPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use persona_eob::PersonaEobPage;
pub use treatment_checker::TreatmentCheckerPage;
pub use upload_policy::UploadPolicyPage;

use iocraft::prelude::*;
use std::time::{Duration, Instant};

/// Poll interval for the simulated-processing countdown.
const TIMER_POLL_MS: u64 = 50;

/// Drive a page's simulated-processing state: once the deadline passes,
/// clear it and drop the processing flag so results render.
pub(crate) fn use_processing_timer(
    hooks: &mut Hooks,
    deadline: State<Option<Instant>>,
    processing: State<bool>,
) {
    let mut deadline = deadline;
    let mut processing = processing;
    hooks.use_future(async move {
        loop {
            smol::Timer::after(Duration::from_millis(TIMER_POLL_MS)).await;
            let due = *deadline.read();
            if let Some(due) = due {
                if Instant::now() >= due {
                    deadline.set(None);
                    processing.set(false);
                }
            }
        }
    });
}

/// Arm the simulated-processing state for one operation.
pub(crate) fn start_processing(
    delay: Duration,
    mut deadline: State<Option<Instant>>,
    mut processing: State<bool>,
) {
    if delay.is_zero() {
        deadline.set(None);
        processing.set(false);
    } else {
        deadline.set(Some(Instant::now() + delay));
        processing.set(true);
    }
}
