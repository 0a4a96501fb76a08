//! Interactive application shell
//!
//! Owns the router and renders the active page. Esc returns to the home
//! page from anywhere; pressing Esc on the home page exits.

use crate::interactive::components::NavBar;
use crate::interactive::pages::{
    AboutPage, ClaimPredictorPage, DocumentationPage, FeedbackPage, GlossaryPage, HomePage,
    NotFoundPage, PersonaEobPage, TreatmentCheckerPage, UploadPolicyPage,
};
use crate::interactive::router::{Route, Router, RouterConfig, RouterResult};
use anyhow::Result;
use claimpulse_core::DemoConfig;
use iocraft::prelude::*;

/// Build the route table for the demo
fn build_router() -> RouterResult<Router> {
    let config = RouterConfig::new()
        .add_route(
            Route::new("home", "Home")
                .with_description("Feature menu")
                .as_default(),
        )
        .add_route(Route::new("upload-policy", "Policy Upload"))
        .add_route(Route::new("treatment-checker", "Treatment Checker"))
        .add_route(Route::new("documentation", "Documentation Validator"))
        .add_route(Route::new("claim-predictor", "Claim Predictor"))
        .add_route(Route::new("persona-eob", "EOB Viewer"))
        .add_route(Route::new("glossary", "Glossary"))
        .add_route(Route::new("feedback", "Feedback"))
        .add_route(Route::new("about", "About"));

    Router::new(config)
}

/// Run the interactive demo UI
pub async fn run_interactive(config: DemoConfig) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        smol::block_on(async move { element!(App(config: config)).render_loop().await })
    })
    .await??;

    Ok(())
}

/// Properties for the application shell
#[derive(Default, Props)]
pub struct AppProps {
    /// Demo runtime configuration
    pub config: DemoConfig,
}

/// Application shell component
#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let router = hooks.use_state(|| build_router().expect("route table is static"));
    let should_exit = hooks.use_state(|| false);

    // Global navigation keys; pages handle their own keys
    hooks.use_terminal_events({
        let mut router = router;
        let mut should_exit = should_exit;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                if code == KeyCode::Esc {
                    let mut current = router.read().clone();
                    if current.current_route_id().as_ref() == "home" {
                        should_exit.set(true);
                    } else {
                        let _ = current.navigate("home");
                        router.set(current);
                    }
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let (route_id, route_name) = {
        let current = router.read();
        let name = current
            .current_route()
            .map(|route| route.name.clone())
            .unwrap_or_default();
        (current.current_route_id().0.clone(), name)
    };

    let config = props.config.clone();
    let mut router_for_nav = router;
    let page: AnyElement<'static> = match route_id.as_str() {
        "home" => element! {
            HomePage(
                key: "home",
                on_navigate: move |id: String| {
                    let mut current = router_for_nav.read().clone();
                    if current.navigate(id.as_str()).is_ok() {
                        router_for_nav.set(current);
                    }
                },
            )
        }
        .into(),
        "upload-policy" => element! {
            UploadPolicyPage(key: "upload-policy", config: config.clone())
        }
        .into(),
        "treatment-checker" => element! {
            TreatmentCheckerPage(key: "treatment-checker", config: config.clone())
        }
        .into(),
        "documentation" => element! {
            DocumentationPage(key: "documentation", config: config.clone())
        }
        .into(),
        "claim-predictor" => element! {
            ClaimPredictorPage(key: "claim-predictor", config: config.clone())
        }
        .into(),
        "persona-eob" => element! {
            PersonaEobPage(key: "persona-eob", config: config.clone())
        }
        .into(),
        "glossary" => element! {
            GlossaryPage(key: "glossary")
        }
        .into(),
        "feedback" => element! {
            FeedbackPage(key: "feedback", config: config.clone())
        }
        .into(),
        "about" => element! {
            AboutPage(key: "about")
        }
        .into(),
        other => element! {
            NotFoundPage(key: "not-found", route: other.to_string())
        }
        .into(),
    };

    element! {
        View(
            key: "app-container",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
            padding: 1,
        ) {
            NavBar(page_name: route_name, is_home: route_id == "home")
            View(flex_grow: 1.0, flex_direction: FlexDirection::Column) {
                #(page)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_covers_every_view() {
        let mut router = build_router().expect("route table");
        assert_eq!(router.current_route_id().as_ref(), "home");
        for id in [
            "upload-policy",
            "treatment-checker",
            "documentation",
            "claim-predictor",
            "persona-eob",
            "glossary",
            "feedback",
            "about",
        ] {
            assert!(router.navigate(id).is_ok(), "missing route: {id}");
        }
    }
}
