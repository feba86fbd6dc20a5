use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::repository;
use crate::services::ScheduleService;
use crate::ui_dioxus::components::NavLink;
use crate::ui_dioxus::router::Route;

#[component]
pub fn App() -> Element {
    // Provide the service to every page
    use_context_provider(|| {
        let config = AppConfig::load();
        info!("Using GraphQL endpoint {}", config.graphql_url);
        let repository = repository::connect(&config);
        Arc::new(ScheduleService::new(repository, config))
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
pub fn AppShell() -> Element {
    rsx! {
        div {
            class: "app-container",
            NavBar {}
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            style: "display: flex; align-items: center; gap: 24px; padding: 12px 20px; background: #1f2937; color: white;",

            div { class: "nav-brand", style: "font-weight: bold;", "On-Call" }

            div {
                class: "nav-menu",
                NavLink { to: "/schedules".to_string(), "📅 Schedules" }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            style: "padding: 40px; text-align: center;",
            h1 { "On-Call Schedules" }
            p { style: "color: #6b7280; margin: 16px 0;", "Browse schedules, their assignments, overrides and shifts." }
            NavLink { to: "/schedules".to_string(), "View schedules" }
        }
    }
}
