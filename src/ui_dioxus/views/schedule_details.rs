use dioxus::prelude::*;
use std::sync::Arc;
use tracing::warn;

use crate::services::ScheduleService;
use crate::ui_dioxus::components::NavLink;

const SUB_PAGES: [(&str, &str); 5] = [
    ("assignments", "Assignments"),
    ("escalation-policies", "Escalation Policies"),
    ("overrides", "Overrides"),
    ("shifts", "Shifts"),
    ("on-call-notifications", "On-Call Notifications"),
];

#[component]
pub fn ScheduleDetails(schedule_id: ReadOnlySignal<String>, on_delete: EventHandler<String>) -> Element {
    let service = use_context::<Arc<ScheduleService>>();
    let mut favorite_error = use_signal(|| None::<String>);

    let load_service = service.clone();
    let mut schedule = use_resource(move || {
        let service = load_service.clone();
        let id = schedule_id();
        async move { service.schedule(&id).await }
    });

    let id = schedule_id();
    let base_path = format!("/schedules/{}", id);

    let body = match &*schedule.read_unchecked() {
        None => rsx! {
            div { class: "loading", style: "padding: 40px; color: #6b7280;", "Loading schedule..." }
        },
        Some(Err(e)) if e.is_not_found() => rsx! {
            div { class: "error-banner", "Schedule {id} was not found." }
        },
        Some(Err(e)) => rsx! {
            div { class: "error-banner", "{e.user_message()}" }
        },
        Some(Ok(details)) => {
            let is_favorite = details.is_favorite;
            let toggle_service = service.clone();
            let toggle_favorite = move |_: MouseEvent| {
                let service = toggle_service.clone();
                let id = schedule_id();
                spawn(async move {
                    match service.set_favorite(&id, !is_favorite).await {
                        Ok(()) => schedule.restart(),
                        Err(e) => {
                            warn!("Failed to update favorite for {}: {}", id, e);
                            favorite_error.set(Some(e.user_message()));
                        }
                    }
                });
            };
            let description = details.description.clone().unwrap_or_default();

            rsx! {
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    h1 { style: "font-size: 1.8rem; font-weight: bold;", "{details.name}" }
                    div {
                        style: "display: flex; gap: 8px;",
                        button {
                            class: "favorite-toggle",
                            onclick: toggle_favorite,
                            if is_favorite { "★ Unfavorite" } else { "☆ Favorite" }
                        }
                        button {
                            class: "delete-button",
                            style: "color: #dc2626;",
                            onclick: move |_| on_delete.call(schedule_id()),
                            "Delete"
                        }
                    }
                }
                p { class: "description", style: "color: #4b5563;", "{description}" }
                p { class: "time-zone", style: "color: #6b7280;", "Time Zone: {details.time_zone}" }
            }
        }
    };

    let favorite_banner = match favorite_error() {
        Some(message) => rsx! {
            div { class: "error-banner", "{message}" }
        },
        None => None,
    };

    rsx! {
        div {
            class: "schedule-details",
            "data-view": "schedule-details",
            "data-schedule-id": "{id}",
            style: "padding: 20px; max-width: 1000px; margin: 0 auto;",

            NavLink { to: "/schedules".to_string(), "← Schedules" }

            {favorite_banner}
            {body}

            ul {
                class: "schedule-sub-pages",
                style: "list-style: none; padding: 0; margin-top: 24px;",
                for (segment, label) in SUB_PAGES {
                    li {
                        style: "padding: 8px 0;",
                        NavLink { to: format!("{}/{}", base_path, segment), "{label}" }
                    }
                }
            }
        }
    }
}
