use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::domain::PendingDeletion;
use crate::ui_dioxus::app::{AppShell, Home};
use crate::ui_dioxus::components::ScheduleDeleteDialog;
use crate::ui_dioxus::route_table::ScheduleRoute;
use crate::ui_dioxus::views::*;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},

        #[route("/:..segments")]
        Pages { segments: Vec<String> },
}

/// Everything below `/` is dispatched by the schedule route table.
#[component]
fn Pages(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { ScheduleRouter { path: path } }
}

/// Renders the schedule page for `path`, plus the delete confirmation when
/// a deletion is pending. The dialog sits above whichever page is active.
#[component]
pub fn ScheduleRouter(path: String) -> Element {
    let pending = use_signal(PendingDeletion::default);
    rsx! { ScheduleRoutes { path: path, pending: pending } }
}

#[component]
pub fn ScheduleRoutes(path: String, pending: Signal<PendingDeletion>) -> Element {
    let mut pending = pending;
    let route = ScheduleRoute::resolve(&path);
    debug!(?route, "Resolved {}", path);

    let target = pending.read().target().map(str::to_string);
    let dialog = match target {
        Some(schedule_id) => rsx! {
            ScheduleDeleteDialog {
                schedule_id: schedule_id,
                on_close: move |_| pending.write().clear(),
            }
        },
        None => None,
    };

    let view = match route {
        ScheduleRoute::List => rsx! { ScheduleList {} },
        ScheduleRoute::Details { schedule_id } => rsx! {
            ScheduleDetails {
                schedule_id: schedule_id,
                on_delete: move |id: String| pending.write().request(id),
            }
        },
        ScheduleRoute::Rules { schedule_id } => rsx! { ScheduleRuleList { schedule_id: schedule_id } },
        ScheduleRoute::OnCallNotifications { schedule_id } => rsx! {
            ScheduleOnCallNotificationsList { schedule_id: schedule_id }
        },
        ScheduleRoute::AssignedTo { schedule_id } => rsx! {
            ScheduleAssignedToList { schedule_id: schedule_id }
        },
        ScheduleRoute::Overrides { schedule_id } => rsx! {
            ScheduleOverrideList { schedule_id: schedule_id }
        },
        ScheduleRoute::Shifts { schedule_id } => rsx! { ScheduleShiftList { schedule_id: schedule_id } },
        ScheduleRoute::NotFound => rsx! { PageNotFound { path: path.clone() } },
    };

    rsx! {
        {dialog}
        {view}
    }
}
