use dioxus::prelude::*;
use std::sync::Arc;

use crate::services::{ScheduleService, ScheduleSubList};
use crate::ui_dioxus::components::{FlatList, NavLink};
use crate::ui_dioxus::views::simple_list_page::{ListQuery, SimpleListPage};

#[component]
pub fn ScheduleRuleList(schedule_id: ReadOnlySignal<String>) -> Element {
    rsx! { ScheduleItemsView { schedule_id: schedule_id, kind: ScheduleSubList::Rules, view: "schedule-rules" } }
}

#[component]
pub fn ScheduleOnCallNotificationsList(schedule_id: ReadOnlySignal<String>) -> Element {
    rsx! {
        ScheduleItemsView {
            schedule_id: schedule_id,
            kind: ScheduleSubList::OnCallNotifications,
            view: "schedule-on-call-notifications",
        }
    }
}

#[component]
pub fn ScheduleAssignedToList(schedule_id: ReadOnlySignal<String>) -> Element {
    rsx! {
        ScheduleItemsView {
            schedule_id: schedule_id,
            kind: ScheduleSubList::AssignedTo,
            view: "schedule-assigned-to",
        }
    }
}

#[component]
pub fn ScheduleShiftList(schedule_id: ReadOnlySignal<String>) -> Element {
    rsx! { ScheduleItemsView { schedule_id: schedule_id, kind: ScheduleSubList::Shifts, view: "schedule-shifts" } }
}

/// Overrides are paginated, so they go through the generic list page. The
/// overrides query has no search argument, so there is no search box.
#[component]
pub fn ScheduleOverrideList(schedule_id: ReadOnlySignal<String>) -> Element {
    let service = use_context::<Arc<ScheduleService>>();
    let page_size = service.config().page_size;

    let query = use_memo(move || {
        let service = service.clone();
        let id = schedule_id();
        ListQuery::new(move |request| {
            let service = service.clone();
            let id = id.clone();
            async move { service.override_page(&id, request).await }
        })
    });

    let id = schedule_id();

    rsx! {
        div {
            class: "schedule-sub-list",
            "data-view": "schedule-overrides",
            "data-schedule-id": "{id}",

            SubListHeader { schedule_id: id.clone(), title: "Overrides" }
            SimpleListPage {
                query: query(),
                base_path: "",
                page_size: page_size,
                searchable: false,
                empty_message: "No overrides.",
            }
        }
    }
}

#[component]
fn SubListHeader(schedule_id: String, title: String) -> Element {
    rsx! {
        div {
            style: "padding: 20px 20px 0 20px; max-width: 1000px; margin: 0 auto;",
            NavLink { to: format!("/schedules/{}", schedule_id), "← Back to schedule" }
            h2 { style: "font-size: 1.5rem; font-weight: bold; margin: 12px 0;", "{title}" }
        }
    }
}

#[component]
fn ScheduleItemsView(schedule_id: ReadOnlySignal<String>, kind: ScheduleSubList, view: String) -> Element {
    let service = use_context::<Arc<ScheduleService>>();

    let items = use_resource(move || {
        let service = service.clone();
        let id = schedule_id();
        async move { service.sub_list(kind, &id).await }
    });

    let id = schedule_id();

    let body = match &*items.read_unchecked() {
        None => rsx! {
            div { class: "loading", style: "padding: 40px; color: #6b7280;", "Loading..." }
        },
        Some(Err(e)) if e.is_not_found() => rsx! {
            div { class: "error-banner", "Schedule {id} was not found." }
        },
        Some(Err(e)) => rsx! {
            div { class: "error-banner", "{e.user_message()}" }
        },
        Some(Ok(rows)) => rsx! {
            FlatList {
                items: rows.clone(),
                base_path: "",
                empty_message: kind.empty_message().to_string(),
            }
        },
    };

    rsx! {
        div {
            class: "schedule-sub-list",
            "data-view": "{view}",
            "data-schedule-id": "{id}",

            SubListHeader { schedule_id: id.clone(), title: kind.title().to_string() }
            div {
                style: "padding: 0 20px 20px 20px; max-width: 1000px; margin: 0 auto;",
                {body}
            }
        }
    }
}
