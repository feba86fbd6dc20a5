use dioxus::prelude::*;
use std::sync::Arc;

use crate::services::ScheduleService;
use crate::ui_dioxus::components::ScheduleCreateDialog;
use crate::ui_dioxus::views::simple_list_page::{ListQuery, SimpleListPage};

/// All schedules, favorites first.
#[component]
pub fn ScheduleList() -> Element {
    let service = use_context::<Arc<ScheduleService>>();
    let page_size = service.config().page_size;
    let mut show_create = use_signal(|| false);

    let query = use_hook(|| {
        ListQuery::new(move |request| {
            let service = service.clone();
            async move { service.schedule_page(request).await }
        })
    });

    rsx! {
        div {
            class: "schedule-list",
            "data-view": "schedule-list",

            if show_create() {
                ScheduleCreateDialog { on_close: move |_| show_create.set(false) }
            }

            SimpleListPage {
                query: query,
                base_path: "/schedules",
                page_size: page_size,
                create_label: "Schedule".to_string(),
                on_create: move |_| show_create.set(true),
                empty_message: "No schedules found.",
            }
        }
    }
}
