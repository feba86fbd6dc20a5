use dioxus::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

use crate::services::ScheduleService;
use crate::ui_dioxus::components::nav_link::{navigate_to, use_router_handle};
use crate::ui_dioxus::components::ConfirmationDialog;

/// Asks before deleting a schedule. Closes itself on cancel and after a
/// successful delete; a failed delete keeps it open with the error shown.
#[component]
pub fn ScheduleDeleteDialog(schedule_id: String, on_close: EventHandler<()>) -> Element {
    let service = use_context::<Arc<ScheduleService>>();
    let router = use_router_handle();
    let mut busy = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let confirm_id = schedule_id.clone();
    let confirm = move |_: ()| {
        let service = service.clone();
        let id = confirm_id.clone();
        let router = router.clone();
        busy.set(true);
        error_message.set(None);
        spawn(async move {
            match service.delete_schedule(&id).await {
                Ok(()) => {
                    info!("Schedule {} deleted", id);
                    on_close.call(());
                    navigate_to(router, "/schedules".to_string());
                }
                Err(e) => {
                    warn!("Failed to delete schedule {}: {}", id, e);
                    error_message.set(Some(e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "delete-dialog",
            "data-schedule-id": "{schedule_id}",
            ConfirmationDialog {
                title: "Are you sure?",
                message: "This will delete the schedule {schedule_id}.",
                confirm_text: "Delete",
                cancel_text: "Cancel",
                on_confirm: confirm,
                on_cancel: move |_| on_close.call(()),
                danger: true,
                busy: busy(),
                error: error_message(),
            }
        }
    }
}
