use dioxus::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::CreateScheduleInput;
use crate::services::ScheduleService;
use crate::ui_dioxus::components::nav_link::{navigate_to, use_router_handle};

const DEFAULT_TIME_ZONE: &str = "UTC";

#[component]
pub fn ScheduleCreateDialog(on_close: EventHandler<()>) -> Element {
    let service = use_context::<Arc<ScheduleService>>();
    let router = use_router_handle();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut time_zone = use_signal(|| DEFAULT_TIME_ZONE.to_string());
    let mut favorite = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let submit = move |_: FormEvent| {
        let service = service.clone();
        let router = router.clone();
        let input = CreateScheduleInput {
            name: name(),
            description: description(),
            time_zone: time_zone(),
            favorite: favorite(),
        };
        saving.set(true);
        error_message.set(None);
        spawn(async move {
            match service.create_schedule(input).await {
                Ok(id) => {
                    info!("Created schedule {}", id);
                    on_close.call(());
                    navigate_to(router, format!("/schedules/{}", id));
                }
                Err(e) => {
                    warn!("Failed to create schedule: {}", e);
                    error_message.set(Some(e.user_message()));
                    saving.set(false);
                }
            }
        });
    };

    let error_banner = match error_message() {
        Some(message) => rsx! {
            p { class: "dialog-error", style: "color: #991b1b;", "{message}" }
        },
        None => None,
    };

    rsx! {
        div {
            class: "create-dialog",
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 1000;
                   display: flex; align-items: center; justify-content: center;",

            form {
                style: "background: white; border-radius: 12px; padding: 24px; width: 90%; max-width: 480px;
                       display: flex; flex-direction: column; gap: 12px;",
                onsubmit: submit,

                h3 { style: "margin: 0; font-size: 20px; font-weight: 600;", "Create Schedule" }

                label { "Name" }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }

                label { "Description" }
                textarea {
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }

                label { "Time Zone" }
                input {
                    r#type: "text",
                    value: "{time_zone}",
                    oninput: move |e| time_zone.set(e.value()),
                }

                label {
                    input {
                        r#type: "checkbox",
                        checked: favorite(),
                        onchange: move |_| favorite.set(!favorite()),
                    }
                    " Favorite"
                }

                {error_banner}

                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px;",
                    button {
                        r#type: "button",
                        disabled: saving(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Submit" }
                    }
                }
            }
        }
    }
}
