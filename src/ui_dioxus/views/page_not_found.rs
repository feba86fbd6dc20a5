use dioxus::prelude::*;

use crate::ui_dioxus::components::NavLink;

#[component]
pub fn PageNotFound(path: String) -> Element {
    rsx! {
        div {
            class: "page-not-found",
            "data-view": "not-found",
            style: "text-align: center; padding: 64px;",
            h1 { "Page Not Found" }
            p {
                style: "color: #6b7280; margin: 16px 0;",
                "The page \"{path}\" could not be found."
            }
            NavLink { to: "/schedules".to_string(), "Back to Schedules" }
        }
    }
}
