use dioxus::prelude::*;

use crate::domain::FlatListItem;
use crate::ui_dioxus::components::NavLink;

#[component]
pub fn FlatList(
    items: Vec<FlatListItem>,
    base_path: String,
    #[props(default)] empty_message: String,
) -> Element {
    rsx! {
        ul {
            class: "flat-list",
            style: "list-style: none; margin: 0; padding: 0; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",

            if items.is_empty() {
                li {
                    class: "flat-list-empty",
                    style: "padding: 24px; text-align: center; color: #6b7280;",
                    "{empty_message}"
                }
            }

            for (i, item) in items.iter().enumerate() {
                FlatListRow {
                    key: "{i}",
                    item: item.clone(),
                    href: item.href(&base_path),
                }
            }
        }
    }
}

#[component]
fn FlatListRow(item: FlatListItem, href: String) -> Element {
    let title = rsx! {
        span { style: "font-weight: 500;", "{item.title}" }
        if item.is_favorite {
            span { class: "favorite", style: "margin-left: 6px; color: #f59e0b;", "★" }
        }
    };

    rsx! {
        li {
            class: "flat-list-item",
            style: "padding: 12px 16px; border-bottom: 1px solid #f3f4f6;",

            if href.is_empty() {
                div { {title.clone()} }
            } else {
                NavLink { to: href.clone(), {title} }
            }

            if !item.sub_text.is_empty() {
                div {
                    style: "font-size: 0.875rem; color: #6b7280; margin-top: 2px;",
                    "{item.sub_text}"
                }
            }
        }
    }
}
