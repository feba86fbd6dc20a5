use dioxus::prelude::*;
use futures::future::{FutureExt, LocalBoxFuture};
use std::future::Future;
use std::rc::Rc;
use tracing::warn;

use crate::domain::{FlatListItem, ListPage, PageInfo};
use crate::services::{PageRequest, ScheduleError};
use crate::ui_dioxus::components::FlatList;

type PageLoader = dyn Fn(PageRequest) -> LocalBoxFuture<'static, Result<ListPage, ScheduleError>>;

/// How a `SimpleListPage` fetches its pages. Compared by identity, so build
/// it once per component (`use_hook`, or `use_memo` when it depends on props).
/// A new query reloads the list from the first page.
#[derive(Clone)]
pub struct ListQuery(Rc<PageLoader>);

impl ListQuery {
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn(PageRequest) -> Fut + 'static,
        Fut: Future<Output = Result<ListPage, ScheduleError>> + 'static,
    {
        Self(Rc::new(move |request| load(request).boxed_local()))
    }

    pub fn load(&self, request: PageRequest) -> LocalBoxFuture<'static, Result<ListPage, ScheduleError>> {
        (self.0)(request)
    }
}

impl PartialEq for ListQuery {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Paginated list with an optional search box and "create" button.
#[component]
pub fn SimpleListPage(
    query: ReadOnlySignal<ListQuery>,
    base_path: String,
    page_size: u32,
    #[props(default = true)] searchable: bool,
    create_label: Option<String>,
    #[props(default)] on_create: EventHandler<()>,
    #[props(default)] empty_message: String,
) -> Element {
    let mut search = use_signal(String::new);
    let mut items = use_signal(Vec::<FlatListItem>::new);
    let mut page_info = use_signal(PageInfo::default);
    let mut loading = use_signal(|| true);
    let mut error_message = use_signal(|| None::<String>);
    // Bumped on every restart; stale responses are dropped.
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let query = query();
        let request = PageRequest {
            search: search(),
            after: None,
            first: page_size,
        };
        let current = *generation.peek() + 1;
        generation.set(current);
        loading.set(true);
        error_message.set(None);
        spawn(async move {
            let result = query.load(request).await;
            if *generation.peek() != current {
                return;
            }
            match result {
                Ok(page) => {
                    items.set(page.items);
                    page_info.set(page.page_info);
                }
                Err(e) => {
                    warn!("Failed to load list page: {}", e);
                    items.set(Vec::new());
                    error_message.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    });

    let load_more = move |_: MouseEvent| {
        let Some(after) = page_info.read().end_cursor.clone() else {
            return;
        };
        let query = query.peek().clone();
        let current = *generation.peek();
        let request = PageRequest {
            search: search.peek().clone(),
            after: Some(after),
            first: page_size,
        };
        loading.set(true);
        spawn(async move {
            let result = query.load(request).await;
            if *generation.peek() != current {
                return;
            }
            match result {
                Ok(page) => {
                    items.write().extend(page.items);
                    page_info.set(page.page_info);
                }
                Err(e) => {
                    warn!("Failed to load next page: {}", e);
                    error_message.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let create_button = match create_label {
        Some(label) => rsx! {
            button {
                class: "create-button",
                style: "padding: 8px 16px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer;",
                onclick: move |_| on_create.call(()),
                "Create {label}"
            }
        },
        None => None,
    };

    let error_banner = match error_message() {
        Some(message) => rsx! {
            div {
                class: "error-banner",
                style: "padding: 12px; background: #fee2e2; border: 1px solid #fca5a5; border-radius: 6px; color: #991b1b; margin-bottom: 20px;",
                "{message}"
            }
        },
        None => None,
    };

    let has_more = page_info.read().has_next_page;

    rsx! {
        div {
            class: "simple-list-page",
            style: "padding: 20px; max-width: 1000px; margin: 0 auto;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; gap: 12px;",
                if searchable {
                    input {
                        r#type: "search",
                        placeholder: "Search",
                        style: "flex: 1; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                }
                {create_button}
            }

            {error_banner}

            if loading() && items.read().is_empty() {
                div {
                    class: "loading",
                    style: "text-align: center; padding: 40px; color: #6b7280;",
                    "Loading..."
                }
            } else {
                FlatList {
                    items: items(),
                    base_path: base_path.clone(),
                    empty_message: empty_message.clone(),
                }
            }

            if has_more {
                button {
                    class: "load-more",
                    style: "margin-top: 16px; padding: 8px 16px; border: 1px solid #ddd; background: white; border-radius: 6px; cursor: pointer;",
                    disabled: loading(),
                    onclick: load_more,
                    if loading() { "Loading..." } else { "Load more" }
                }
            }
        }
    }
}
