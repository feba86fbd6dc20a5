use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

/// Internal link. Falls back to a plain anchor when rendered outside a
/// router, which is how the views are rendered in tests.
#[component]
pub fn NavLink(to: String, children: Element) -> Element {
    if try_consume_context::<RouterContext>().is_some() {
        rsx! {
            Link { to: to, {children} }
        }
    } else {
        rsx! {
            a { href: "{to}", {children} }
        }
    }
}

/// Router handle captured at render time for use in async handlers.
pub fn use_router_handle() -> Option<RouterContext> {
    try_consume_context::<RouterContext>()
}

pub fn navigate_to(router: Option<RouterContext>, path: String) {
    match router {
        Some(router) => {
            debug!("Navigating to {}", path);
            router.push(path);
        }
        None => debug!("No router, skipping navigation to {}", path),
    }
}
