use dioxus_desktop::{Config, WindowBuilder};
use oncall_schedules::ui_dioxus::App;
use tracing::info;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting on-call schedules");

    let config = Config::default().with_window(WindowBuilder::new().with_title("On-Call Schedules"));

    // Launch the Dioxus desktop app
    dioxus_desktop::launch::launch(App, vec![], config);
}
