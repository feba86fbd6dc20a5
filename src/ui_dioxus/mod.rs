// Dioxus UI: router, pages and dialogs for on-call schedules
pub mod app;
pub mod components;
pub mod route_table;
pub mod router;
pub mod views;


pub use app::App;
pub use route_table::ScheduleRoute;
pub use router::{Route, ScheduleRouter};
