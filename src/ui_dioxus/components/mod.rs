pub mod confirmation_dialog;
pub mod flat_list;
pub mod nav_link;
pub mod schedule_create_dialog;
pub mod schedule_delete_dialog;

pub use confirmation_dialog::ConfirmationDialog;
pub use flat_list::FlatList;
pub use nav_link::NavLink;
pub use schedule_create_dialog::ScheduleCreateDialog;
pub use schedule_delete_dialog::ScheduleDeleteDialog;
