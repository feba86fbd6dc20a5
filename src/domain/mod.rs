pub mod assignment;
pub mod list_item;
pub mod pending_deletion;
pub mod schedule;

pub use list_item::{FlatListItem, ListPage};
pub use pending_deletion::PendingDeletion;
pub use schedule::{
    map_schedule_node, Connection, CreateScheduleInput, PageInfo, Schedule, ScheduleNode,
    ScheduleSearchOptions,
};
