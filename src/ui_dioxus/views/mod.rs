pub mod page_not_found;
pub mod schedule_details;
pub mod schedule_list;
pub mod schedule_sub_lists;
pub mod simple_list_page;

pub use page_not_found::PageNotFound;
pub use schedule_details::ScheduleDetails;
pub use schedule_list::ScheduleList;
pub use schedule_sub_lists::{
    ScheduleAssignedToList, ScheduleOnCallNotificationsList, ScheduleOverrideList,
    ScheduleRuleList, ScheduleShiftList,
};
pub use simple_list_page::{ListQuery, SimpleListPage};
