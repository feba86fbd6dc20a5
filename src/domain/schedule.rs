use serde::{Deserialize, Serialize};

use crate::domain::list_item::FlatListItem;
use crate::services::ScheduleError;

pub const MAX_NAME_LEN: usize = 255;

/// A schedule as shown on the details page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// List projection returned by the `schedules` query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl ScheduleNode {
    pub fn to_list_item(&self) -> FlatListItem {
        map_schedule_node(self)
    }
}

/// Row mapping used by the schedule list. Never fails; a missing
/// description becomes an empty sub text.
pub fn map_schedule_node(node: &ScheduleNode) -> FlatListItem {
    FlatListItem {
        title: node.name.clone(),
        sub_text: node.description.clone().unwrap_or_default(),
        url: node.id.clone(),
        is_favorite: node.is_favorite,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Connection<U> {
        Connection {
            nodes: self.nodes.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }
}

/// Input of the `schedules` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSearchOptions {
    pub favorites_first: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ScheduleSearchOptions {
    /// The fixed filter of the schedule list.
    pub fn favorites_first() -> Self {
        Self {
            favorites_first: true,
            ..Default::default()
        }
    }

    pub fn with_page(mut self, first: u32, after: Option<String>) -> Self {
        self.first = Some(first);
        self.after = after;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        let search = search.trim();
        self.search = if search.is_empty() {
            None
        } else {
            Some(search.to_string())
        };
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleInput {
    pub name: String,
    pub description: String,
    pub time_zone: String,
    pub favorite: bool,
}

impl CreateScheduleInput {
    pub fn new(name: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            time_zone: time_zone.into(),
            favorite: true,
        }
    }

    /// Trims the text fields and rejects input the backend would refuse.
    pub fn validate(mut self) -> Result<Self, ScheduleError> {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        self.time_zone = self.time_zone.trim().to_string();

        if self.name.is_empty() {
            return Err(ScheduleError::Validation {
                field: "name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ScheduleError::Validation {
                field: "name".to_string(),
                reason: format!("must be at most {} characters", MAX_NAME_LEN),
            });
        }
        if self.time_zone.is_empty() {
            return Err(ScheduleError::Validation {
                field: "timeZone".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(self)
    }
}
