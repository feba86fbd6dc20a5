use serde::{Deserialize, Serialize};

use crate::domain::schedule::PageInfo;

/// A row of the generic list components.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlatListItem {
    pub title: String,
    pub sub_text: String,
    /// Either absolute (`/escalation-policies/x`) or relative to the list page.
    pub url: String,
    pub is_favorite: bool,
}

impl FlatListItem {
    pub fn href(&self, base_path: &str) -> String {
        resolve_url(base_path, &self.url)
    }
}

/// One page of rows plus the cursor needed to fetch the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPage {
    pub items: Vec<FlatListItem>,
    pub page_info: PageInfo,
}

/// Resolves a row url against the path of the list page it is shown on.
pub fn resolve_url(base_path: &str, url: &str) -> String {
    if url.starts_with('/') || base_path.is_empty() {
        return url.to_string();
    }
    format!("{}/{}", base_path.trim_end_matches('/'), url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_resolve_against_base() {
        assert_eq!(resolve_url("/schedules", "S1"), "/schedules/S1");
        assert_eq!(resolve_url("/schedules/", "S1"), "/schedules/S1");
    }

    #[test]
    fn absolute_urls_are_kept() {
        assert_eq!(
            resolve_url("/schedules/S1", "/escalation-policies/E1"),
            "/escalation-policies/E1"
        );
        assert_eq!(resolve_url("", "S1"), "S1");
    }
}
