use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::list_item::FlatListItem;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TargetType {
    User,
    Rotation,
    EscalationPolicy,
    Schedule,
    SlackChannel,
    #[serde(other)]
    Other,
}

impl TargetType {
    pub fn label(&self) -> &'static str {
        match self {
            TargetType::User => "User",
            TargetType::Rotation => "Rotation",
            TargetType::EscalationPolicy => "Escalation Policy",
            TargetType::Schedule => "Schedule",
            TargetType::SlackChannel => "Slack Channel",
            TargetType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Target {
    pub id: String,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    #[serde(default)]
    pub name: String,
}

impl Target {
    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRule {
    pub id: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub weekday_filter: Vec<bool>,
}

/// An assignment of the schedule: who is on call and under which rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTarget {
    pub target: Target,
    #[serde(default)]
    pub rules: Vec<ScheduleRule>,
}

impl ScheduleTarget {
    pub fn to_list_item(&self) -> FlatListItem {
        let rules = match self.rules.len() {
            1 => "1 rule".to_string(),
            n => format!("{} rules", n),
        };
        FlatListItem {
            title: self.target.display_name().to_string(),
            sub_text: format!("{} · {}", self.target.target_type.label(), rules),
            url: target_url(&self.target),
            is_favorite: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnCallNotificationRule {
    pub id: String,
    pub target: Target,
    /// Clock time (`HH:MM`) for daily notifications; absent when the rule
    /// fires on every on-call change.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub weekday_filter: Option<Vec<bool>>,
}

impl OnCallNotificationRule {
    pub fn to_list_item(&self) -> FlatListItem {
        let sub_text = match &self.time {
            None => "Notifies when on-call changes".to_string(),
            Some(time) => {
                let days = self
                    .weekday_filter
                    .as_deref()
                    .map(format_weekdays)
                    .unwrap_or_else(|| "every day".to_string());
                format!("Notifies daily at {} ({})", time, days)
            }
        };
        FlatListItem {
            title: self.target.display_name().to_string(),
            sub_text,
            url: String::new(),
            is_favorite: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserOverride {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub add_user: Option<UserRef>,
    #[serde(default)]
    pub remove_user: Option<UserRef>,
}

impl UserOverride {
    pub fn title(&self) -> String {
        match (&self.add_user, &self.remove_user) {
            (Some(add), Some(remove)) => format!("Replace {} with {}", remove.name, add.name),
            (Some(add), None) => format!("Add {}", add.name),
            (None, Some(remove)) => format!("Remove {}", remove.name),
            (None, None) => "Override".to_string(),
        }
    }

    pub fn to_list_item(&self) -> FlatListItem {
        FlatListItem {
            title: self.title(),
            sub_text: format_span(self.start, self.end),
            url: String::new(),
            is_favorite: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub truncated: bool,
}

impl Shift {
    pub fn to_list_item(&self) -> FlatListItem {
        let title = match &self.user {
            Some(user) if !user.name.is_empty() => user.name.clone(),
            _ => self.user_id.clone(),
        };
        let mut sub_text = format_span(self.start, self.end);
        if self.truncated {
            sub_text.push_str(" (truncated)");
        }
        FlatListItem {
            title,
            sub_text,
            url: format!("/users/{}", self.user_id),
            is_favorite: false,
        }
    }
}

/// Escalation policies using the schedule link to their own pages.
pub fn assigned_policy_item(target: &Target) -> FlatListItem {
    FlatListItem {
        title: target.display_name().to_string(),
        sub_text: String::new(),
        url: format!("/escalation-policies/{}", target.id),
        is_favorite: false,
    }
}

fn target_url(target: &Target) -> String {
    match target.target_type {
        TargetType::User => format!("/users/{}", target.id),
        TargetType::Rotation => format!("/rotations/{}", target.id),
        TargetType::EscalationPolicy => format!("/escalation-policies/{}", target.id),
        TargetType::Schedule => format!("/schedules/{}", target.id),
        TargetType::SlackChannel | TargetType::Other => String::new(),
    }
}

/// `[true; 7]` is "every day"; otherwise the enabled day names, Sunday first.
pub fn format_weekdays(filter: &[bool]) -> String {
    if filter.len() == 7 && filter.iter().all(|d| *d) {
        return "every day".to_string();
    }
    let days: Vec<&str> = filter
        .iter()
        .zip(WEEKDAYS)
        .filter(|(enabled, _)| **enabled)
        .map(|(_, name)| name)
        .collect();
    if days.is_empty() {
        "never".to_string()
    } else {
        days.join(", ")
    }
}

pub fn format_span(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "{} to {} UTC",
        start.format("%Y-%m-%d %H:%M"),
        end.format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(name: &str) -> Option<UserRef> {
        Some(UserRef {
            id: format!("u-{}", name),
            name: name.to_string(),
        })
    }

    fn override_with(add: Option<UserRef>, remove: Option<UserRef>) -> UserOverride {
        UserOverride {
            id: "o1".to_string(),
            start: "2026-10-16T09:00:00Z".parse().unwrap(),
            end: "2026-10-17T09:00:00Z".parse().unwrap(),
            add_user: add,
            remove_user: remove,
        }
    }

    #[test]
    fn override_titles() {
        assert_eq!(override_with(user("Ana"), None).title(), "Add Ana");
        assert_eq!(override_with(None, user("Bo")).title(), "Remove Bo");
        assert_eq!(
            override_with(user("Ana"), user("Bo")).title(),
            "Replace Bo with Ana"
        );
        assert_eq!(
            override_with(user("Ana"), None).to_list_item().sub_text,
            "2026-10-16 09:00 to 2026-10-17 09:00 UTC"
        );
    }

    #[test]
    fn shift_falls_back_to_user_id_and_marks_truncation() {
        let shift: Shift = serde_json::from_value(json!({
            "userID": "u1",
            "user": null,
            "start": "2026-10-16T00:00:00Z",
            "end": "2026-10-16T08:00:00Z",
            "truncated": true
        }))
        .unwrap();

        let item = shift.to_list_item();
        assert_eq!(item.title, "u1");
        assert!(item.sub_text.ends_with("(truncated)"));
        assert_eq!(item.url, "/users/u1");
    }

    #[test]
    fn target_types_deserialize_camel_case() {
        let target: Target = serde_json::from_value(
            json!({"id": "r1", "type": "rotation", "name": "Primary rotation"}),
        )
        .unwrap();
        assert_eq!(target.target_type, TargetType::Rotation);

        let unknown: Target =
            serde_json::from_value(json!({"id": "x", "type": "heartbeatMonitor", "name": "hb"}))
                .unwrap();
        assert_eq!(unknown.target_type, TargetType::Other);
    }

    #[test]
    fn schedule_target_row_counts_rules() {
        let assignment: ScheduleTarget = serde_json::from_value(json!({
            "target": {"id": "r1", "type": "rotation", "name": "Primary rotation"},
            "rules": [{"id": "1", "start": "00:00", "end": "00:00", "weekdayFilter": [true, true, true, true, true, true, true]}]
        }))
        .unwrap();

        let item = assignment.to_list_item();
        assert_eq!(item.title, "Primary rotation");
        assert_eq!(item.sub_text, "Rotation · 1 rule");
        assert_eq!(item.url, "/rotations/r1");
    }

    #[test]
    fn notification_rule_rows() {
        let on_change: OnCallNotificationRule = serde_json::from_value(json!({
            "id": "n1",
            "target": {"id": "c1", "type": "slackChannel", "name": "#ops"}
        }))
        .unwrap();
        assert_eq!(
            on_change.to_list_item().sub_text,
            "Notifies when on-call changes"
        );

        let daily: OnCallNotificationRule = serde_json::from_value(json!({
            "id": "n2",
            "target": {"id": "c1", "type": "slackChannel", "name": "#ops"},
            "time": "09:00",
            "weekdayFilter": [false, true, false, true, false, false, false]
        }))
        .unwrap();
        assert_eq!(
            daily.to_list_item().sub_text,
            "Notifies daily at 09:00 (Mon, Wed)"
        );
    }

    #[test]
    fn weekday_formatting() {
        assert_eq!(format_weekdays(&[true; 7]), "every day");
        assert_eq!(format_weekdays(&[false; 7]), "never");
        assert_eq!(
            format_weekdays(&[true, false, false, false, false, false, true]),
            "Sun, Sat"
        );
    }

    #[test]
    fn assigned_policy_links_to_policy_page() {
        let target = Target {
            id: "ep1".to_string(),
            target_type: TargetType::EscalationPolicy,
            name: "Default".to_string(),
        };
        assert_eq!(assigned_policy_item(&target).url, "/escalation-policies/ep1");
    }
}
