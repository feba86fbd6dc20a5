use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::domain::assignment::assigned_policy_item;
use crate::domain::list_item::{FlatListItem, ListPage};
use crate::domain::schedule::{map_schedule_node, CreateScheduleInput, Schedule, ScheduleSearchOptions};
use crate::repository::SharedScheduleRepository;
use crate::services::ScheduleError;

/// The fixed-shape lists shown under a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSubList {
    Rules,
    OnCallNotifications,
    AssignedTo,
    Shifts,
}

impl ScheduleSubList {
    pub fn title(&self) -> &'static str {
        match self {
            ScheduleSubList::Rules => "Assignments",
            ScheduleSubList::OnCallNotifications => "On-Call Notifications",
            ScheduleSubList::AssignedTo => "Escalation Policies",
            ScheduleSubList::Shifts => "Shifts",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ScheduleSubList::Rules => "No users or rotations are assigned to this schedule.",
            ScheduleSubList::OnCallNotifications => "No notification rules.",
            ScheduleSubList::AssignedTo => "No escalation policies use this schedule.",
            ScheduleSubList::Shifts => "No shifts in this time range.",
        }
    }
}

/// Request for one page of a paginated list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    pub search: String,
    pub after: Option<String>,
    pub first: u32,
}

pub struct ScheduleService {
    repository: SharedScheduleRepository,
    config: AppConfig,
}

impl ScheduleService {
    pub fn new(repository: SharedScheduleRepository, config: AppConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// First page request for list pages, sized from the config.
    pub fn first_page(&self, search: &str) -> PageRequest {
        PageRequest {
            search: search.to_string(),
            after: None,
            first: self.config.page_size,
        }
    }

    /// One page of schedules, favorites first, mapped to list rows.
    #[instrument(skip(self))]
    pub async fn schedule_page(&self, request: PageRequest) -> Result<ListPage, ScheduleError> {
        let options = ScheduleSearchOptions::favorites_first()
            .with_page(request.first, request.after)
            .with_search(&request.search);
        let connection = self.repository.list_schedules(options).await?;
        Ok(ListPage {
            items: connection.nodes.iter().map(map_schedule_node).collect(),
            page_info: connection.page_info,
        })
    }

    /// One page of overrides. The search text is not applied; the overrides
    /// query has no server-side filter.
    #[instrument(skip(self))]
    pub async fn override_page(
        &self,
        schedule_id: &str,
        request: PageRequest,
    ) -> Result<ListPage, ScheduleError> {
        let connection = self
            .repository
            .user_overrides(schedule_id, request.first, request.after)
            .await?;
        Ok(ListPage {
            items: connection.nodes.iter().map(|o| o.to_list_item()).collect(),
            page_info: connection.page_info,
        })
    }

    pub async fn schedule(&self, schedule_id: &str) -> Result<Schedule, ScheduleError> {
        self.repository.get_schedule(schedule_id).await
    }

    pub async fn create_schedule(&self, input: CreateScheduleInput) -> Result<String, ScheduleError> {
        let input = input.validate()?;
        self.repository.create_schedule(input).await
    }

    pub async fn delete_schedule(&self, schedule_id: &str) -> Result<(), ScheduleError> {
        self.repository.delete_schedule(schedule_id).await
    }

    pub async fn set_favorite(&self, schedule_id: &str, favorite: bool) -> Result<(), ScheduleError> {
        self.repository.set_favorite(schedule_id, favorite).await
    }

    /// Rows for one of the fixed lists under a schedule.
    #[instrument(skip(self))]
    pub async fn sub_list(
        &self,
        kind: ScheduleSubList,
        schedule_id: &str,
    ) -> Result<Vec<FlatListItem>, ScheduleError> {
        let items: Vec<FlatListItem> = match kind {
            ScheduleSubList::Rules => self
                .repository
                .schedule_targets(schedule_id)
                .await?
                .iter()
                .map(|t| t.to_list_item())
                .collect(),
            ScheduleSubList::OnCallNotifications => self
                .repository
                .on_call_notification_rules(schedule_id)
                .await?
                .iter()
                .map(|r| r.to_list_item())
                .collect(),
            ScheduleSubList::AssignedTo => self
                .repository
                .assigned_escalation_policies(schedule_id)
                .await?
                .iter()
                .map(assigned_policy_item)
                .collect(),
            ScheduleSubList::Shifts => {
                let (start, end) = self.shift_window(Utc::now())?;
                let mut shifts = self.repository.shifts(schedule_id, start, end).await?;
                shifts.sort_by(|a, b| a.start.cmp(&b.start));
                shifts.iter().map(|s| s.to_list_item()).collect()
            }
        };
        debug!("Loaded {} rows for {:?}", items.len(), kind);
        Ok(items)
    }

    /// `now` to `now + shift_window_days`.
    pub fn shift_window(
        &self,
        now: DateTime<Utc>,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), ScheduleError> {
        let days = self.config.shift_window_days;
        let end = Duration::try_days(days)
            .and_then(|span| now.checked_add_signed(span))
            .ok_or_else(|| ScheduleError::Validation {
                field: "shift_window_days".to_string(),
                reason: format!("{} days is out of range", days),
            })?;
        Ok((now, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assignment::{Shift, Target, TargetType, UserRef};
    use crate::domain::schedule::{Connection, PageInfo, ScheduleNode};
    use crate::repository::MockScheduleRepository;
    use mockall::predicate::*;
    use std::sync::Arc;

    fn service(mock: MockScheduleRepository) -> ScheduleService {
        ScheduleService::new(Arc::new(mock), AppConfig::default())
    }

    #[tokio::test]
    async fn schedule_page_uses_favorites_first_filter() {
        let mut mock = MockScheduleRepository::new();
        mock.expect_list_schedules()
            .with(eq(ScheduleSearchOptions {
                favorites_first: true,
                first: Some(15),
                after: Some("c1".to_string()),
                search: None,
            }))
            .times(1)
            .returning(|_| {
                Ok(Connection {
                    nodes: vec![
                        ScheduleNode {
                            id: "S1".to_string(),
                            name: "Primary".to_string(),
                            description: None,
                            is_favorite: true,
                        },
                        ScheduleNode {
                            id: "S2".to_string(),
                            name: "Secondary".to_string(),
                            description: Some("backup".to_string()),
                            is_favorite: false,
                        },
                    ],
                    page_info: PageInfo {
                        has_next_page: true,
                        end_cursor: Some("c2".to_string()),
                    },
                })
            });

        let service = service(mock);
        let mut request = service.first_page("");
        request.after = Some("c1".to_string());
        let page = service.schedule_page(request).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].title, "Primary");
        assert_eq!(page.items[0].sub_text, "");
        assert!(page.items[0].is_favorite);
        assert_eq!(page.items[1].url, "S2");
        assert_eq!(page.page_info.end_cursor.as_deref(), Some("c2"));
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_calling_backend() {
        let mut mock = MockScheduleRepository::new();
        mock.expect_create_schedule().times(0);

        let err = service(mock)
            .create_schedule(CreateScheduleInput::new("  ", "UTC"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Validation { .. }));
    }

    #[tokio::test]
    async fn create_sends_trimmed_input() {
        let mut mock = MockScheduleRepository::new();
        mock.expect_create_schedule()
            .withf(|input| input.name == "Ops" && input.time_zone == "UTC")
            .times(1)
            .returning(|_| Ok("S9".to_string()));

        let id = service(mock)
            .create_schedule(CreateScheduleInput::new(" Ops ", "UTC"))
            .await
            .unwrap();
        assert_eq!(id, "S9");
    }

    #[tokio::test]
    async fn assigned_to_rows_link_to_policies() {
        let mut mock = MockScheduleRepository::new();
        mock.expect_assigned_escalation_policies()
            .with(eq("S1"))
            .returning(|_| {
                Ok(vec![Target {
                    id: "ep1".to_string(),
                    target_type: TargetType::EscalationPolicy,
                    name: "Default".to_string(),
                }])
            });

        let rows = service(mock)
            .sub_list(ScheduleSubList::AssignedTo, "S1")
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].url, "/escalation-policies/ep1");
    }

    #[tokio::test]
    async fn shifts_are_sorted_by_start() {
        let mut mock = MockScheduleRepository::new();
        mock.expect_shifts().returning(|_, _, _| {
            let shift = |name: &str, start: &str, end: &str| Shift {
                user_id: format!("u-{}", name),
                user: Some(UserRef {
                    id: format!("u-{}", name),
                    name: name.to_string(),
                }),
                start: start.parse().unwrap(),
                end: end.parse().unwrap(),
                truncated: false,
            };
            Ok(vec![
                shift("Late", "2026-10-17T00:00:00Z", "2026-10-18T00:00:00Z"),
                shift("Early", "2026-10-16T00:00:00Z", "2026-10-17T00:00:00Z"),
            ])
        });

        let rows = service(mock).sub_list(ScheduleSubList::Shifts, "S1").await.unwrap();
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Early", "Late"]);
    }

    #[tokio::test]
    async fn missing_schedule_propagates_not_found() {
        let mut mock = MockScheduleRepository::new();
        mock.expect_schedule_targets()
            .returning(|id| Err(ScheduleError::ScheduleNotFound { id: id.to_string() }));

        let err = service(mock)
            .sub_list(ScheduleSubList::Rules, "gone")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn shift_window_spans_configured_days() {
        let service = service(MockScheduleRepository::new());
        let now: DateTime<Utc> = "2026-10-16T12:00:00Z".parse().unwrap();
        let (start, end) = service.shift_window(now).unwrap();
        assert_eq!(start, now);
        assert_eq!((end - start).num_days(), 14);
    }

    #[tokio::test]
    async fn oversized_shift_window_is_an_error_not_a_panic() {
        let mut mock = MockScheduleRepository::new();
        mock.expect_shifts().times(0);
        let config = AppConfig {
            shift_window_days: 100_000_000,
            ..AppConfig::default()
        };
        let service = ScheduleService::new(Arc::new(mock), config);

        let now: DateTime<Utc> = "2026-10-16T12:00:00Z".parse().unwrap();
        assert!(matches!(
            service.shift_window(now),
            Err(ScheduleError::Validation { .. })
        ));

        let err = service
            .sub_list(ScheduleSubList::Shifts, "S1")
            .await
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Validation { ref field, .. } if field == "shift_window_days"));
    }
}
