use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};

#[cfg(test)]
use mockall::automock;

use crate::domain::assignment::{OnCallNotificationRule, ScheduleTarget, Shift, Target, UserOverride};
use crate::domain::schedule::{
    Connection, CreateScheduleInput, Schedule, ScheduleNode, ScheduleSearchOptions,
};
use crate::repository::graphql::GraphQLClient;
use crate::services::ScheduleError;

/// Everything the schedule pages read from or write to the backend.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn list_schedules(
        &self,
        options: ScheduleSearchOptions,
    ) -> Result<Connection<ScheduleNode>, ScheduleError>;

    async fn get_schedule(&self, id: &str) -> Result<Schedule, ScheduleError>;

    /// Returns the id of the new schedule.
    async fn create_schedule(&self, input: CreateScheduleInput) -> Result<String, ScheduleError>;

    async fn delete_schedule(&self, id: &str) -> Result<(), ScheduleError>;

    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<(), ScheduleError>;

    async fn schedule_targets(&self, id: &str) -> Result<Vec<ScheduleTarget>, ScheduleError>;

    async fn on_call_notification_rules(
        &self,
        id: &str,
    ) -> Result<Vec<OnCallNotificationRule>, ScheduleError>;

    async fn assigned_escalation_policies(&self, id: &str) -> Result<Vec<Target>, ScheduleError>;

    async fn user_overrides(
        &self,
        id: &str,
        first: u32,
        after: Option<String>,
    ) -> Result<Connection<UserOverride>, ScheduleError>;

    async fn shifts(
        &self,
        id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Shift>, ScheduleError>;
}

#[derive(Deserialize)]
struct SchedulesData {
    data: Connection<ScheduleNode>,
}

#[derive(Deserialize)]
struct ScheduleData<T> {
    schedule: Option<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TargetsField {
    targets: Vec<ScheduleTarget>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationRulesField {
    on_call_notification_rules: Vec<OnCallNotificationRule>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignedToField {
    assigned_to: Vec<Target>,
}

#[derive(Deserialize)]
struct ShiftsField {
    shifts: Vec<Shift>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserOverridesData {
    user_overrides: Connection<UserOverride>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateScheduleData {
    create_schedule: Option<CreatedId>,
}

#[derive(Deserialize)]
struct CreatedId {
    id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAllData {
    delete_all: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetFavoriteData {
    set_favorite: bool,
}

#[derive(Clone)]
pub struct GraphQLScheduleRepository {
    client: GraphQLClient,
}

impl GraphQLScheduleRepository {
    pub fn new(client: GraphQLClient) -> Self {
        Self { client }
    }

    async fn schedule_field<T: serde::de::DeserializeOwned>(
        &self,
        id: &str,
        document: &str,
    ) -> Result<T, ScheduleError> {
        let data: ScheduleData<T> = self.client.execute(document, json!({ "id": id })).await?;
        data.schedule.ok_or_else(|| ScheduleError::ScheduleNotFound { id: id.to_string() })
    }
}

#[async_trait]
impl ScheduleRepository for GraphQLScheduleRepository {
    #[instrument(skip(self))]
    async fn list_schedules(
        &self,
        options: ScheduleSearchOptions,
    ) -> Result<Connection<ScheduleNode>, ScheduleError> {
        let data: SchedulesData = self
            .client
            .execute(
                r#"
                query schedulesQuery($input: ScheduleSearchOptions) {
                    data: schedules(input: $input) {
                        nodes { id name description isFavorite }
                        pageInfo { hasNextPage endCursor }
                    }
                }
                "#,
                json!({ "input": options }),
            )
            .await?;
        debug!("Fetched {} schedules", data.data.nodes.len());
        Ok(data.data)
    }

    #[instrument(skip(self))]
    async fn get_schedule(&self, id: &str) -> Result<Schedule, ScheduleError> {
        self.schedule_field(
            id,
            r#"
            query scheduleDetails($id: ID!) {
                schedule(id: $id) { id name description timeZone isFavorite }
            }
            "#,
        )
        .await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_schedule(&self, input: CreateScheduleInput) -> Result<String, ScheduleError> {
        let data: CreateScheduleData = self
            .client
            .execute(
                r#"
                mutation createSchedule($input: CreateScheduleInput!) {
                    createSchedule(input: $input) { id }
                }
                "#,
                json!({ "input": input }),
            )
            .await?;
        let created = data.create_schedule.ok_or_else(|| ScheduleError::MissingData {
            field: "createSchedule".to_string(),
        })?;
        info!("Created schedule {}", created.id);
        Ok(created.id)
    }

    #[instrument(skip(self))]
    async fn delete_schedule(&self, id: &str) -> Result<(), ScheduleError> {
        let data: DeleteAllData = self
            .client
            .execute(
                r#"
                mutation deleteSchedule($input: [TargetInput!]!) {
                    deleteAll(input: $input)
                }
                "#,
                json!({ "input": [{ "type": "schedule", "id": id }] }),
            )
            .await?;
        if !data.delete_all {
            return Err(ScheduleError::ScheduleNotFound { id: id.to_string() });
        }
        info!("Deleted schedule {}", id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<(), ScheduleError> {
        let data: SetFavoriteData = self
            .client
            .execute(
                r#"
                mutation setFavorite($input: SetFavoriteInput!) {
                    setFavorite(input: $input)
                }
                "#,
                json!({
                    "input": {
                        "target": { "type": "schedule", "id": id },
                        "favorite": favorite,
                    }
                }),
            )
            .await?;
        if !data.set_favorite {
            return Err(ScheduleError::ScheduleNotFound { id: id.to_string() });
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn schedule_targets(&self, id: &str) -> Result<Vec<ScheduleTarget>, ScheduleError> {
        let field: TargetsField = self
            .schedule_field(
                id,
                r#"
                query scheduleRules($id: ID!) {
                    schedule(id: $id) {
                        targets {
                            target { id type name }
                            rules { id start end weekdayFilter }
                        }
                    }
                }
                "#,
            )
            .await?;
        Ok(field.targets)
    }

    #[instrument(skip(self))]
    async fn on_call_notification_rules(
        &self,
        id: &str,
    ) -> Result<Vec<OnCallNotificationRule>, ScheduleError> {
        let field: NotificationRulesField = self
            .schedule_field(
                id,
                r#"
                query scheduleNotificationRules($id: ID!) {
                    schedule(id: $id) {
                        onCallNotificationRules {
                            id
                            target { id type name }
                            time
                            weekdayFilter
                        }
                    }
                }
                "#,
            )
            .await?;
        Ok(field.on_call_notification_rules)
    }

    #[instrument(skip(self))]
    async fn assigned_escalation_policies(&self, id: &str) -> Result<Vec<Target>, ScheduleError> {
        let field: AssignedToField = self
            .schedule_field(
                id,
                r#"
                query scheduleAssignedTo($id: ID!) {
                    schedule(id: $id) {
                        assignedTo { id type name }
                    }
                }
                "#,
            )
            .await?;
        Ok(field.assigned_to)
    }

    #[instrument(skip(self))]
    async fn user_overrides(
        &self,
        id: &str,
        first: u32,
        after: Option<String>,
    ) -> Result<Connection<UserOverride>, ScheduleError> {
        let mut input = json!({ "scheduleID": id, "first": first });
        if let Some(after) = after {
            input["after"] = json!(after);
        }
        let data: UserOverridesData = self
            .client
            .execute(
                r#"
                query scheduleOverrides($input: UserOverrideSearchOptions) {
                    userOverrides(input: $input) {
                        nodes {
                            id
                            start
                            end
                            addUser { id name }
                            removeUser { id name }
                        }
                        pageInfo { hasNextPage endCursor }
                    }
                }
                "#,
                json!({ "input": input }),
            )
            .await?;
        Ok(data.user_overrides)
    }

    #[instrument(skip(self))]
    async fn shifts(
        &self,
        id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Shift>, ScheduleError> {
        let data: ScheduleData<ShiftsField> = self
            .client
            .execute(
                r#"
                query scheduleShifts($id: ID!, $start: ISOTimestamp!, $end: ISOTimestamp!) {
                    schedule(id: $id) {
                        shifts(start: $start, end: $end) {
                            userID
                            user { id name }
                            start
                            end
                            truncated
                        }
                    }
                }
                "#,
                json!({
                    "id": id,
                    "start": start.to_rfc3339(),
                    "end": end.to_rfc3339(),
                }),
            )
            .await?;
        let field = data
            .schedule
            .ok_or_else(|| ScheduleError::ScheduleNotFound { id: id.to_string() })?;
        Ok(field.shifts)
    }
}
