pub mod graphql;
pub mod schedule_repository;

use std::sync::Arc;

use crate::config::AppConfig;

pub use graphql::GraphQLClient;
#[cfg(test)]
pub use schedule_repository::MockScheduleRepository;
pub use schedule_repository::{GraphQLScheduleRepository, ScheduleRepository};

/// Shared handle used by the service layer.
pub type SharedScheduleRepository = Arc<dyn ScheduleRepository>;

pub fn connect(config: &AppConfig) -> SharedScheduleRepository {
    Arc::new(GraphQLScheduleRepository::new(GraphQLClient::new(config)))
}
