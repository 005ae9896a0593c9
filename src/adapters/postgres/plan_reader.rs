//! PostgreSQL implementation of PlanReader.
//!
//! Reads `profiles.plan_id` for the viewer. Profile ids are UUIDs.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};
use crate::ports::PlanReader;

/// PostgreSQL implementation of the PlanReader port.
pub struct PostgresPlanReader {
    pool: PgPool,
}

impl PostgresPlanReader {
    /// Creates a new PostgresPlanReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn parse_user_id_as_uuid(user_id: &UserId) -> Result<Uuid, DomainError> {
    Uuid::parse_str(user_id.as_str())
        .map_err(|e| ValidationError::invalid_format("user_id", e.to_string()).into())
}

#[async_trait]
impl PlanReader for PostgresPlanReader {
    async fn get_plan_id(&self, user_id: &UserId) -> Result<Option<String>, DomainError> {
        let id = parse_user_id_as_uuid(user_id)?;

        let row: Option<Option<String>> =
            sqlx::query_scalar("SELECT plan_id FROM profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to read plan_id: {}", e),
                    )
                })?;

        Ok(row.flatten())
    }
}
