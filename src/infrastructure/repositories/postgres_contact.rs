// src/infrastructure/repositories/postgres_contact.rs
use super::error::map_sqlx;
use crate::domain::contact::{
    ContactRepository, ContactStatus, ContactSubmission, ContactSubmissionId, EmailAddress,
    Message, NewContactSubmission, SenderName,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str =
    "id, name, email, phone, car_model_interest, message, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    car_model_interest: Option<String>,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContactRow> for ContactSubmission {
    type Error = DomainError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        Ok(ContactSubmission {
            id: ContactSubmissionId::new(row.id)?,
            name: SenderName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            phone: row.phone,
            car_model_interest: row.car_model_interest,
            message: Message::new(row.message)?,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn apply_status(builder: &mut QueryBuilder<'_, Postgres>, status: Option<ContactStatus>) {
    if let Some(status) = status {
        builder.push(" WHERE status = ");
        builder.push_bind(status.as_str());
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, submission: NewContactSubmission) -> DomainResult<ContactSubmission> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "INSERT INTO contact_submissions
                 (name, email, phone, car_model_interest, message, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {COLUMNS}"
        ))
        .bind(submission.name.as_str())
        .bind(submission.email.as_str())
        .bind(submission.phone)
        .bind(submission.car_model_interest)
        .bind(submission.message.as_str())
        .bind(ContactStatus::New.as_str())
        .bind(submission.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContactSubmission::try_from(row)
    }

    async fn find_by_id(
        &self,
        id: ContactSubmissionId,
    ) -> DomainResult<Option<ContactSubmission>> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "SELECT {COLUMNS} FROM contact_submissions WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContactSubmission::try_from).transpose()
    }

    async fn list_page(
        &self,
        status: Option<ContactStatus>,
        page: PageRequest,
    ) -> DomainResult<(Vec<ContactSubmission>, u64)> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM contact_submissions");
        apply_status(&mut count, status);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM contact_submissions"));
        apply_status(&mut builder, status);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<ContactRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let submissions = rows
            .into_iter()
            .map(ContactSubmission::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((submissions, u64::try_from(total).unwrap_or_default()))
    }

    async fn update_status(
        &self,
        id: ContactSubmissionId,
        status: ContactStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Option<ContactSubmission>> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "UPDATE contact_submissions SET status = $1, updated_at = $2
             WHERE id = $3
             RETURNING {COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContactSubmission::try_from).transpose()
    }

    async fn delete(&self, id: ContactSubmissionId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
