//! PostgreSQL job repository.

use async_trait::async_trait;
use sqlx::PgConnection;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_core::traits::Repository;
use jobboard_entity::job::JobRow;

use crate::connection::DatabasePool;

macro_rules! job_columns {
    () => {
        "id, title, description, organisation, location, grade, assignment_type, \
         personal_spec, nationality_requirement, summary, apply_url, benefits, \
         profession, apply_detail, salary, closing_date, job_numbers, contacts, \
         contact_name, contact_email, contact_phone, recruitment_email"
    };
}

const SELECT_ALL: &str = concat!("SELECT ", job_columns!(), " FROM jobs ORDER BY seq ASC");

const SELECT_BY_ID: &str = concat!("SELECT ", job_columns!(), " FROM jobs WHERE id = $1");

const INSERT: &str = concat!(
    "INSERT INTO jobs (",
    job_columns!(),
    ") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
     $16, $17, $18, $19, $20, $21, $22) RETURNING ",
    job_columns!()
);

/// Repository for job postings stored in PostgreSQL.
#[derive(Debug, Clone)]
pub struct JobRepository {
    db: DatabasePool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<JobRow, str> for JobRepository {
    async fn list_all(&self) -> AppResult<Vec<JobRow>> {
        let mut session = self.db.session().await?;
        sqlx::query_as::<_, JobRow>(SELECT_ALL)
            .fetch_all(session.conn())
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<JobRow>> {
        let mut session = self.db.session().await?;
        sqlx::query_as::<_, JobRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(session.conn())
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    async fn insert(&self, row: &JobRow) -> AppResult<JobRow> {
        let mut session = self.db.session().await?;
        insert_row(session.conn(), row).await
    }

    async fn insert_many(&self, rows: &[JobRow]) -> AppResult<u64> {
        let mut tx = self.db.pool().begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for row in rows {
            insert_row(&mut *tx, row).await?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(rows.len() as u64)
    }

    async fn count(&self) -> AppResult<u64> {
        let mut session = self.db.session().await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(session.conn())
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;
        Ok(total.max(0) as u64)
    }
}

/// Insert one row on an already checked-out connection.
async fn insert_row(conn: &mut PgConnection, row: &JobRow) -> AppResult<JobRow> {
    sqlx::query_as::<_, JobRow>(INSERT)
        .bind(&row.id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(&row.organisation)
        .bind(&row.location)
        .bind(&row.grade)
        .bind(&row.assignment_type)
        .bind(&row.personal_spec)
        .bind(&row.nationality_requirement)
        .bind(&row.summary)
        .bind(&row.apply_url)
        .bind(&row.benefits)
        .bind(&row.profession)
        .bind(&row.apply_detail)
        .bind(&row.salary)
        .bind(&row.closing_date)
        .bind(row.job_numbers)
        .bind(row.contacts)
        .bind(&row.contact_name)
        .bind(&row.contact_email)
        .bind(&row.contact_phone)
        .bind(&row.recruitment_email)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if duplicate {
                AppError::with_source(
                    ErrorKind::Conflict,
                    format!("Job with ID '{}' already exists", row.id),
                    e,
                )
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create job", e)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_binds_every_column() {
        let columns = job_columns!().split(',').count();
        assert_eq!(columns, 22);
        assert!(INSERT.contains("$22) RETURNING"));
        assert!(!INSERT.contains("$23"));
    }

    #[test]
    fn test_list_is_in_insertion_order() {
        assert!(SELECT_ALL.ends_with("ORDER BY seq ASC"));
        assert!(!SELECT_ALL.contains("seq,"));
    }
}
