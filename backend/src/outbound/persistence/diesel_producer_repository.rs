//! PostgreSQL-backed `ProducerRepository` implementation using Diesel ORM.
//!
//! Single-row writes are one statement each, so they commit or fail as a
//! unit. Mock batches insert every row inside one transaction and skip rows
//! whose document number already exists via `ON CONFLICT DO NOTHING`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{ProducerRepository, ProducerRepositoryError};
use crate::domain::{PageRequest, ProducerDetails, ProducerId, ProducerRecord};

use super::models::{ProducerRow, ProducerWriteRow};
use super::pool::{DbPool, PoolError};
use super::schema::producers;

/// Diesel-backed implementation of the [`ProducerRepository`] port.
///
/// # Examples
///
/// ```rust,no_run
/// use producer_registry::outbound::persistence::{
///     DbPool, DieselProducerRepository, PoolConfig,
/// };
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/producer_registry")).await?;
/// let repository = DieselProducerRepository::new(pool);
/// # let _ = repository;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DieselProducerRepository {
    pool: DbPool,
}

impl DieselProducerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProducerRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ProducerRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: DieselError) -> ProducerRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => ProducerRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => ProducerRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::DatabaseError(DatabaseErrorKind::UnableToSendCommand, _) => {
            ProducerRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => {
            ProducerRepositoryError::query(info.message().to_owned())
        }
        _ => ProducerRepositoryError::query("database error"),
    }
}

/// Like [`map_diesel_error`], but reports unique violations as a duplicate
/// `document_number`.
fn map_write_error(document_number: &str) -> impl FnOnce(DieselError) -> ProducerRepositoryError {
    let document_number = document_number.to_owned();
    move |error| match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            debug!(
                constraint = info.constraint_name(),
                "producer write hit unique constraint"
            );
            ProducerRepositoryError::duplicate_document(document_number)
        }
        other => map_diesel_error(other),
    }
}

#[async_trait]
impl ProducerRepository for DieselProducerRepository {
    async fn insert(
        &self,
        details: &ProducerDetails,
    ) -> Result<ProducerRecord, ProducerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(producers::table)
            .values(&ProducerWriteRow::from(details))
            .returning(ProducerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_write_error(details.document_number()))?;
        Ok(row.into())
    }

    async fn insert_batch(
        &self,
        batch: &[ProducerDetails],
    ) -> Result<usize, ProducerRepositoryError> {
        if batch.is_empty() {
            return Ok(0);
        }
        let rows: Vec<ProducerWriteRow<'_>> = batch.iter().map(ProducerWriteRow::from).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                diesel::insert_into(producers::table)
                    .values(&rows)
                    .on_conflict(producers::document_number)
                    .do_nothing()
                    .execute(conn)
                    .await
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn find_by_id(
        &self,
        id: ProducerId,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = producers::table
            .find(id.get())
            .select(ProducerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(ProducerRecord::from))
    }

    async fn find_by_document(
        &self,
        document_number: &str,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = producers::table
            .filter(producers::document_number.eq(document_number))
            .select(ProducerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(ProducerRecord::from))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ProducerRecord>, ProducerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = producers::table
            .order(producers::id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .select(ProducerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(ProducerRecord::from).collect())
    }

    async fn replace(
        &self,
        id: ProducerId,
        details: &ProducerDetails,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(producers::table.find(id.get()))
            .set(&ProducerWriteRow::from(details))
            .returning(ProducerRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_write_error(details.document_number()))?;
        Ok(row.map(ProducerRecord::from))
    }

    async fn delete(&self, id: ProducerId) -> Result<bool, ProducerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(producers::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    struct ConstraintInfo(&'static str);

    impl diesel::result::DatabaseErrorInformation for ConstraintInfo {
        fn message(&self) -> &str {
            self.0
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            Some("producers")
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            Some("producers_document_number_key")
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, message: &'static str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(ConstraintInfo(message)))
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(err, ProducerRepositoryError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let err = map_diesel_error(DieselError::NotFound);
        assert_eq!(err, ProducerRepositoryError::query("record not found"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_diesel_error(database_error(
            DatabaseErrorKind::ClosedConnection,
            "server closed the connection",
        ));
        assert!(matches!(err, ProducerRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn unique_violation_on_write_is_a_duplicate_document() {
        let err = map_write_error("11144477735")(database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint",
        ));
        assert_eq!(
            err,
            ProducerRepositoryError::duplicate_document("11144477735")
        );
    }

    #[rstest]
    fn check_violation_on_write_is_a_query_error() {
        let err = map_write_error("11144477735")(database_error(
            DatabaseErrorKind::CheckViolation,
            "violates check constraint",
        ));
        assert!(matches!(err, ProducerRepositoryError::Query { .. }));
    }

    #[rstest]
    fn rows_convert_to_records() {
        let row = ProducerRow {
            id: 12,
            document_number: "11144477735".to_owned(),
            producer_name: "Ana Souza".to_owned(),
            farm_name: "Boa Vista".to_owned(),
            city: "Sorriso".to_owned(),
            state: "MT".to_owned(),
            total_area: 100.0,
            farmable_area: 60.0,
            vegetation_area: 30.0,
            crops: vec!["Soja".to_owned()],
        };

        let record = ProducerRecord::from(row);

        assert_eq!(record.id(), ProducerId::new(12));
        assert_eq!(record.details().crops(), ["Soja"]);
    }
}
