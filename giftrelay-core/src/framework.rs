use sqlx::SqlitePool;

/// Processor handle over the shared connection pool.
///
/// Store queries are modelled as kanau messages processed against this
/// handle; compound updates open an explicit transaction via [`begin`].
///
/// [`begin`]: DatabaseProcessor::begin
#[derive(Clone)]
pub struct DatabaseProcessor {
    pub pool: SqlitePool,
}

impl DatabaseProcessor {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) async fn begin(
        &self,
    ) -> Result<sqlx::Transaction<'static, sqlx::Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }
}
