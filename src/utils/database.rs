use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub async fn connect(database_url: &str) -> DatabaseConnection {
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(database_url)
        .await
        .unwrap_or_else(|err| {
            tracing::error!("{}", err);
            panic!("Failed to connect to database {}", database_url)
        });

    DatabaseConnection { pool }
}

pub async fn migrate(db_conn: DatabaseConnection) {
    if let Err(err) = sqlx::migrate!().run(&db_conn.pool).await {
        tracing::error!("{}", err);
        panic!("Failed to run database migrations");
    }
}
