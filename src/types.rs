pub use crate::utils::database;
use async_trait::async_trait;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub jwt_secret: String,
    pub token_lifetime_minutes: i64,
}

#[derive(Clone)]
pub struct StorageContext {
    pub uploads_dir: PathBuf,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: AuthContext,
    pub storage: StorageContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_lifetime_minutes: i64,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub uploads_dir: PathBuf,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET not set");
        let token_lifetime_minutes = env::var("TOKEN_LIFETIME_MINUTES")
            .unwrap_or_else(|_| "1440".to_string())
            .parse::<i64>()
            .expect("Invalid TOKEN_LIFETIME_MINUTES number");
        let uploads_dir = env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            auth: AuthConfig {
                jwt_secret,
                token_lifetime_minutes,
            },
            storage: StorageConfig {
                uploads_dir: PathBuf::from(uploads_dir),
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        std::fs::create_dir_all(&self.storage.uploads_dir)
            .expect("Failed to create the uploads directory");

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            auth: AuthContext {
                jwt_secret: self.auth.jwt_secret,
                token_lifetime_minutes: self.auth.token_lifetime_minutes,
            },
            storage: StorageContext {
                uploads_dir: self.storage.uploads_dir,
            },
        }
    }
}
