pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_profile_repository::UserProfileRepository;
pub use repositories::user_repository::UserRepository;

use sqlx::migrate::Migrator;

/// Schema migrations, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Bring the schema up to date.
pub async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await.map_err(DbError::from)
}
