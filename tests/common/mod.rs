#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use medilabo::db::{DbPool, establish_connection_pool};
use medilabo::models::auth::AuthenticatedUser;

pub const PATIENT_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/patients");
pub const NOTE_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/notes");

/// Long enough for the session key derivation.
pub const SECRET: &str = "0123456789012345678901234567890123456789012345678901234567890123";

/// A pooled SQLite database in a temporary directory, migrated on creation
/// and removed together with the directory when dropped.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn patients(name: &str) -> Self {
        Self::new(name, PATIENT_MIGRATIONS)
    }

    pub fn notes(name: &str) -> Self {
        Self::new(name, NOTE_MIGRATIONS)
    }

    fn new(name: &str, migrations: EmbeddedMigrations) -> Self {
        let dir = tempfile::tempdir().expect("failed to create a temporary directory");
        let path = dir.path().join(name);
        let database_url = path.to_string_lossy();
        let pool = establish_connection_pool(&database_url).expect("failed to build the pool");
        {
            let mut conn = pool.get().expect("failed to check out a connection");
            conn.run_pending_migrations(migrations)
                .expect("failed to run migrations");
        }
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// `Authorization` header value carrying a token every service accepts.
pub fn bearer(secret: &str) -> String {
    let token = AuthenticatedUser::new("tester")
        .to_jwt(secret)
        .expect("failed to sign a test token");
    format!("Bearer {token}")
}
