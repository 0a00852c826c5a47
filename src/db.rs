use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::{fairing, Build, Rocket};

use crate::error::StorageError;
use crate::settings::Settings;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Handle on the inventory database.
///
/// Holds no connection: every call opens its own and closes it on return.
#[derive(Debug, Clone)]
pub(crate) struct Db {
    url: String,
}

impl Db {
    pub(crate) fn new(settings: &Settings) -> Db {
        Db {
            url: settings.database_url.clone(),
        }
    }

    pub(crate) fn connect(&self) -> Result<SqliteConnection, StorageError> {
        Ok(SqliteConnection::establish(&self.url)?)
    }

    /// Runs `f` against a fresh connection on the blocking pool.
    pub(crate) async fn run<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        rocket::tokio::task::spawn_blocking(move || -> Result<T, StorageError> {
            let mut conn = db.connect()?;
            Ok(f(&mut conn)?)
        })
        .await?
    }

    /// Creates the `items` and `images` tables if they don't exist yet.
    pub(crate) fn migrate(&self) -> Result<(), StorageError> {
        let mut conn = self.connect()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| StorageError::Migration(err.to_string()))?;

        Ok(())
    }
}

pub(crate) async fn run_db_migrations(rocket: Rocket<Build>) -> fairing::Result {
    let db = match rocket.state::<Db>().cloned() {
        Some(db) => db,
        None => {
            log::error!("no database configured");
            return Err(rocket);
        }
    };

    let migrated = rocket::tokio::task::spawn_blocking(move || db.migrate())
        .await
        .map_err(StorageError::from)
        .and_then(|res| res);

    match migrated {
        Ok(()) => {
            log::info!("database ready");
            Ok(rocket)
        }
        Err(err) => {
            log::error!("couldn't prepare database: {}", err);
            Err(rocket)
        }
    }
}
