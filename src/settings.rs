use config::{Config, ConfigError, Environment};
use rocket::data::ByteUnit;
use serde::Deserialize;

/// Where the inventory keeps its durable state.
///
/// Every field can be overridden from the environment (or a `.env` file) by its
/// upper-case name, e.g. `DATABASE_URL=/var/lib/inventory.db`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// SQLite database file. Defaults to `inventory.db`.
    pub database_url: String,
    /// Root of the uploaded image tree. Defaults to `static/images`.
    pub image_folder: String,
    /// Largest accepted image upload, e.g. `64 MiB`. Defaults to `64 MiB`.
    pub upload_limit: ByteUnit,
}

impl Settings {
    pub const DEFAULT_DATABASE_URL: &'static str = "inventory.db";
    pub const DEFAULT_IMAGE_FOLDER: &'static str = "static/images";
    pub const DEFAULT_UPLOAD_LIMIT: &'static str = "64 MiB";

    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", Self::DEFAULT_DATABASE_URL)?
            .set_default("image_folder", Self::DEFAULT_IMAGE_FOLDER)?
            .set_default("upload_limit", Self::DEFAULT_UPLOAD_LIMIT)?
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}
