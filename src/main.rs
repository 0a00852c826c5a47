mod api;
mod db;
mod error;
mod image_store;
mod schema;
mod settings;

#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel;
extern crate dotenv;

use db::{run_db_migrations, Db};
use image_store::ImageStore;
use rocket::fairing::AdHoc;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use settings::Settings;
use thiserror::Error;

#[derive(Debug, Error)]
enum BootError {
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("couldn't prepare image folder: {0}")]
    ImageFolder(#[from] std::io::Error),
    #[error(transparent)]
    Launch(#[from] rocket::Error),
}

fn build(settings: Settings) -> Result<Rocket<Build>, BootError> {
    let store = ImageStore::open(&settings)?;
    let images = FileServer::from(store.root());
    // The whole multipart body counts against `data-form`, the image against `file`.
    let figment = rocket::Config::figment()
        .merge(("limits.file", settings.upload_limit))
        .merge(("limits.data-form", settings.upload_limit));

    Ok(rocket::custom(figment)
        .attach(AdHoc::try_on_ignite("Database Migrations", run_db_migrations))
        .attach(Template::fairing())
        .manage(Db::new(&settings))
        .manage(store)
        .mount("/", api::inventory::routes())
        .mount("/images", images))
}

#[rocket::main]
async fn main() -> Result<(), BootError> {
    dotenv::dotenv().ok();

    let settings = Settings::new()?;
    build(settings)?.launch().await?;

    Ok(())
}
