use crate::api::inventory::models::{FlashOut, Item, Page};
use crate::db::Db;
use crate::error::ErrorResponse;
use crate::image_store::ImageStore;
use crate::schema;
use diesel::prelude::*;
use rocket::request::FlashMessage;
use rocket::State;
use rocket_dyn_templates::{context, Template};
use serde::Serialize;

#[derive(Serialize)]
pub struct ImageOut {
    pub path: String,
    pub url: Option<String>,
}

#[get("/item/<item>")]
pub(crate) async fn get_item(
    item: i32,
    flash: Option<FlashMessage<'_>>,
    db: &State<Db>,
    store: &State<ImageStore>,
) -> Result<Page, ErrorResponse> {
    let found = db
        .run(move |c| {
            let found = schema::items::table
                .find(item)
                .first::<Item>(c)
                .optional()?;

            match found {
                Some(found) => {
                    use schema::images::dsl::*;
                    let paths = images
                        .filter(item_id.eq(found.id))
                        .select(path)
                        .load::<String>(c)?;
                    Ok(Some((found, paths)))
                }
                None => Ok(None),
            }
        })
        .await?;

    let (item, paths) = match found {
        Some(found) => found,
        None => return Ok(Page::error("/".to_string(), "Item not found!")),
    };

    let image_list = paths
        .into_iter()
        .map(|path| ImageOut {
            url: store.public_url(&path),
            path,
        })
        .collect::<Vec<_>>();

    Ok(Page::View(Template::render(
        "item",
        context! {
            item_id: item.id,
            item_name: item.name,
            images: image_list,
            flash: flash.map(FlashOut::from),
        },
    )))
}
