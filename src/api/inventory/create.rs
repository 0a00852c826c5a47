use crate::api::inventory::models::{NewImage, NewItem, Page};
use crate::db::Db;
use crate::error::ErrorResponse;
use crate::image_store::{upload_name, ImageStore};
use crate::schema;
use diesel::prelude::*;
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::State;

#[derive(FromForm)]
pub struct FormItem<'a> {
    item_name: Option<String>,
    item_image: Option<TempFile<'a>>,
}

#[post("/add", data = "<form_item>")]
pub(crate) async fn create_item(
    mut form_item: Form<FormItem<'_>>,
    db: &State<Db>,
    store: &State<ImageStore>,
) -> Result<Page, ErrorResponse> {
    let new_item = NewItem {
        name: form_item.item_name.clone().unwrap_or_default(),
    };
    if new_item.name.is_empty() {
        return Ok(Page::error("/".to_string(), "Item name is expected!"));
    }

    let new_id = db
        .run(move |c| {
            use schema::items::dsl::*;
            diesel::insert_into(items)
                .values(&new_item)
                .returning(id)
                .get_result::<i32>(c)
        })
        .await?;
    log::info!("created item {}", new_id);

    let upload = form_item.item_image.as_mut().and_then(|file| {
        let filename = upload_name(file)?;
        Some((filename, file))
    });

    if let Some((filename, file)) = upload {
        let image_file = match store.save(new_id, &filename, file).await {
            Ok(image_file) => image_file,
            Err(err) => {
                forget_item(db, new_id).await;
                return Err(ErrorResponse::new(
                    Status { code: 500 },
                    format!("Couldn't save image: {}", err),
                ));
            }
        };

        let new_image = NewImage {
            path: image_file.to_string_lossy().into_owned(),
            item_id: new_id,
        };
        let inserted = db
            .run(move |c| {
                diesel::insert_into(schema::images::table)
                    .values(&new_image)
                    .execute(c)
            })
            .await;

        if let Err(err) = inserted {
            store.remove_all(&[&image_file]).await.ok();
            forget_item(db, new_id).await;
            return Err(err.into());
        }
        log::info!("stored {} for item {}", image_file.display(), new_id);
    }

    Ok(Page::Redirect(Redirect::to("/")))
}

// roll back db
async fn forget_item(db: &Db, item: i32) {
    db.run(move |c| diesel::delete(schema::items::table.find(item)).execute(c))
        .await
        .ok();
}
