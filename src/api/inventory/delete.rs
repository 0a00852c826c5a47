use crate::api::inventory::models::Page;
use crate::db::Db;
use crate::error::ErrorResponse;
use crate::image_store::ImageStore;
use crate::schema;
use diesel::prelude::*;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::State;

#[post("/delete/<item>")]
pub(crate) async fn delete_item(
    item: i32,
    db: &State<Db>,
    store: &State<ImageStore>,
) -> Result<Page, ErrorResponse> {
    let paths = db
        .run(move |c| {
            use schema::images::dsl::*;
            images
                .filter(item_id.eq(item))
                .select(path)
                .load::<String>(c)
        })
        .await?;

    // Rows stay when a file can't be removed, so the delete can be retried.
    let removed = store.remove_all(&paths).await.map_err(|err| {
        log::error!("couldn't remove images of item {}: {}", item, err);
        ErrorResponse::new(
            Status { code: 500 },
            format!("Couldn't remove image: {}", err),
        )
    })?;

    db.run(move |c| {
        c.transaction::<_, diesel::result::Error, _>(|c| {
            {
                use schema::images::dsl::*;
                diesel::delete(images.filter(item_id.eq(item))).execute(c)
            }?;
            {
                use schema::items::dsl::*;
                diesel::delete(items.filter(id.eq(item))).execute(c)
            }?;

            Ok(())
        })
    })
    .await?;
    log::info!("deleted item {} and {} image file(s)", item, removed);

    Ok(Page::Redirect(Redirect::to("/")))
}
