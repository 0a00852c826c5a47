use crate::api::inventory::models::Page;
use crate::db::Db;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket::State;

#[derive(FromForm)]
pub struct FormEditItem {
    item_name: Option<String>,
}

#[post("/edit/<item>", data = "<form_item>")]
pub(crate) async fn edit_item(
    item: i32,
    form_item: Form<FormEditItem>,
    db: &State<Db>,
) -> Result<Page, ErrorResponse> {
    let target = format!("/item/{}", item);
    let new_name = form_item.into_inner().item_name.unwrap_or_default();
    if new_name.is_empty() {
        return Ok(Page::error(target, "New name is expected!"));
    }

    let updated = db
        .run(move |c| {
            use schema::items::dsl::*;
            diesel::update(items.find(item))
                .set(name.eq(new_name))
                .execute(c)
        })
        .await?;
    log::info!("renamed item {} ({} row(s))", item, updated);

    Ok(Page::Redirect(Redirect::to(target)))
}
