use crate::api::inventory::models::{FlashOut, Item};
use crate::db::Db;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::request::FlashMessage;
use rocket::State;
use rocket_dyn_templates::{context, Template};

#[get("/")]
pub(crate) async fn index(
    flash: Option<FlashMessage<'_>>,
    db: &State<Db>,
) -> Result<Template, ErrorResponse> {
    use schema::items::dsl::*;

    let item_list = db
        .run(move |c| items.order(id.desc()).load::<Item>(c))
        .await?;

    Ok(Template::render(
        "index",
        context! {
            items: item_list,
            flash: flash.map(FlashOut::from),
        },
    ))
}
