use crate::schema::{images, items};
use diesel::prelude::*;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket_dyn_templates::Template;
use serde::Serialize;

#[derive(Queryable, Serialize, Debug)]
pub struct Item {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = items)]
pub(super) struct NewItem {
    pub(super) name: String,
}

#[derive(Insertable)]
#[diesel(table_name = images)]
pub(super) struct NewImage {
    pub(super) path: String,
    pub(super) item_id: i32,
}

/// One-shot message carried over a redirect.
#[derive(Serialize, Debug)]
pub struct FlashOut {
    pub kind: String,
    pub message: String,
}

impl From<FlashMessage<'_>> for FlashOut {
    fn from(flash: FlashMessage<'_>) -> Self {
        FlashOut {
            kind: flash.kind().to_string(),
            message: flash.message().to_string(),
        }
    }
}

#[derive(Responder)]
pub(crate) enum Page {
    View(Template),
    Redirect(Redirect),
    Flash(Flash<Redirect>),
}

impl Page {
    pub(super) fn error(to: String, message: &'static str) -> Page {
        log::warn!("{} (redirecting to {})", message, to);
        Page::Flash(Flash::error(Redirect::to(to), message))
    }
}
