use rocket::Route;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod get_item;
pub(crate) mod list;
pub(crate) mod models;

pub(crate) fn routes() -> Vec<Route> {
    routes![
        list::index,
        get_item::get_item,
        create::create_item,
        edit::edit_item,
        delete::delete_item,
    ]
}
