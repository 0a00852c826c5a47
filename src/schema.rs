table! {
    images (id) {
        id -> Integer,
        path -> Text,
        item_id -> Integer,
    }
}

table! {
    items (id) {
        id -> Integer,
        name -> Text,
    }
}

joinable!(images -> items (item_id));

allow_tables_to_appear_in_same_query!(
    images,
    items,
);
