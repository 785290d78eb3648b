pub mod create_category;
pub mod delete_category;
pub mod get_categories;
pub mod update_category;
