pub mod create_category_dto;
pub mod edit_category_dto;
pub mod get_categories_filter_dto;
