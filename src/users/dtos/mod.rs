pub mod edit_user_quote_dto;
pub mod edit_user_role_dto;
pub mod get_users_filter_dto;
