pub mod system_statistics;
pub mod users_page;
