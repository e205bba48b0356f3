pub mod get_statistics_filter_dto;
