pub mod create_quote_dto;
