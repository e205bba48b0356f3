pub mod quote_category;
