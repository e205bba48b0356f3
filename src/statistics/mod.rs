pub mod aggregator;
pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
