pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;

/// Created for each kind when a user registers, or on login when they have none.
pub static DEFAULT_CATEGORY_NAMES: [&str; 3] = ["Work", "Life", "Other"];
