pub mod hasher;
pub mod seed;
pub mod sqlx;
pub mod time;
