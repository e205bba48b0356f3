/// Access token lifetime in seconds.
pub static JWT_EXP: i64 = 60 * 60;
