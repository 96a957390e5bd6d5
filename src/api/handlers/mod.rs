pub mod daily_logs;
pub mod health;
pub mod projects;
pub mod time;
