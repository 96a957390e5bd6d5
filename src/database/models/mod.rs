pub mod daily_log;
pub mod project;

pub use daily_log::*;
pub use project::*;
