/// Date and time rendering helpers
pub mod datetime;
/// Prefixed one-line log helpers
pub mod logging;
/// Presence and shape checks on user input
pub mod validation;
