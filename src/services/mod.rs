/// Injectable "now" for handlers and the terminal clock
pub mod clock;
/// Multi-timezone formatting and the editable zone board
pub mod timezone;
