pub mod booking;
pub mod content;
