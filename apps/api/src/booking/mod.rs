pub mod handlers;
pub mod slots;
