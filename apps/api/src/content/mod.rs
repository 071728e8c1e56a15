pub mod handlers;
pub mod placeholders;
pub mod resolver;
