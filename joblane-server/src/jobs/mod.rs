pub mod admin_handlers;
pub mod handlers;
