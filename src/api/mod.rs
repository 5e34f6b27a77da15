pub mod handlers;
pub mod pagination;
pub mod router;
