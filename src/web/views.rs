pub mod api;
pub mod index;
