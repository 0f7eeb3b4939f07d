pub mod carbon;
pub mod error;
pub mod evidence;
pub mod health;
pub mod openapi;
pub mod screening;
