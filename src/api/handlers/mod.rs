//! Route handlers for the CookFlow service.

pub mod health;
pub mod registration;
pub mod root;
