pub mod auth;
pub mod data;
pub mod layout;
pub mod modal;
