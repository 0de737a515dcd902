//! Request middleware for notegen-api.

pub mod auth;

pub use auth::RequireAuth;
