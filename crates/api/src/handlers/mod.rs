pub mod admins;
pub mod auth;
pub mod cinemas;
pub mod health;
pub mod movies;
pub mod promotions;
pub mod purchases;
pub mod sessions;
pub mod ticket_types;
