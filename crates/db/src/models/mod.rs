pub mod admin;
pub mod cinema;
pub mod movie;
pub mod promotion;
pub mod purchase;
pub mod session;
pub mod ticket_type;
