pub mod admin_repo;
pub mod cinema_repo;
pub mod movie_repo;
pub mod promotion_repo;
pub mod purchase_repo;
pub mod session_repo;
pub mod ticket_type_repo;

pub use admin_repo::AdminRepo;
pub use cinema_repo::CinemaRepo;
pub use movie_repo::MovieRepo;
pub use promotion_repo::PromotionRepo;
pub use purchase_repo::{AuthorizeError, PurchaseRepo};
pub use session_repo::SessionRepo;
pub use ticket_type_repo::TicketTypeRepo;
