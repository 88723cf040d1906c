pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::genre;
pub use domain::movie;
pub use domain::user;
pub use domain::vote;
pub use outbound::repositories;
