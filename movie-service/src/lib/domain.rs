pub mod genre;
pub mod movie;
pub mod user;
pub mod vote;
