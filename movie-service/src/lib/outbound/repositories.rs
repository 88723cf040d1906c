pub mod genre;
pub mod movie;
pub mod user;
pub mod vote;

pub use genre::PostgresGenreRepository;
pub use movie::PostgresMovieRepository;
pub use user::PostgresUserRepository;
pub use vote::PostgresVoteRepository;
