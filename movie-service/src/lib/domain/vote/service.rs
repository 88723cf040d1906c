use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::models::MovieId;
use crate::domain::vote::models::CastVoteOutcome;
use crate::domain::vote::models::NewVote;
use crate::domain::vote::models::Vote;
use crate::domain::vote::models::VoteValue;
use crate::movie::ports::MovieRepository;
use crate::user::ports::UserRepository;
use crate::vote::errors::VoteError;
use crate::vote::ports::VoteRepository;
use crate::vote::ports::VoteServicePort;

/// Voting flow: the only writer of a movie's score and vote count.
pub struct VoteService<VR, MR, UR>
where
    VR: VoteRepository,
    MR: MovieRepository,
    UR: UserRepository,
{
    vote_repository: Arc<VR>,
    movie_repository: Arc<MR>,
    user_repository: Arc<UR>,
}

impl<VR, MR, UR> VoteService<VR, MR, UR>
where
    VR: VoteRepository,
    MR: MovieRepository,
    UR: UserRepository,
{
    pub fn new(
        vote_repository: Arc<VR>,
        movie_repository: Arc<MR>,
        user_repository: Arc<UR>,
    ) -> Self {
        Self {
            vote_repository,
            movie_repository,
            user_repository,
        }
    }

    async fn ensure_movie_exists(&self, movie_id: MovieId) -> Result<(), VoteError> {
        if self.movie_repository.exists(movie_id).await? {
            Ok(())
        } else {
            Err(VoteError::MovieNotFound(movie_id))
        }
    }
}

#[async_trait]
impl<VR, MR, UR> VoteServicePort for VoteService<VR, MR, UR>
where
    VR: VoteRepository,
    MR: MovieRepository,
    UR: UserRepository,
{
    async fn cast_vote(
        &self,
        voter_email: &str,
        movie_id: MovieId,
        value: VoteValue,
    ) -> Result<CastVoteOutcome, VoteError> {
        self.ensure_movie_exists(movie_id).await?;

        let Some(voter) = self.user_repository.find_by_email(voter_email).await? else {
            tracing::warn!(movie_id = %movie_id, "Vote rejected: token subject has no account");
            return Err(VoteError::VoterNotFound(voter_email.to_string()));
        };

        let (vote, rating) = self
            .vote_repository
            .upsert(NewVote {
                user_id: voter.id,
                movie_id,
                value,
            })
            .await?;

        tracing::info!(
            movie_id = %movie_id,
            user_id = %voter.id,
            value = value.get(),
            score = rating.score,
            votes = rating.votes,
            "Vote recorded"
        );

        Ok(CastVoteOutcome { vote, rating })
    }

    async fn list_votes(&self, movie_id: MovieId) -> Result<Vec<Vote>, VoteError> {
        self.ensure_movie_exists(movie_id).await?;
        self.vote_repository.list_by_movie(movie_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::movie::models::CreateMovieCommand;
    use crate::domain::movie::models::Movie;
    use crate::domain::movie::models::MovieName;
    use crate::domain::movie::models::MovieRating;
    use crate::domain::movie::models::UpdateMovieCommand;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::Role;
    use crate::domain::user::models::User;
    use crate::domain::user::models::UserId;
    use crate::domain::vote::models::VoteId;
    use crate::movie::errors::MovieError;
    use crate::user::errors::UserError;

    mock! {
        pub TestVoteRepository {}

        #[async_trait]
        impl VoteRepository for TestVoteRepository {
            async fn upsert(&self, vote: NewVote) -> Result<(Vote, MovieRating), VoteError>;
            async fn list_by_movie(&self, movie_id: MovieId) -> Result<Vec<Vote>, VoteError>;
        }
    }

    mock! {
        pub TestMovieRepository {}

        #[async_trait]
        impl MovieRepository for TestMovieRepository {
            async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;
            async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieError>;
            async fn find_by_name(&self, name: &MovieName) -> Result<Option<Movie>, MovieError>;
            async fn exists(&self, id: MovieId) -> Result<bool, MovieError>;
            async fn exists_by_name(&self, name: &MovieName, excluding: Option<MovieId>) -> Result<bool, MovieError>;
            async fn create(&self, command: CreateMovieCommand) -> Result<Movie, MovieError>;
            async fn update(&self, command: UpdateMovieCommand) -> Result<Movie, MovieError>;
            async fn delete(&self, id: MovieId) -> Result<(), MovieError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn exists_by_email(&self, email: &str) -> Result<bool, UserError>;
            async fn update_password(&self, id: UserId, password_hash: &str) -> Result<(), UserError>;
        }
    }

    fn voter() -> User {
        User {
            id: UserId(3),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@test.com".to_string(),
            password: "$2a$04$hash".to_string(),
            role: Role::user(),
        }
    }

    #[tokio::test]
    async fn test_cast_vote_success() {
        let mut votes = MockTestVoteRepository::new();
        votes
            .expect_upsert()
            .withf(|vote| {
                vote.user_id == UserId(3) && vote.movie_id == MovieId(1) && vote.value.get() == 8
            })
            .times(1)
            .returning(|vote| {
                Ok((
                    Vote {
                        id: VoteId(10),
                        user_id: vote.user_id,
                        movie_id: vote.movie_id,
                        value: vote.value,
                    },
                    MovieRating {
                        score: 8.0,
                        votes: 1,
                    },
                ))
            });

        let mut movies = MockTestMovieRepository::new();
        movies
            .expect_exists()
            .with(eq(MovieId(1)))
            .returning(|_| Ok(true));

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("ana@test.com"))
            .times(1)
            .returning(|_| Ok(Some(voter())));

        let service = VoteService::new(Arc::new(votes), Arc::new(movies), Arc::new(users));

        let outcome = service
            .cast_vote("ana@test.com", MovieId(1), VoteValue::new(8).unwrap())
            .await
            .expect("vote should succeed");

        assert_eq!(outcome.vote.id, VoteId(10));
        assert_eq!(outcome.rating.votes, 1);
        assert_eq!(outcome.rating.score, 8.0);
    }

    #[tokio::test]
    async fn test_cast_vote_missing_movie() {
        let mut votes = MockTestVoteRepository::new();
        votes.expect_upsert().times(0);

        let mut movies = MockTestMovieRepository::new();
        movies.expect_exists().returning(|_| Ok(false));

        let service = VoteService::new(
            Arc::new(votes),
            Arc::new(movies),
            Arc::new(MockTestUserRepository::new()),
        );

        let result = service
            .cast_vote("ana@test.com", MovieId(42), VoteValue::new(5).unwrap())
            .await;
        assert!(matches!(result, Err(VoteError::MovieNotFound(MovieId(42)))));
    }

    #[tokio::test]
    async fn test_cast_vote_unknown_voter() {
        let mut votes = MockTestVoteRepository::new();
        votes.expect_upsert().times(0);

        let mut movies = MockTestMovieRepository::new();
        movies.expect_exists().returning(|_| Ok(true));

        let mut users = MockTestUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let service = VoteService::new(Arc::new(votes), Arc::new(movies), Arc::new(users));

        let result = service
            .cast_vote("ghost@test.com", MovieId(1), VoteValue::new(5).unwrap())
            .await;
        assert!(matches!(result, Err(VoteError::VoterNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_votes_propagates_database_error() {
        let mut votes = MockTestVoteRepository::new();
        votes.expect_list_by_movie().times(0);

        let mut movies = MockTestMovieRepository::new();
        movies
            .expect_exists()
            .returning(|_| Err(MovieError::DatabaseError("timeout".to_string())));

        let service = VoteService::new(
            Arc::new(votes),
            Arc::new(movies),
            Arc::new(MockTestUserRepository::new()),
        );

        let result = service.list_votes(MovieId(1)).await;
        assert!(matches!(result, Err(VoteError::DatabaseError(_))));
    }
}
