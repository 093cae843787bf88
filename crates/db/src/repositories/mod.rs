pub mod oauth_token_repo;

pub use oauth_token_repo::OauthTokenRepo;
