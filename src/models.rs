pub mod empty;
pub mod github_user;
