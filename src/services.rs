pub mod github_user_service;
