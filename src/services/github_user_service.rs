use reqwest::Client;

use crate::errors::ProfileError;
use crate::models::github_user::GithubUser;

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const USER_AGENT: &str = "profile-info-loader";

pub struct GithubUserService {
    pub client: Client,
    /// Origin of the profile directory, swappable so tests can point
    /// the service at a local endpoint.
    pub base_url: String,
}

impl GithubUserService {
    pub async fn get_by_username(&self, username: &str) -> Result<GithubUser, ProfileError> {
        let url = format!("{}/users/{}", self.base_url, username);
        log::info!("Making request to {}...", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Request to {} failed: {:?}", url, status);
            return Err(ProfileError::Fetch(status));
        }

        let contents = response.text().await?;
        let user: GithubUser = serde_json::from_str(&contents)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use reqwest::Client;

    use super::*;
    use crate::errors::ProfileError;

    const OCTOCAT_BODY: &str = r#"{
        "login": "octocat",
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "name": "The Octocat",
        "company": "@github",
        "location": "San Francisco",
        "avatar_url": "https://img/o.png",
        "public_repos": 8,
        "followers": 9999,
        "site_admin": false
    }"#;

    async fn spawn_server(app: Router) -> SocketAddr {
        let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
            .serve(app.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);
        addr
    }

    fn service_at(addr: SocketAddr) -> GithubUserService {
        GithubUserService {
            client: Client::new(),
            base_url: format!("http://{}", addr),
        }
    }

    #[tokio::test]
    async fn get_by_username_parses_profile_fields() {
        let app = Router::new().route("/users/:username", get(|| async { OCTOCAT_BODY }));
        let service = service_at(spawn_server(app).await);

        let user = service.get_by_username("octocat").await.unwrap();

        assert_eq!(user.login, "octocat");
        assert_eq!(user.name.as_deref(), Some("The Octocat"));
        assert_eq!(user.avatar_url, "https://img/o.png");
    }

    #[tokio::test]
    async fn get_by_username_tolerates_null_name() {
        let body = r#"{"login":"ghost","name":null,"avatar_url":"https://img/g.png","id":1}"#;
        let app = Router::new().route("/users/:username", get(move || async move { body }));
        let service = service_at(spawn_server(app).await);

        let user = service.get_by_username("ghost").await.unwrap();

        assert_eq!(user.login, "ghost");
        assert!(user.name.is_none());
    }

    #[tokio::test]
    async fn get_by_username_reports_status_on_missing_user() {
        let app = Router::new().route(
            "/users/:username",
            get(|| async { (StatusCode::NOT_FOUND, "Not Found") }),
        );
        let service = service_at(spawn_server(app).await);

        let err = service.get_by_username("octocat").await.unwrap_err();

        assert!(matches!(err, ProfileError::Fetch(status) if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn get_by_username_reports_undecodable_body() {
        let app = Router::new().route("/users/:username", get(|| async { "not json" }));
        let service = service_at(spawn_server(app).await);

        let err = service.get_by_username("octocat").await.unwrap_err();

        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[tokio::test]
    async fn get_by_username_reports_transport_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let service = service_at(addr);

        let err = service.get_by_username("octocat").await.unwrap_err();

        assert!(matches!(err, ProfileError::Transport(_)));
    }
}
