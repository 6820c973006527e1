use serde::Deserialize;

/// GitHub user profile from the `/users/{username}` API.
///
/// The upstream response carries many more fields than these;
/// unknown fields are dropped on deserialization. `name` is `null`
/// upstream when the account never set one.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
}
