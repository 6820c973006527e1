use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use crate::models::empty::Empty;
use crate::renderers::{profile_renderer, RenderSurface};
use crate::AppState;

#[derive(Debug, Serialize)]
struct ProfileViewModel {
    container: String,
}

#[axum_macros::debug_handler]
pub async fn get_index(State(state): State<Arc<AppState>>) -> Response {
    let mut surface = RenderSurface::new();

    // Render only runs on a record we actually got.
    let body_result = match state.github_user_service.get_by_username(&state.username).await {
        Ok(user) => {
            profile_renderer::render_profile_picture(
                &mut surface,
                &user.avatar_url,
                user.name.as_deref().unwrap_or_default(),
            );
            profile_renderer::render_favicon(&mut surface, &user.avatar_url);
            profile_renderer::render_nickname(&mut surface, &user.login);

            state.registry.render(
                "profile",
                &ProfileViewModel {
                    container: surface.container_html(),
                },
            )
        }
        Err(err) => {
            log::error!("Failed to fetch profile info for {}: {}", state.username, err);
            state.registry.render("errors/offline", &Empty {})
        }
    };

    let body = match body_result {
        Ok(body) => body,
        Err(err) => {
            log::error!("{:?}", err);
            return super::get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR)
                .await
                .into_response();
        }
    };

    let data = super::TemplateViewModel {
        title: "Profile".into(),
        head: surface.head_html(),
        body,
    };

    match state.registry.render("template", &data) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            log::error!("{:?}", err);
            super::get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR)
                .await
                .into_response()
        }
    }
}
