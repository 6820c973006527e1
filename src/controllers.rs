pub mod index;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use handlebars::Handlebars;
use serde::Serialize;

use crate::models::empty::Empty;

#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub head: String,
    pub body: String,
}

pub async fn get_error_page(registry: &Handlebars<'static>, status: StatusCode) -> impl IntoResponse {
    let body = registry
        .render(&format!("errors/{}", status.as_u16()), &Empty {})
        .unwrap_or_else(|err| {
            log::error!("Failed to render error body: {:?}", err);
            String::from("Something went wrong!")
        });

    let data = TemplateViewModel {
        title: status.as_u16().to_string(),
        head: String::new(),
        body,
    };
    let html = registry.render("template", &data).unwrap_or_else(|err| {
        log::error!("Failed to render error page: {:?}", err);
        data.body.clone()
    });

    (status, Html(html))
}
