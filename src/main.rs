use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    sync::Arc,
};

use axum::body::{boxed, Body};
use axum::http::{Response, StatusCode};
use axum::{routing::get, Router};
use clap::Parser;
use handlebars::Handlebars;
use reqwest::Client;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod controllers;
pub mod errors;
pub mod models;
pub mod renderers;
pub mod services;

use controllers::index;
use services::github_user_service::{self, GithubUserService};

// Command line interface
#[derive(Parser, Debug)]
#[clap(name = "profile-info-loader", about = "Serves a page with GitHub profile info!")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(short = 'u', long = "user", default_value = "mateus-azevedo")]
    user: String,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,
}

pub struct AppState {
    registry: Handlebars<'static>,
    username: String,
    github_user_service: GithubUserService,
}

pub fn build_registry() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .register_template_string("template", include_str!("templates/template.hbs"))
        .unwrap();
    handlebars
        .register_template_string("profile", include_str!("templates/profile.hbs"))
        .unwrap();
    handlebars
        .register_template_string("errors/offline", include_str!("templates/errors/offline.hbs"))
        .unwrap();
    handlebars
        .register_template_string("errors/500", include_str!("templates/errors/500.hbs"))
        .unwrap();
    handlebars
}

#[tokio::main]
async fn main() {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Enable console logging
    tracing_subscriber::fmt::init();

    // Register templates
    let handlebars = build_registry();

    // Setup services
    let github_user_service = GithubUserService {
        client: Client::new(),
        base_url: github_user_service::GITHUB_API_URL.to_string(),
    };

    // Setup controller routes and inject app state
    let app_state = Arc::new(AppState {
        registry: handlebars,
        username: opt.user,
        github_user_service,
    });
    let app = Router::new()
        .route("/", get(index::get_index))
        .fallback_service(get(|req| async move {
            match ServeDir::new(opt.static_dir).oneshot(req).await {
                Ok(res) => res.map(boxed),
                Err(err) => Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(boxed(Body::from(format!("error: {err}"))))
                    .expect("error response"),
            }
        }))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port,
    ));
    log::info!("Now listening on http://{}", sock_addr);

    axum::Server::bind(&sock_addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
