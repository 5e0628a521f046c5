//! NexusData documentation site server.

use axum::Router;
use leptos::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_site::app::App;
use nexus_site::fileserv::file_and_error_handler;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "nexus_site=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let site = nexus_config::SiteConfig::nexusdata();
    site.validate().expect("site configuration is malformed");
    nexus_config::sidebar::validate(nexus_config::tutorial_sidebar())
        .expect("docs sidebar tree is malformed");

    let conf = get_configuration(None).await.expect("failed to load leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind site address");
    info!("documentation site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
