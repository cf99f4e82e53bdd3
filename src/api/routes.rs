//! Route wiring
//!
//! Four dynamic routes on top of static asset serving. The path segments
//! for the shorten and redirect endpoints come from configuration; the
//! API and form variants of the shorten flow share a path and are told
//! apart by request content type.

use actix_web::guard::{self, GuardContext};
use actix_web::http::header;
use actix_web::web;

use crate::api::services::{FrontendService, RedirectService, ShortenService};
use crate::config::AppConfig;

pub fn configure(config: &AppConfig, cfg: &mut web::ServiceConfig) {
    let shorten_path = format!("/{}", config.routes.shorten);
    let redirect_path = format!("/{}/{{code}}", config.routes.redirect);

    cfg.route("/", web::get().to(FrontendService::handle_index));

    cfg.service(
        web::resource(&shorten_path)
            .route(
                web::post()
                    .guard(guard::fn_guard(is_json_request))
                    .to(ShortenService::handle_api),
            )
            .route(web::post().to(ShortenService::handle_form)),
    );

    // The web form always posts to the literal /shorten, even when the API
    // segment has been remapped.
    if config.routes.shorten != "shorten" {
        cfg.route("/shorten", web::post().to(ShortenService::handle_form));
    }

    cfg.route(&redirect_path, web::get().to(RedirectService::handle_redirect));

    // Everything else falls through to the embedded public/ directory.
    cfg.route("/{path:.*}", web::get().to(FrontendService::handle_static));
}

fn is_json_request(ctx: &GuardContext<'_>) -> bool {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}
