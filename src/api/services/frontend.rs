//! Static asset serving
//!
//! The landing page and its assets are embedded from `public/` at compile
//! time, so the binary ships self-contained. Content types are derived
//! from the file extension and set explicitly on every response.

use actix_web::{HttpRequest, HttpResponse, Result};
use rust_embed::Embed;
use tracing::{debug, trace};

#[derive(Embed)]
#[folder = "public/"]
struct PublicAssets;

pub struct FrontendService;

impl FrontendService {
    /// `GET /` - the landing page.
    pub async fn handle_index(_req: HttpRequest) -> Result<HttpResponse> {
        trace!("Serving landing page");

        match PublicAssets::get("index.html") {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(content.data.into_owned())),
            None => Ok(HttpResponse::NotFound().body("File not found")),
        }
    }

    /// Catch-all `GET` for files under `public/`.
    pub async fn handle_static(req: HttpRequest) -> Result<HttpResponse> {
        let path = req.match_info().query("path");
        trace!("Serving static file: {}", path);

        match PublicAssets::get(path) {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type(Self::get_content_type(path))
                .body(content.data.into_owned())),
            None => {
                debug!("Static file not found: {}", path);
                Ok(HttpResponse::NotFound().body("File not found"))
            }
        }
    }

    fn get_content_type(path: &str) -> &'static str {
        match path.split('.').next_back() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("woff") => "font/woff",
            Some("woff2") => "font/woff2",
            Some("ttf") => "font/ttf",
            Some("txt") => "text/plain; charset=utf-8",
            _ => "application/octet-stream",
        }
    }
}
