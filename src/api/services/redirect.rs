//! Redirect service
//!
//! Resolves a short code to its stored URL and answers with a 302. Any
//! query string on the incoming request is appended to the target as-is,
//! matching how the mapping was meant to be used: the short link carries
//! extra parameters through to the destination.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{debug, error, trace};

use crate::api::ErrorBody;
use crate::repository::RepositoryHandle;
use crate::utils::is_valid_short_code;

pub struct RedirectService {}

impl RedirectService {
    /// `GET /{redirect}/{code}` → `302` to the original URL, or `404`.
    pub async fn handle_redirect(
        req: HttpRequest,
        path: web::Path<String>,
        repository: web::Data<RepositoryHandle>,
    ) -> impl Responder {
        let code = path.into_inner();

        // Codes with the wrong shape cannot exist in the store, so they
        // 404 without a database round trip.
        if !is_valid_short_code(&code) {
            trace!("Invalid short code rejected: {}", code);
            return Self::not_found_response();
        }

        let repository = match repository.get().await {
            Ok(repository) => repository,
            Err(e) => {
                error!("Storage unavailable during redirect: {}", e);
                return Self::error_response();
            }
        };

        match repository.find_by_code(&code).await {
            Ok(Some(mapping)) => {
                let target = Self::append_query_string(mapping.original_url, req.query_string());
                debug!("Redirecting {} -> {}", code, target);
                HttpResponse::Found()
                    .insert_header((header::LOCATION, target))
                    .finish()
            }
            Ok(None) => {
                debug!("Redirect link not found: {}", code);
                Self::not_found_response()
            }
            Err(e) => {
                error!("Database error during redirect lookup: {}", e);
                Self::error_response()
            }
        }
    }

    /// Raw concatenation of the incoming query string, not a structured
    /// merge: duplicate keys are passed through untouched.
    fn append_query_string(mut original_url: String, query: &str) -> String {
        if !query.is_empty() {
            let separator = if original_url.contains('?') { '&' } else { '?' };
            original_url.push(separator);
            original_url.push_str(query);
        }
        original_url
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::NotFound().json(ErrorBody::new("Shortened URL not found"))
    }

    #[inline]
    fn error_response() -> HttpResponse {
        HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
    }
}
