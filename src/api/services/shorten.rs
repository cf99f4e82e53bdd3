//! Shortening service
//!
//! Two variants of the same flow: a JSON API endpoint and an HTML-form
//! endpoint. Both validate the shared secret, require a non-empty URL,
//! generate a code, and persist the mapping. The URL itself is accepted
//! as-is; any non-empty string is a valid target.

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::ErrorBody;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::repository::{RepositoryHandle, UrlMapping};
use crate::utils::generate_short_code;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiShortenRequest {
    pub password: Option<String>,
    #[serde(rename = "longURL")]
    pub long_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormShortenRequest {
    pub password: Option<String>,
    #[serde(rename = "longUrl")]
    pub long_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub success: bool,
    #[serde(rename = "shortCode")]
    pub short_code: String,
    #[serde(rename = "shortenedUrl")]
    pub shortened_url: String,
}

pub struct ShortenService {}

impl ShortenService {
    /// JSON variant: `POST /{shorten}` with `{password, longURL}`.
    pub async fn handle_api(
        req: HttpRequest,
        config: web::Data<AppConfig>,
        repository: web::Data<RepositoryHandle>,
        body: web::Json<ApiShortenRequest>,
    ) -> impl Responder {
        let body = body.into_inner();

        if !Self::password_matches(body.password.as_deref(), &config) {
            return HttpResponse::Unauthorized()
                .json(ErrorBody::new("Unauthorized: Invalid password"));
        }

        let long_url = match body.long_url.filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                return HttpResponse::BadRequest()
                    .json(ErrorBody::new("longURL parameter is required"));
            }
        };

        match Self::create_mapping(&repository, long_url).await {
            Ok(mapping) => {
                let shortened_url =
                    Self::compose_short_url(&req, &config.routes.redirect, &mapping.short_code);
                HttpResponse::Ok().json(ShortenResponse {
                    success: true,
                    short_code: mapping.short_code,
                    shortened_url,
                })
            }
            Err(e) => {
                error!("Error creating short URL: {}", e);
                HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
            }
        }
    }

    /// Form variant: `POST /shorten` with urlencoded `password` and
    /// `longUrl`. Responses are plain text / an HTML anchor snippet.
    pub async fn handle_form(
        req: HttpRequest,
        config: web::Data<AppConfig>,
        repository: web::Data<RepositoryHandle>,
        form: web::Form<FormShortenRequest>,
    ) -> impl Responder {
        let form = form.into_inner();

        if !Self::password_matches(form.password.as_deref(), &config) {
            return HttpResponse::Unauthorized()
                .content_type("text/plain; charset=utf-8")
                .body("Unauthorized: Invalid password");
        }

        let long_url = match form.long_url.filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                return HttpResponse::BadRequest()
                    .content_type("text/plain; charset=utf-8")
                    .body("Original URL is required");
            }
        };

        match Self::create_mapping(&repository, long_url).await {
            Ok(mapping) => {
                let shortened_url =
                    Self::compose_short_url(&req, &config.routes.redirect, &mapping.short_code);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(format!(
                        "Your URL has been shortened: <a href=\"{url}\">{url}</a>",
                        url = shortened_url
                    ))
            }
            Err(e) => {
                error!("Error creating short URL: {}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Error creating short URL")
            }
        }
    }

    fn password_matches(provided: Option<&str>, config: &AppConfig) -> bool {
        provided == Some(config.api.password.as_str())
    }

    /// Generate a code and persist the mapping. No collision retry: a
    /// duplicate key from the store propagates to the caller as an error.
    async fn create_mapping(
        repository: &RepositoryHandle,
        long_url: String,
    ) -> Result<UrlMapping> {
        let mapping = UrlMapping::new(generate_short_code(), long_url);
        debug!("Generated short code: {}", mapping.short_code);

        repository.get().await?.insert(mapping.clone()).await?;
        Ok(mapping)
    }

    /// `{request scheme}://{request host}/{redirect segment}/{code}`
    fn compose_short_url(req: &HttpRequest, redirect_segment: &str, code: &str) -> String {
        let conn = req.connection_info();
        format!(
            "{}://{}/{}/{}",
            conn.scheme(),
            conn.host(),
            redirect_segment,
            code
        )
    }
}
