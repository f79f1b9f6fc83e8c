use actix_web::{post, web, HttpResponse};

use crate::error::ApiError;
use crate::model::{EmbeddingRequest, EmbeddingResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Bodies of any length are read, like a plain Content-Length read would.
    cfg.app_data(web::PayloadConfig::new(usize::MAX))
        .service(embeddings);
}

#[post("/v1/embeddings")]
async fn embeddings(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let request = EmbeddingRequest::from_slice(&body).map_err(|err| {
        tracing::warn!("rejected embedding request: {err}");
        err
    })?;

    let response = EmbeddingResponse::mock(request, &mut rand::thread_rng());
    Ok(HttpResponse::Ok().json(response))
}

/// Anything that is not `POST /v1/embeddings`.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}
