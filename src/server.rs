// src/server.rs
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::client::StatusInvestClient;
use crate::config::Config;
use crate::error::ScrapeError;
use crate::extract;
use crate::normalize::normalize;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub struct AppState {
    pub config: Config,
    pub session_id: Uuid,
    pub scraper: StatusInvestClient,
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        Ok(Self {
            session_id: Uuid::new_v4(),
            scraper: StatusInvestClient::new(&config)?,
            config,
            start_time: Utc::now(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct IndicatorQuery {
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub ticker: Option<String>,
}

/// `GET /api/statusinvest?type=<category>&ticker=<ticker>`
///
/// Fetches one instrument page, extracts its indicators, and returns the
/// normalized mapping. Each failure kind maps to its own HTTP status; an
/// upstream HTTP error mirrors the upstream status code.
pub async fn statusinvest_handler(
    query: web::Query<IndicatorQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let (category, ticker) = match (&query.category, &query.ticker) {
        (Some(c), Some(t)) if !c.trim().is_empty() && !t.trim().is_empty() => (c, t),
        _ => return error_response(&ScrapeError::MissingParameter),
    };

    match extract::extract(&state.scraper, category, ticker).await {
        Ok(raw) => HttpResponse::Ok().json(normalize(&raw)),
        Err(e) => {
            log::error!("Lookup failed for {}/{}: {}", category, ticker, e);
            error_response(&e)
        }
    }
}

pub fn error_response(err: &ScrapeError) -> HttpResponse {
    match err {
        ScrapeError::MissingParameter => HttpResponse::BadRequest().json(json!({
            "error": "Parâmetros 'type' e 'ticker' são obrigatórios."
        })),
        ScrapeError::NotFound => HttpResponse::NotFound().json(json!({
            "error": "Nenhum dado encontrado para o ticker informado."
        })),
        ScrapeError::Upstream {
            status,
            status_text,
        } => {
            let code = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(code).json(json!({
                "error": format!("Erro ao buscar dados externos: {} - {}", status, status_text)
            }))
        }
        _ => HttpResponse::InternalServerError().json(json!({
            "error": "Erro interno ao buscar dados."
        })),
    }
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "invest-dash",
        "session_id": state.session_id,
        "uptime_seconds": (Utc::now() - state.start_time).num_seconds(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn cors_handler() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", "GET, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .finish()
}
