//! HTTP handler functions for the SecureCheck API.

use actix_web::{HttpResponse, web};
use securecheck_analytics::catalog;
use securecheck_analytics::metrics::summarize;
use securecheck_analytics::narrative::narrate;
use securecheck_analytics::predict::{distinct_stop_durations, predict as predict_stop};
use securecheck_analytics_models::{CandidateStop, CatalogTier};
use securecheck_server_models::{
    ApiCatalogMenu, ApiDashboard, ApiError, ApiForm, ApiHealth, ApiLogs, ApiMetrics,
    ApiPrediction, ApiQueryResult, RunQueryRequest,
};

use crate::interaction::Interaction;
use crate::{AppState, PAGE_SUBTITLE, PAGE_TITLE, form::descriptor};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/dashboard`
///
/// Builds the whole page from a single fetch of the stop table.
pub async fn dashboard(state: web::Data<AppState>) -> HttpResponse {
    let mut interaction = Interaction::new(state.store.as_ref());
    let stop_log = interaction.load_stop_log().await;

    let summary = summarize(&stop_log.records);
    let form = descriptor(distinct_stop_durations(&stop_log.records));

    HttpResponse::Ok().json(ApiDashboard {
        title: PAGE_TITLE.to_string(),
        subtitle: PAGE_SUBTITLE.to_string(),
        logs: stop_log.table,
        metrics: summary.tiles(),
        menus: CatalogTier::all().iter().map(|t| menu(*t)).collect(),
        form,
        notices: interaction.finish(),
    })
}

/// `GET /api/logs`
pub async fn logs(state: web::Data<AppState>) -> HttpResponse {
    let mut interaction = Interaction::new(state.store.as_ref());
    let stop_log = interaction.load_stop_log().await;

    HttpResponse::Ok().json(ApiLogs {
        table: stop_log.table,
        notices: interaction.finish(),
    })
}

/// `GET /api/metrics`
pub async fn metrics(state: web::Data<AppState>) -> HttpResponse {
    let mut interaction = Interaction::new(state.store.as_ref());
    let stop_log = interaction.load_stop_log().await;
    let summary = summarize(&stop_log.records);

    HttpResponse::Ok().json(ApiMetrics {
        summary,
        tiles: summary.tiles(),
        notices: interaction.finish(),
    })
}

/// `GET /api/catalog/{tier}`
///
/// Returns the menu labels for one catalog tier in display order.
pub async fn catalog_menu(path: web::Path<String>) -> HttpResponse {
    match parse_tier(&path) {
        Ok(tier) => HttpResponse::Ok().json(menu(tier)),
        Err(response) => response,
    }
}

/// `POST /api/catalog/{tier}/run`
///
/// Runs the statement behind a menu label. The label must match exactly.
pub async fn run_catalog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<RunQueryRequest>,
) -> HttpResponse {
    let tier = match parse_tier(&path) {
        Ok(tier) => tier,
        Err(response) => return response,
    };

    let request = body.into_inner();
    let Some(sql) = catalog::lookup(tier, &request.label) else {
        log::warn!("Unknown {tier} catalog label: {:?}", request.label);
        return HttpResponse::NotFound().json(ApiError {
            error: format!("Unknown {tier} query: {}", request.label),
        });
    };

    log::info!("Running {tier} query: {}", request.label);

    let mut interaction = Interaction::new(state.store.as_ref());
    let table = interaction.run_catalog(sql).await;

    HttpResponse::Ok().json(ApiQueryResult {
        tier,
        label: request.label,
        table,
        notices: interaction.finish(),
    })
}

/// `GET /api/form`
///
/// Returns the prediction form with stop-duration options taken from the
/// stored data.
pub async fn form(state: web::Data<AppState>) -> HttpResponse {
    let mut interaction = Interaction::new(state.store.as_ref());
    let stop_log = interaction.load_stop_log().await;
    let durations = distinct_stop_durations(&stop_log.records);

    HttpResponse::Ok().json(ApiForm {
        form: descriptor(durations),
        notices: interaction.finish(),
    })
}

/// `POST /api/predict`
///
/// Predicts the outcome and violation for a submitted stop. The stop is
/// never persisted.
pub async fn predict(
    state: web::Data<AppState>,
    body: web::Json<CandidateStop>,
) -> HttpResponse {
    let candidate = body.into_inner();

    if let Err(e) = candidate.validate() {
        log::warn!("Rejected prediction request: {e}");
        return HttpResponse::BadRequest().json(ApiError {
            error: e.to_string(),
        });
    }

    let mut interaction = Interaction::new(state.store.as_ref());
    let stop_log = interaction.load_stop_log().await;
    let prediction = predict_stop(&stop_log.records, &candidate);
    let narrative = narrate(&candidate, &prediction);

    HttpResponse::Ok().json(ApiPrediction {
        prediction,
        narrative,
        notices: interaction.finish(),
    })
}

fn menu(tier: CatalogTier) -> ApiCatalogMenu {
    ApiCatalogMenu {
        tier,
        title: tier.title().to_string(),
        labels: catalog::labels(tier)
            .into_iter()
            .map(ToString::to_string)
            .collect(),
    }
}

fn parse_tier(raw: &str) -> Result<CatalogTier, HttpResponse> {
    raw.parse().map_err(|_| {
        HttpResponse::NotFound().json(ApiError {
            error: format!("Unknown catalog: {raw}"),
        })
    })
}
