use axum::{
    Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
};
use domain::{NewPackage, Package};
use infrastructure::CorsConfig;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Literal segment of the description search route. The router always
/// matches it ahead of the `{segment}` parameter, so a destination search
/// for this exact word is not reachable.
pub const SEARCH_SEGMENT: &str = "consulta";

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors);

    let router = Router::new()
        .route("/health", get(health))
        .route("/paquetes", get(list_packages).post(create_package))
        .route(
            &format!("/paquetes/{SEARCH_SEGMENT}"),
            get(search_packages).delete(delete_search_segment),
        )
        .route(
            "/paquetes/{segment}",
            get(packages_by_destination).delete(delete_package),
        );

    let router = match &state.config.server.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_packages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Package>>, ApiError> {
    let packages = state.catalog.list().await.map_err(ApiError::query)?;
    Ok(Json(packages))
}

/// Value of `q`. Repeated keys are searched as one comma-joined term,
/// so `?q=a&q=b` looks for `a,b`.
fn search_query(params: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

async fn search_packages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Package>>, ApiError> {
    let query = search_query(&params);
    let packages = state
        .catalog
        .search(query.as_deref())
        .await
        .map_err(ApiError::query)?;
    Ok(Json(packages))
}

async fn packages_by_destination(
    Path(destination): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Package>>, ApiError> {
    let packages = state
        .catalog
        .by_destination(&destination)
        .await
        .map_err(ApiError::query)?;
    Ok(Json(packages))
}

async fn create_package(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewPackage>, JsonRejection>,
) -> Result<(StatusCode, Json<Package>), ApiError> {
    let Json(fields) = payload.map_err(ApiError::rejected_body)?;

    let package = state
        .catalog
        .create(fields)
        .await
        .map_err(ApiError::create)?;
    Ok((StatusCode::CREATED, Json(package)))
}

async fn delete_package(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(&id).await.map_err(ApiError::delete)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /paquetes/consulta` lands on the search route; treat it like any
/// other non-numeric id.
async fn delete_search_segment(
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    state
        .catalog
        .delete(SEARCH_SEGMENT)
        .await
        .map_err(ApiError::delete)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_query_extraction() {
        assert_eq!(search_query(&params(&[])), None);
        assert_eq!(search_query(&params(&[("x", "1")])), None);
        assert_eq!(search_query(&params(&[("q", "")])).as_deref(), Some(""));
        assert_eq!(
            search_query(&params(&[("q", "Tango"), ("x", "1"), ("q", " gastronomía")])).as_deref(),
            Some("Tango, gastronomía")
        );
    }
}
