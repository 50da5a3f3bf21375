//! Route table and middleware stack

use std::any::Any;

use axum::{
    http::{header::InvalidHeaderValue, request::Parts, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, warn};

use crate::error::CatalogError;
use crate::handlers::*;
use crate::state::AppState;

pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api", get(root))
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/services", get(list_services))
        .route("/api/services/:service_id", get(get_service))
        .route("/api/services/category/:category", get(services_by_category))
        .route("/api/categories", get(list_categories))
        .route("/api/compare", get(compare_services))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// CORS policy for read-only access
///
/// A bare `*` entry allows any origin. Entries containing `*` elsewhere, such
/// as `https://*.vercel.app`, are subdomain patterns; everything else must
/// match an origin exactly.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(cors::Any);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        warn!("CORS: allowing any origin");
        return Ok(layer.allow_origin(cors::Any));
    }

    let (patterns, exact): (Vec<&String>, Vec<&String>) =
        origins.iter().partition(|origin| origin.contains('*'));
    let allowed = exact
        .into_iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    if patterns.is_empty() {
        return Ok(layer.allow_origin(AllowOrigin::list(allowed)));
    }

    let patterns: Vec<String> = patterns.into_iter().cloned().collect();
    let predicate = AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
        allowed.contains(origin)
            || origin
                .to_str()
                .map(|origin| patterns.iter().any(|p| origin_matches(p, origin)))
                .unwrap_or(false)
    });
    Ok(layer.allow_origin(predicate))
}

/// Match an origin against a pattern where `*` stands for one or more
/// subdomain labels. Patterns without `*` must match exactly.
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    let Some((prefix, suffix)) = pattern.split_once('*') else {
        return pattern == origin;
    };

    origin.len() > prefix.len() + suffix.len()
        && origin.starts_with(prefix)
        && origin.ends_with(suffix)
        && !origin[prefix.len()..origin.len() - suffix.len()].contains('/')
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("handler panicked: {}", message);
    CatalogError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_wildcard_and_explicit_origins() {
        assert!(cors_layer(&["*".to_string()]).is_ok());
        assert!(cors_layer(&[]).is_ok());
        assert!(cors_layer(&[
            "http://localhost:3000".to_string(),
            "http://localhost:3001".to_string()
        ])
        .is_ok());
    }

    #[test]
    fn subdomain_patterns_match_one_or_more_labels() {
        let pattern = "https://*.vercel.app";
        assert!(origin_matches(pattern, "https://my-app.vercel.app"));
        assert!(origin_matches(pattern, "https://preview.my-app.vercel.app"));
        assert!(!origin_matches(pattern, "https://.vercel.app"));
        assert!(!origin_matches(pattern, "http://my-app.vercel.app"));
        assert!(!origin_matches(pattern, "https://my-app.vercel.app.evil.com"));
        assert!(!origin_matches(pattern, "https://evil.com/x.vercel.app"));
    }

    #[test]
    fn exact_entries_match_exactly() {
        assert!(origin_matches("http://localhost:3000", "http://localhost:3000"));
        assert!(!origin_matches("http://localhost:3000", "http://localhost:3001"));
    }

    #[test]
    fn cors_accepts_mixed_exact_and_pattern_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://*.vercel.app".to_string(),
        ];
        assert!(cors_layer(&origins).is_ok());
    }

    #[test]
    fn cors_rejects_malformed_origin() {
        assert!(cors_layer(&["http://bad\norigin".to_string()]).is_err());
    }

    #[test]
    fn panic_response_is_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
