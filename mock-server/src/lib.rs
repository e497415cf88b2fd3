use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

/// Body served for every successful render: a PNG signature followed by a
/// marker. Clients only ever pass it through.
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nmock-qr-code";

const SIZES: [&str; 6] = ["s", "m", "l", "xl", "xxl", "xxxl"];

const ERROR_CORRECTION_LEVELS: [&str; 4] = ["L", "M", "H", "Q"];

const EYE_PATTERNS: [&str; 29] = [
    "ROUND_RECT",
    "RECT_RECT",
    "RECT_CIRC",
    "ROUNDRECT_CIRC",
    "CIRC_CIRC",
    "BR_LEAF",
    "TR_LEAF",
    "BL_LEAF",
    "TL_LEAF",
    "TRBR_LEAF",
    "TRBL_LEAF",
    "TRBL_LEAF_CIRC",
    "TRBL_LEAF_DIAD",
    "RECT_DIAD",
    "UNI_LEAF",
    "BLOAT_RECT",
    "WARP_RECT0",
    "CURVE_RECT",
    "DIST_RECT",
    "ZIGZAG",
    "WARP_RECT1",
    "BLACK_HOLE",
    "STAR",
    "GRID",
    "SCION",
    "OCTAGON",
    "FLOWER",
    "HUT",
    "DARK_HUT",
];

/// Query parameters of every request the server has seen, oldest first.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<RwLock<Vec<HashMap<String, String>>>>);

impl RequestLog {
    pub async fn entries(&self) -> Vec<HashMap<String, String>> {
        self.0.read().await.clone()
    }

    /// Synchronous snapshot for callers outside the runtime.
    pub fn blocking_entries(&self) -> Vec<HashMap<String, String>> {
        self.0.blocking_read().clone()
    }

    async fn record(&self, params: HashMap<String, String>) {
        self.0.write().await.push(params);
    }
}

pub fn app() -> Router {
    router(RequestLog::default())
}

pub fn router(log: RequestLog) -> Router {
    Router::new()
        .route("/v2/qrcode/url", get(qrcode_url))
        .with_state(log)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_log(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, router(log)).await
}

async fn qrcode_url(
    State(log): State<RequestLog>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    info!(params = params.len(), "render request");
    log.record(params.clone()).await;

    match validate(&params) {
        Ok(()) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "image/png")],
            FAKE_PNG,
        )
            .into_response(),
        Err(message) => {
            info!(%message, "rejected render request");
            (StatusCode::BAD_REQUEST, message).into_response()
        }
    }
}

fn validate(params: &HashMap<String, String>) -> Result<(), String> {
    if params.get("url").is_none_or(|url| url.is_empty()) {
        return Err("url is required".to_string());
    }
    check_choice(params, "size", &SIZES)?;
    check_choice(params, "error_correction", &ERROR_CORRECTION_LEVELS)?;
    check_choice(params, "eye_pattern", &EYE_PATTERNS)?;

    let has_logo_options = params
        .keys()
        .any(|k| k.starts_with("logo_") && k != "logo_url");
    if has_logo_options && !params.contains_key("logo_url") {
        return Err("logo_url is required with logo options".to_string());
    }
    Ok(())
}

fn check_choice(
    params: &HashMap<String, String>,
    key: &str,
    allowed: &[&str],
) -> Result<(), String> {
    match params.get(key) {
        Some(value) if !allowed.contains(&value.as_str()) => {
            Err(format!("invalid {key}: {value}"))
        }
        _ => Ok(()),
    }
}
