// HTTP surface of the dashboard
// Serves the page, the widget layout, and chart updates for widget changes

mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::LaunchDashError;
use crate::controller::{DashboardController, InputWidget, OutputUpdate};
use crate::filter::{FilterSelection, PayloadRange, SiteSelection};
use crate::layout::DashboardLayout;

pub struct ServerState {
    controller: DashboardController,
    payload_step: f64,
}

impl ServerState {
    pub fn new(controller: DashboardController, payload_step: f64) -> Self {
        Self {
            controller,
            payload_step,
        }
    }
}

/// Body of a widget change. An empty `changed` list renders every output.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub changed: Vec<InputWidget>,
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateResponse {
    pub outputs: Vec<OutputUpdate>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/layout", get(layout))
        .route("/api/update", post(update))
        .route("/api/charts", get(charts))
        .with_state(state)
}

/// Serves the dashboard until the process is stopped.
pub async fn serve(state: Arc<ServerState>, addr: SocketAddr) -> Result<(), LaunchDashError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| LaunchDashError::ServerBindError {
            address: addr.to_string(),
            source: e,
        })?;

    info!("Dashboard running at http://{}", addr);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| LaunchDashError::ServerError { source: e })
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

async fn layout(State(state): State<Arc<ServerState>>) -> Json<DashboardLayout> {
    Json(state.controller.layout(state.payload_step))
}

async fn update(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    let selection = FilterSelection {
        site: request.site,
        payload_range: request.payload_range,
    };
    debug!("Widget update {:?} with {:?}", request.changed, selection);

    let outputs = if request.changed.is_empty() {
        state.controller.render_all(&selection)
    } else {
        state.controller.dispatch(&request.changed, &selection)
    };
    Json(UpdateResponse { outputs })
}

async fn charts(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ChartQuery>,
) -> Json<UpdateResponse> {
    let defaults = state.controller.default_selection();
    let selection = FilterSelection {
        site: query.site.map(SiteSelection::from).unwrap_or(defaults.site),
        payload_range: PayloadRange::new(
            query.low.unwrap_or(defaults.payload_range.low),
            query.high.unwrap_or(defaults.payload_range.high),
        ),
    };

    Json(UpdateResponse {
        outputs: state.controller.render_all(&selection),
    })
}
