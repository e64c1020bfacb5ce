use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use decision_pipeline::error::AppError;
use decision_pipeline::workflows::screening::{
    to_csv_bytes, to_xlsx_bytes, BatchRequest, BatchStatus, DataType, MergedRecord, RecordCount,
    ScreeningBatch, ScreeningPipeline, DEFAULT_CSV_FILE_NAME, DEFAULT_XLSX_FILE_NAME,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScreeningBatchRequest {
    pub(crate) data_type: String,
    #[serde(default = "default_count")]
    pub(crate) count: u32,
    #[serde(default)]
    pub(crate) format: ExportFormat,
}

fn default_count() -> u32 {
    u32::from(RecordCount::default().get())
}

impl ScreeningBatchRequest {
    fn batch_request(&self) -> Result<BatchRequest, AppError> {
        Ok(BatchRequest {
            data_type: self.data_type.parse::<DataType>()?,
            count: RecordCount::new(self.count)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ExportFormat {
    #[default]
    Json,
    Csv,
    Xlsx,
}

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn attachment(content_type: &str, file_name: &str, body: Vec<u8>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
    ];
    (StatusCode::OK, headers, body).into_response()
}

#[derive(Debug, Serialize)]
pub(crate) struct ScreeningBatchResponse {
    pub(crate) status: BatchStatus,
    pub(crate) data_type: DataType,
    pub(crate) count: usize,
    pub(crate) columns: Vec<String>,
    pub(crate) records: Vec<MergedRecord>,
}

impl ScreeningBatchResponse {
    fn new(data_type: DataType, batch: ScreeningBatch) -> Self {
        Self {
            status: batch.status(),
            data_type,
            count: batch.len(),
            columns: batch.columns(),
            records: batch.into_records(),
        }
    }
}

pub(crate) fn screening_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/screening/batches", post(screening_batch_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Runs one batch on a blocking worker; the live client performs blocking HTTP.
pub(crate) async fn screening_batch_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScreeningBatchRequest>,
) -> Result<Response, AppError> {
    let request = payload.batch_request()?;
    let generator = state.generator.clone();

    let batch = tokio::task::spawn_blocking(move || ScreeningPipeline::new(generator).run(request))
        .await
        .map_err(|err| AppError::Task(err.to_string()))??;

    info!(
        data_type = %request.data_type,
        records = batch.len(),
        format = ?payload.format,
        "screening batch served"
    );

    match payload.format {
        ExportFormat::Json => {
            Ok(Json(ScreeningBatchResponse::new(request.data_type, batch)).into_response())
        }
        ExportFormat::Csv | ExportFormat::Xlsx if batch.is_empty() => {
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        ExportFormat::Csv => Ok(attachment(
            "text/csv; charset=utf-8",
            DEFAULT_CSV_FILE_NAME,
            to_csv_bytes(&batch)?,
        )),
        ExportFormat::Xlsx => Ok(attachment(
            XLSX_CONTENT_TYPE,
            DEFAULT_XLSX_FILE_NAME,
            to_xlsx_bytes(&batch)?,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::CannedGenerator;
    use axum::body::Body;
    use axum::http::Request;
    use decision_pipeline::workflows::screening::{GenerationError, TextGenerator};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct Failing(fn() -> GenerationError);

    impl TextGenerator for Failing {
        fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err((self.0)())
        }
    }

    struct Silent;

    impl TextGenerator for Silent {
        fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok("Nothing to report.".to_string())
        }
    }

    fn app(generator: Arc<dyn TextGenerator>, ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            generator,
        };
        screening_routes().layer(Extension(state))
    }

    fn failing_app(error: fn() -> GenerationError) -> Router {
        app(Arc::new(Failing(error)), true)
    }

    fn batch_request(body: serde_json::Value) -> Request<Body> {
        Request::post("/api/v1/screening/batches")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn read_body(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes")
            .to_vec()
    }

    async fn read_json_body(response: Response) -> serde_json::Value {
        serde_json::from_slice(&read_body(response).await).expect("json body")
    }

    #[tokio::test]
    async fn health_and_readiness_report_state() {
        let router = app(Arc::new(CannedGenerator::default()), false);

        let health = router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(health.status(), StatusCode::OK);

        let ready = router
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(read_json_body(ready).await["status"], "initializing");
    }

    #[tokio::test]
    async fn batch_endpoint_returns_screened_records() {
        let router = app(Arc::new(CannedGenerator::default()), true);

        let response = router
            .oneshot(batch_request(json!({ "data_type": "resume", "count": 2 })))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["status"], "completed");
        assert_eq!(payload["data_type"], "resume");
        assert_eq!(payload["count"], 2);
        assert_eq!(payload["columns"][0], "NAME");
        assert_eq!(payload["records"][0]["DECISION"], "Hire");
        assert_eq!(payload["records"][0]["WORKFLOW_STAGE"], "Interview");
        assert_eq!(payload["records"][1]["DECISION"], "Review");
        assert_eq!(payload["records"][1]["CONFIDENCE_SCORE"], 60);
    }

    #[tokio::test]
    async fn batch_endpoint_exports_csv_attachment() {
        let router = app(Arc::new(CannedGenerator::default()), true);

        let response = router
            .oneshot(batch_request(
                json!({ "data_type": "support-ticket", "count": 1, "format": "csv" }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        assert_eq!(
            disposition.as_deref(),
            Some("attachment; filename=\"synthetic_ai_system.csv\"")
        );
        let body = String::from_utf8(read_body(response).await).expect("utf8");
        assert!(body.starts_with("NAME,ROLE,SKILLS"));
        assert_eq!(body.lines().count(), 2);
    }

    #[tokio::test]
    async fn batch_endpoint_exports_xlsx_attachment() {
        let router = app(Arc::new(CannedGenerator::default()), true);

        let response = router
            .oneshot(batch_request(
                json!({ "data_type": "resume", "count": 2, "format": "xlsx" }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        assert_eq!(content_type.as_deref(), Some(XLSX_CONTENT_TYPE));
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        assert_eq!(
            disposition.as_deref(),
            Some("attachment; filename=\"synthetic_ai_system.xlsx\"")
        );
        let body = read_body(response).await;
        assert!(body.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn empty_batches_report_no_data() {
        let json_response = app(Arc::new(Silent), true)
            .oneshot(batch_request(json!({ "data_type": "invoice" })))
            .await
            .expect("route executes");
        assert_eq!(json_response.status(), StatusCode::OK);
        let payload = read_json_body(json_response).await;
        assert_eq!(payload["status"], "no_data");
        assert_eq!(payload["count"], 0);

        let csv_response = app(Arc::new(Silent), true)
            .oneshot(batch_request(json!({ "data_type": "invoice", "format": "csv" })))
            .await
            .expect("route executes");
        assert_eq!(csv_response.status(), StatusCode::NO_CONTENT);

        let xlsx_response = app(Arc::new(Silent), true)
            .oneshot(batch_request(json!({ "data_type": "invoice", "format": "xlsx" })))
            .await
            .expect("route executes");
        assert_eq!(xlsx_response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn invalid_parameters_are_bad_requests() {
        let router = app(Arc::new(CannedGenerator::default()), true);

        let count = router
            .clone()
            .oneshot(batch_request(json!({ "data_type": "resume", "count": 9 })))
            .await
            .expect("route executes");
        assert_eq!(count.status(), StatusCode::BAD_REQUEST);

        let data_type = router
            .oneshot(batch_request(json!({ "data_type": "poem", "count": 1 })))
            .await
            .expect("route executes");
        assert_eq!(data_type.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(data_type).await;
        assert!(payload["error"]
            .as_str()
            .is_some_and(|message| message.contains("poem")));
    }

    #[tokio::test]
    async fn generation_failures_surface_as_gateway_errors() {
        let unavailable = failing_app(|| GenerationError::MissingCredentials)
            .oneshot(batch_request(json!({ "data_type": "resume" })))
            .await
            .expect("route executes");
        assert_eq!(unavailable.status(), StatusCode::BAD_GATEWAY);

        let timeout = failing_app(|| GenerationError::Timeout { secs: 1 })
            .oneshot(batch_request(json!({ "data_type": "resume" })))
            .await
            .expect("route executes");
        assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
