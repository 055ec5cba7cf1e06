use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "bank_http_requests_total",
        "Total HTTP requests handled, by service, method and status",
        &["service", "method", "status"]
    )
    .expect("register http_requests_total")
});

pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "bank_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["service"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register http_request_duration")
});

pub static MKS_CALLS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "bank_mks_calls_total",
        "Calls from the clients service to the accounts service, by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("register mks_calls_total")
});

pub fn record_http(service: &str, method: &str, status: u16, elapsed_secs: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[service, method, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION.with_label_values(&[service]).observe(elapsed_secs);
}

pub fn record_mks_call(operation: &str, ok: bool) {
    MKS_CALLS_TOTAL
        .with_label_values(&[operation, if ok { "ok" } else { "error" }])
        .inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_requests_show_up_in_text_output() {
        record_http("accounts", "GET", 200, 0.002);
        record_mks_call("find_accounts_by_client_id", false);
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("bank_http_requests_total"));
        assert!(body.contains("bank_mks_calls_total"));
    }
}
