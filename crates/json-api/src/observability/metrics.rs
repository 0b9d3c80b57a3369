//! Prometheus request metrics and the `/metrics` endpoint.

use std::sync::OnceLock;

use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TEXT_FORMAT,
    TextEncoder,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

/// Label for requests that do not hit a known route.
const UNMATCHED_ROUTE: &str = "unmatched";

const DURATION_BUCKETS: [f64; 11] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
];

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
}

impl HttpMetrics {
    fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("storefront_json".to_owned()), None)?;

        let requests_total = IntCounterVec::new(
            Opts::new(
                "http_requests_total",
                "HTTP requests by method, route template and status code.",
            ),
            &["method", "route", "status_code"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds by method and route template.",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "HTTP requests currently being served.",
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
        })
    }
}

static HTTP_METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

fn metrics() -> Option<&'static HttpMetrics> {
    HTTP_METRICS
        .get_or_init(|| {
            HttpMetrics::new()
                .inspect_err(|source| error!("failed to register http metrics: {source}"))
                .ok()
        })
        .as_ref()
}

/// Keeps the in-flight gauge raised for as long as it is alive.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let Some(metrics) = metrics() else {
            return Self { tracked: false };
        };

        metrics.requests_in_flight.inc();

        Self { tracked: true }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, path: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let route = route_label(path);
    let status_code = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[method, route, status_code.as_str()])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Map a request path onto the route template that serves it.
///
/// Every path outside the router's table shares one label, so the set of
/// series stays fixed no matter what clients request.
fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        ["products"] => "/products",
        ["products", _] => "/products/{id}",
        ["orders"] => "/orders",
        ["orders", _] => "/orders/{id}",
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        return;
    };

    let body = match TextEncoder::new().encode_to_string(&metrics.registry.gather()) {
        Ok(body) => body,
        Err(source) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_FORMAT));
    res.render(body);
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };

    use super::*;

    #[test]
    fn id_segments_collapse_to_the_route_template() {
        assert_eq!(route_label("/products/42"), "/products/{id}");
        assert_eq!(route_label("/products/abc"), "/products/{id}");
        assert_eq!(route_label("/orders/7/"), "/orders/{id}");
        assert_eq!(route_label("/orders"), "/orders");
    }

    #[test]
    fn unknown_paths_share_one_label() {
        assert_eq!(route_label("/"), UNMATCHED_ROUTE);
        assert_eq!(route_label("/random-scan-path-123abc"), UNMATCHED_ROUTE);
        assert_eq!(route_label("/products/1/items"), UNMATCHED_ROUTE);
        assert_eq!(route_label("/wp-admin/setup.php"), UNMATCHED_ROUTE);
    }

    #[test]
    fn documentation_routes_are_labelled() {
        assert_eq!(route_label("/docs/index.html"), "/docs");
        assert_eq!(route_label("/api-doc/openapi.json"), "/api-doc/openapi.json");
    }

    #[tokio::test]
    async fn metrics_endpoint_reports_route_templates() {
        observe_request("GET", "/products/42", 200, 0.042);
        observe_request("GET", "/products/not-a-number", 400, 0.001);
        observe_request("POST", "/orders", 404, 0.123);
        observe_request("GET", "/.env", 404, 0.001);

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let body = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await
            .unwrap_or_default();

        assert!(
            body.contains("storefront_json_http_requests_total"),
            "expected namespaced request counter"
        );
        assert!(
            body.contains("storefront_json_http_request_duration_seconds"),
            "expected namespaced duration histogram"
        );
        assert!(
            body.contains("storefront_json_http_requests_in_flight"),
            "expected namespaced in-flight gauge"
        );
        assert!(
            body.contains(r#"route="/products/{id}""#),
            "expected product id template label"
        );
        assert!(
            body.contains(r#"route="/orders""#),
            "expected orders collection label"
        );
        assert!(
            body.contains(r#"route="unmatched""#),
            "expected unknown paths to share one label"
        );
        assert!(
            !body.contains("not-a-number") && !body.contains(".env"),
            "raw paths must not become labels"
        );
    }
}
