use axum::http::StatusCode;

/// GET /health
/// Response: 200 OK, plain-text body "OK"
///
/// Liveness probe for the load balancer. Touches no state.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_returns_ok() {
        assert_eq!(health_check().await, (StatusCode::OK, "OK"));
    }
}
