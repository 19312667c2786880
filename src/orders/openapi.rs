//! OpenAPI / Swagger UI documentation for the order service
//!
//! - Swagger UI: `http://localhost:8082/docs`
//! - OpenAPI JSON: `http://localhost:8082/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::api::HealthResponse;

use super::lifecycle::OrderStatus;
use super::models::{OrderRequest, OrderResponse, OrderStatusUpdateRequest};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "RESTful API for managing customer orders in an e-commerce microservices architecture.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8082", description = "Development"),
    ),
    paths(
        crate::api::health::health_check,
        crate::orders::handlers::create_order,
        crate::orders::handlers::get_order_by_id,
        crate::orders::handlers::get_all_orders,
        crate::orders::handlers::update_order,
        crate::orders::handlers::cancel_order,
        crate::orders::handlers::update_order_status,
        crate::orders::handlers::get_orders_by_customer,
        crate::orders::handlers::get_orders_by_status,
        crate::orders::handlers::get_recent_orders,
    ),
    components(
        schemas(
            HealthResponse,
            OrderRequest,
            OrderResponse,
            OrderStatusUpdateRequest,
            OrderStatus,
        )
    ),
    tags(
        (name = "Order Management", description = "APIs for managing customer orders"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Order Service API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Order Service API"));
    }

    #[test]
    fn test_order_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/orders"));
        assert!(paths.paths.contains_key("/api/v1/orders/{id}"));
        assert!(paths.paths.contains_key("/api/v1/orders/{id}/status"));
        assert!(paths.paths.contains_key("/api/v1/orders/recent"));
    }
}
