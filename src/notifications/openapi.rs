//! OpenAPI / Swagger UI documentation for the notification service
//!
//! - Swagger UI: `http://localhost:8083/docs`
//! - OpenAPI JSON: `http://localhost:8083/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::api::HealthResponse;

use super::models::{
    NotificationRequest, NotificationResponse, NotificationStatus, NotificationType,
};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notification Service API",
        version = "1.0.0",
        description = "Notification service for email, SMS, and push notification records.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8083", description = "Development"),
    ),
    paths(
        crate::api::health::health_check,
        crate::notifications::handlers::send_notification,
        crate::notifications::handlers::get_all_notifications,
        crate::notifications::handlers::get_by_recipient,
        crate::notifications::handlers::get_by_order_id,
    ),
    components(
        schemas(
            HealthResponse,
            NotificationRequest,
            NotificationResponse,
            NotificationType,
            NotificationStatus,
        )
    ),
    tags(
        (name = "Notification Management", description = "APIs for managing notifications"),
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
        assert_eq!(spec.info.title, "Notification Service API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_notification_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/notifications"));
        assert!(
            paths
                .paths
                .contains_key("/api/v1/notifications/recipient/{recipient}")
        );
        assert!(
            paths
                .paths
                .contains_key("/api/v1/notifications/order/{order_id}")
        );
    }
}
