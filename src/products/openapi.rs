//! OpenAPI / Swagger UI documentation for the product service
//!
//! - Swagger UI: `http://localhost:8081/docs`
//! - OpenAPI JSON: `http://localhost:8081/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::api::HealthResponse;

use super::models::{ProductRequest, ProductResponse};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Service API",
        version = "1.0.0",
        description = "RESTful API for managing products in the e-commerce catalog.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8081", description = "Development"),
    ),
    paths(
        crate::api::health::health_check,
        crate::products::handlers::create_product,
        crate::products::handlers::get_product_by_id,
        crate::products::handlers::get_all_products,
        crate::products::handlers::update_product,
        crate::products::handlers::delete_product,
        crate::products::handlers::search_products,
        crate::products::handlers::get_products_in_stock,
    ),
    components(
        schemas(
            HealthResponse,
            ProductRequest,
            ProductResponse,
        )
    ),
    tags(
        (name = "Product Management", description = "APIs for managing products in the catalog"),
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
        assert_eq!(spec.info.title, "Product Service API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_product_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/products"));
        assert!(paths.paths.contains_key("/api/v1/products/{id}"));
        assert!(paths.paths.contains_key("/api/v1/products/search"));
        assert!(paths.paths.contains_key("/api/v1/products/in-stock"));
    }
}
