//! Product service - business logic for catalog operations

use sqlx::PgPool;

use super::error::ProductError;
use super::models::{Product, ProductRequest};
use super::repository::ProductRepository;

pub struct ProductService;

impl ProductService {
    pub async fn create_product(
        pool: &PgPool,
        req: &ProductRequest,
    ) -> Result<Product, ProductError> {
        tracing::info!("Creating new product: {}", req.name);

        let product = ProductRepository::create(
            pool,
            &req.name,
            req.description.as_deref(),
            req.price,
            req.stock_quantity,
        )
        .await?;

        tracing::info!("Product created successfully with ID: {}", product.id);
        Ok(product)
    }

    pub async fn get_product(pool: &PgPool, id: i64) -> Result<Product, ProductError> {
        tracing::info!("Fetching product with ID: {}", id);

        ProductRepository::get_by_id(pool, id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>, ProductError> {
        tracing::info!("Fetching all products");

        Ok(ProductRepository::list_all(pool).await?)
    }

    pub async fn update_product(
        pool: &PgPool,
        id: i64,
        req: &ProductRequest,
    ) -> Result<Product, ProductError> {
        tracing::info!("Updating product with ID: {}", id);

        let updated = ProductRepository::update(
            pool,
            id,
            &req.name,
            req.description.as_deref(),
            req.price,
            req.stock_quantity,
        )
        .await?
        .ok_or(ProductError::NotFound(id))?;

        tracing::info!("Product updated successfully with ID: {}", updated.id);
        Ok(updated)
    }

    /// Hard delete; unlike orders, products are physically removed
    pub async fn delete_product(pool: &PgPool, id: i64) -> Result<(), ProductError> {
        tracing::info!("Deleting product with ID: {}", id);

        if !ProductRepository::delete(pool, id).await? {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!("Product deleted successfully with ID: {}", id);
        Ok(())
    }

    pub async fn search_products(pool: &PgPool, term: &str) -> Result<Vec<Product>, ProductError> {
        tracing::info!("Searching products with term: {}", term);

        Ok(ProductRepository::search(pool, term).await?)
    }

    pub async fn products_in_stock(pool: &PgPool) -> Result<Vec<Product>, ProductError> {
        tracing::info!("Fetching products in stock");

        Ok(ProductRepository::find_in_stock(pool).await?)
    }
}
