use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::ProductRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, stock, created_at, updated_at FROM products ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, stock, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let stock = i32::try_from(product.stock).map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO products (id, name, price, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                stock = EXCLUDED.stock,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id.as_str())
        .bind(&product.name)
        .bind(&product.price)
        .bind(stock)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
