use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        category::{entities::Category, ports::CategoryRepository},
        common::entities::app_errors::CoreError,
    },
    entity::categories::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_write_error(e: DbErr, action: &str) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::CategoryAlreadyExists,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => CoreError::CategoryInUse,
        _ => {
            error!("Failed to {} category: {}", action, e);
            CoreError::InternalServerError
        }
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, CoreError> {
        let categories = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list categories: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(categories.into_iter().map(Category::from).collect())
    }

    async fn exists(&self, category_id: Uuid) -> Result<bool, CoreError> {
        let count = Entity::find()
            .filter(Column::Id.eq(category_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check category existence: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn create(&self, category: Category) -> Result<Category, CoreError> {
        let active_model = ActiveModel {
            id: Set(category.id),
            name: Set(category.name),
            created_at: Set(category.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_write_error(e, "create"))?;

        Ok(Category::from(created))
    }

    async fn update(&self, category_id: Uuid, name: String) -> Result<Option<Category>, CoreError> {
        let active_model = ActiveModel {
            id: Unchanged(category_id),
            name: Set(name),
            ..Default::default()
        };

        match active_model.update(&self.db).await {
            Ok(updated) => Ok(Some(Category::from(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_write_error(e, "update")),
        }
    }

    async fn delete(&self, category_id: Uuid) -> Result<Option<Category>, CoreError> {
        let Some(existing) = Entity::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get category by id: {}", e);
                CoreError::InternalServerError
            })?
        else {
            return Ok(None);
        };

        let result = Entity::delete_by_id(category_id)
            .exec(&self.db)
            .await
            .map_err(|e| map_write_error(e, "delete"))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Category::from(existing)))
    }
}
