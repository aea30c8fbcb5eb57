//! PostgreSQL post store implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use folio_core::StoreError;
use folio_core::domain::{BlogPost, PostPatch};
use folio_core::ports::PostStore;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// Post store backed by a SeaORM Postgres connection.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> StoreError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        StoreError::Constraint(err_str)
    } else {
        StoreError::Query(err_str)
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let rows = BlogPostEntity::find()
            .order_by_desc(blog_post::Column::PublishedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        tracing::debug!(post_slug = %slug, "Finding post by slug");

        let row = BlogPostEntity::find()
            .filter(blog_post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, StoreError> {
        let active: blog_post::ActiveModel = post.into();
        let stored = active.insert(&self.db).await.map_err(map_db_err)?;
        Ok(stored.into())
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<BlogPost>, StoreError> {
        // Read-modify-write; last write wins, no version check.
        let row = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut post: BlogPost = row.into();
        patch.apply(&mut post);

        let active: blog_post::ActiveModel = post.into();
        match active.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            // Row vanished between the read and the write.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}
