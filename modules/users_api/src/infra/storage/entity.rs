use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Data for inserting a new user row. The store assigns `id` and
/// `created_at`.
pub struct NewUserRow {
    pub username: String,
    pub email: String,
}

/// Partial column set for an update; only supplied columns change.
pub struct UserRowPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Find a user by id.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

/// All users ordered by ascending id.
pub async fn find_all_by_id_asc<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
    Entity::find().order_by_asc(Column::Id).all(db).await
}

/// Check if an email already exists.
pub async fn email_exists<C: ConnectionTrait>(db: &C, email: &str) -> Result<bool, DbErr> {
    let count = Entity::find()
        .filter(Column::Email.eq(email))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Insert a new user row and return it with the assigned id and
/// creation timestamp.
pub async fn insert<C: ConnectionTrait>(db: &C, row: NewUserRow) -> Result<Model, DbErr> {
    let active_model = ActiveModel {
        id: NotSet,
        username: Set(row.username),
        email: Set(row.email),
        created_at: Set(Utc::now()),
    };

    active_model.insert(db).await
}

/// Apply a partial update to an existing row. Columns absent from the
/// patch are left untouched; each present column is bound as its own
/// typed parameter.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    patch: UserRowPatch,
) -> Result<Model, DbErr> {
    let mut active_model = ActiveModel {
        id: Set(id),
        ..Default::default()
    };

    if let Some(username) = patch.username {
        active_model.username = Set(username);
    }
    if let Some(email) = patch.email {
        active_model.email = Set(email);
    }

    active_model.update(db).await
}

/// Delete a user by id, returns true if a row was deleted.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
