use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use tracing::{debug, info, instrument};

use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::error::DomainError;
use crate::infra::storage::{entity, mapper};

/// Domain service containing the business logic for user management.
///
/// Every public method performs exactly one logical store operation;
/// the multi-statement update runs inside a transaction that rolls
/// back on any early exit.
#[derive(Clone)]
pub struct Service {
    db: DatabaseConnection,
}

impl Service {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connectivity probe for the database-status endpoint. Does not
    /// touch any table.
    #[instrument(skip(self))]
    pub async fn check_database(&self) -> Result<(), DomainError> {
        self.db
            .ping()
            .await
            .map_err(|e| DomainError::connection(e.to_string()))
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        debug!("Getting user by id");

        let row = entity::find_by_id(&self.db, id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        Ok(mapper::row_to_user(row))
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        debug!("Listing all users");

        let rows = entity::find_all_by_id_asc(&self.db)
            .await
            .map_err(storage_error)?;

        debug!("Listed {} users", rows.len());
        Ok(rows.into_iter().map(mapper::row_to_user).collect())
    }

    #[instrument(skip(self), fields(email = %new_user.email))]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        // Friendly pre-check; the unique index stays authoritative for
        // concurrent writers.
        if entity::email_exists(&self.db, &new_user.email)
            .await
            .map_err(storage_error)?
        {
            return Err(DomainError::email_already_exists(new_user.email));
        }

        let email = new_user.email.clone();
        let row = entity::insert(
            &self.db,
            entity::NewUserRow {
                username: new_user.username,
                email: new_user.email,
            },
        )
        .await
        .map_err(|e| write_error(e, &email))?;

        let user = mapper::row_to_user(row);
        info!("Created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(skip(self, patch), fields(user_id = %id))]
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, DomainError> {
        info!("Updating user");

        if patch.is_empty() {
            return Err(DomainError::EmptyPatch);
        }

        // Load, check and update as one unit; dropping the transaction
        // on any early return rolls it back.
        let txn = self.db.begin().await.map_err(storage_error)?;

        let existing = entity::find_by_id(&txn, id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        if let Some(ref new_email) = patch.email {
            if new_email != &existing.email
                && entity::email_exists(&txn, new_email)
                    .await
                    .map_err(storage_error)?
            {
                return Err(DomainError::email_already_exists(new_email.clone()));
            }
        }

        let email = patch.email.clone().unwrap_or(existing.email);
        let row = entity::update(
            &txn,
            id,
            entity::UserRowPatch {
                username: patch.username,
                email: patch.email,
            },
        )
        .await
        .map_err(|e| write_error(e, &email))?;

        txn.commit().await.map_err(storage_error)?;

        info!("Updated user");
        Ok(mapper::row_to_user(row))
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        info!("Deleting user");

        let deleted = entity::delete(&self.db, id)
            .await
            .map_err(storage_error)?;

        if !deleted {
            return Err(DomainError::user_not_found(id));
        }

        info!("Deleted user");
        Ok(())
    }
}

/// Translate store faults into the domain taxonomy. Connection-level
/// failures are kept distinct from statement-level ones.
fn storage_error(err: DbErr) -> DomainError {
    match err {
        DbErr::Conn(e) => DomainError::connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => DomainError::connection(e.to_string()),
        other => DomainError::database(other.to_string()),
    }
}

/// Like `storage_error`, but recognizes the unique-index violation a
/// concurrent writer can cause between pre-check and write.
fn write_error(err: DbErr, email: &str) -> DomainError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        DomainError::email_already_exists(email)
    } else {
        storage_error(err)
    }
}
