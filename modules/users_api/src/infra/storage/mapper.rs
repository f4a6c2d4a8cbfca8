use crate::contract::model::User;
use crate::infra::storage::entity::Model as UserRow;

/// Convert a database row to the contract model.
pub fn row_to_user(row: UserRow) -> User {
    User {
        id: row.id,
        username: row.username,
        email: row.email,
        created_at: row.created_at,
    }
}
