//! Data access for doctors, their weekly work times and their appointments.
//!
//! Functions take any [`sea_orm::ConnectionTrait`], so they run the same on a
//! pooled connection or inside a transaction. Referential integrity is left to
//! the store: a dangling `DoctorId` is rejected by the foreign key, not by a
//! lookup done here first.

use sea_orm::{DbErr, SqlErr};

pub mod appointments;
pub mod doctors;
pub mod work_times;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// Unique or foreign-key violation reported by the database.
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(DbErr),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<DbErr> for StoreError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::Constraint(msg),
            _ => StoreError::Db(e),
        }
    }
}
