use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entity::appointment;

use super::{StoreError, doctors};

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub doctor_id: i32,
    pub patient_id: i32,
    pub patient_name: String,
    pub date_appointment: DateTimeWithTimeZone,
    /// `None` leaves the column to its store default, [`appointment::INITIAL_STATUS`].
    pub status: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    new: NewAppointment,
) -> Result<appointment::Model, StoreError> {
    let doctor_id = new.doctor_id;
    let status = match new.status {
        Some(status) => Set(status),
        None => ActiveValue::NotSet,
    };

    let model = appointment::ActiveModel {
        doctor_id: Set(doctor_id),
        patient_id: Set(new.patient_id),
        patient_name: Set(new.patient_name),
        date_appointment: Set(new.date_appointment),
        status,
        ..Default::default()
    }
    .insert(db)
    .await
    .inspect_err(|e| tracing::warn!(doctor_id, error = %e, "appointment insert rejected"))?;

    tracing::info!(
        appointment_id = model.id,
        doctor_id = model.doctor_id,
        status = model.status,
        "appointment created"
    );
    Ok(model)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<appointment::Model, StoreError> {
    appointment::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "appointment",
            id,
        })
}

/// Appointments of one doctor, earliest first. Unknown doctor is `NotFound`.
pub async fn list_for_doctor<C: ConnectionTrait>(
    db: &C,
    doctor_id: i32,
) -> Result<Vec<appointment::Model>, StoreError> {
    doctors::find(db, doctor_id).await?;

    Ok(appointment::Entity::find()
        .filter(appointment::Column::DoctorId.eq(doctor_id))
        .order_by_asc(appointment::Column::DateAppointment)
        .order_by_asc(appointment::Column::Id)
        .all(db)
        .await?)
}

/// Status is the only column that changes after booking.
pub async fn update_status<C: ConnectionTrait>(
    db: &C,
    id: i32,
    status: i32,
) -> Result<appointment::Model, StoreError> {
    let existing = find(db, id).await?;
    let previous = existing.status;

    let mut active: appointment::ActiveModel = existing.into();
    active.status = Set(status);
    let updated = active.update(db).await?;

    tracing::info!(appointment_id = id, from = previous, to = status, "appointment status changed");
    Ok(updated)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), StoreError> {
    let res = appointment::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(StoreError::NotFound {
            entity: "appointment",
            id,
        });
    }
    Ok(())
}
