use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::entity::doctor;

use super::StoreError;

#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub cpf: String,
    pub crm: String,
    pub email: String,
    pub name: String,
    pub speciality: i32,
    pub user_id: i32,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewDoctor) -> Result<doctor::Model, StoreError> {
    let model = doctor::ActiveModel {
        cpf: Set(new.cpf),
        crm: Set(new.crm),
        email: Set(new.email),
        name: Set(new.name),
        speciality: Set(new.speciality),
        user_id: Set(new.user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(doctor_id = model.id, user_id = model.user_id, "doctor created");
    Ok(model)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<doctor::Model, StoreError> {
    doctor::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "doctor",
            id,
        })
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<doctor::Model>, StoreError> {
    Ok(doctor::Entity::find()
        .order_by_asc(doctor::Column::Id)
        .all(db)
        .await?)
}

/// Deletes the doctor. Appointments and work times go with it through the
/// cascading foreign keys.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), StoreError> {
    let res = doctor::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(StoreError::NotFound {
            entity: "doctor",
            id,
        });
    }

    tracing::info!(doctor_id = id, "doctor deleted");
    Ok(())
}
