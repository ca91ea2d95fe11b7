use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};

/// One weekly shift for a doctor: working hours, a break inside them, and
/// how long and how much each appointment slot is.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "DoctorsWorkTime")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "DoctorId")]
    pub doctor_id: i32,
    /// 0 = Sunday .. 6 = Saturday
    #[sea_orm(column_name = "WeekDay")]
    pub week_day: i32,
    #[sea_orm(column_name = "StartTime")]
    pub start_time: Time,
    #[sea_orm(column_name = "ExitTime")]
    pub exit_time: Time,
    #[sea_orm(column_name = "StartInterval")]
    pub start_interval: Time,
    #[sea_orm(column_name = "FinishInterval")]
    pub finish_interval: Time,
    /// Minutes per slot.
    #[sea_orm(column_name = "AppointmentDuration")]
    pub appointment_duration: i32,
    #[sea_orm(column_name = "AppointmentPrice", column_type = "Double")]
    pub appointment_price: f64,
    #[sea_orm(column_name = "CreatedAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Doctor,
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.created_at = ActiveValue::NotSet;
        Ok(self)
    }
}
