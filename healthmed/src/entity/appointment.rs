use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};

/// Status a new appointment gets when none is given (pending).
pub const INITIAL_STATUS: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Appointments")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "DoctorId")]
    pub doctor_id: i32,
    /// Patient record in the patients service.
    #[sea_orm(column_name = "PatientId")]
    pub patient_id: i32,
    /// Snapshot of the patient's name at booking time.
    #[sea_orm(column_name = "PatientName", column_type = "Text")]
    pub patient_name: String,
    #[sea_orm(column_name = "DateAppointment")]
    pub date_appointment: DateTimeWithTimeZone,
    #[sea_orm(column_name = "Status")]
    pub status: i32,
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
