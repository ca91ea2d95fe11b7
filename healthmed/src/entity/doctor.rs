use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Doctors")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    /// National ID.
    #[sea_orm(column_name = "CPF", column_type = "Text")]
    pub cpf: String,
    /// Medical license registration number.
    #[sea_orm(column_name = "CRM", column_type = "Text")]
    pub crm: String,
    #[sea_orm(column_name = "Email", column_type = "Text")]
    pub email: String,
    #[sea_orm(column_name = "Name", column_type = "Text")]
    pub name: String,
    #[sea_orm(column_name = "Speciality")]
    pub speciality: i32,
    /// Identity record in the auth service.
    #[sea_orm(column_name = "UserId")]
    pub user_id: i32,
    #[sea_orm(column_name = "CreatedAt")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
    #[sea_orm(has_many = "super::doctors_work_time::Entity")]
    DoctorsWorkTime,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl Related<super::doctors_work_time::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoctorsWorkTime.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// `CreatedAt` is owned by the store default and never written by the app.
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.created_at = ActiveValue::NotSet;
        Ok(self)
    }
}
