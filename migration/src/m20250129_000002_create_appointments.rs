use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Appointments::DoctorId).integer().not_null())
                    .col(ColumnDef::new(Appointments::PatientId).integer().not_null())
                    .col(ColumnDef::new(Appointments::PatientName).text().not_null())
                    .col(
                        ColumnDef::new(Appointments::DateAppointment)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::Status)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Appointments::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_Appointments_Doctors_DoctorId")
                            .from(Appointments::Table, Appointments::DoctorId)
                            .to(Doctors::Table, Doctors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Appointments_DoctorId")
                    .table(Appointments::Table)
                    .col(Appointments::DoctorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Appointments {
    #[iden = "Appointments"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "DoctorId"]
    DoctorId,
    #[iden = "PatientId"]
    PatientId,
    #[iden = "PatientName"]
    PatientName,
    #[iden = "DateAppointment"]
    DateAppointment,
    #[iden = "Status"]
    Status,
    #[iden = "CreatedAt"]
    CreatedAt,
}

#[derive(Iden)]
enum Doctors {
    #[iden = "Doctors"]
    Table,
    #[iden = "Id"]
    Id,
}
