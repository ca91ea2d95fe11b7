use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoctorsWorkTime::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DoctorsWorkTime::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DoctorsWorkTime::DoctorId)
                            .integer()
                            .not_null(),
                    )
                    // 0 = Sunday .. 6 = Saturday
                    .col(
                        ColumnDef::new(DoctorsWorkTime::WeekDay)
                            .integer()
                            .not_null()
                            .check(Expr::col(DoctorsWorkTime::WeekDay).between(0, 6)),
                    )
                    .col(ColumnDef::new(DoctorsWorkTime::StartTime).time().not_null())
                    .col(ColumnDef::new(DoctorsWorkTime::ExitTime).time().not_null())
                    .col(
                        ColumnDef::new(DoctorsWorkTime::StartInterval)
                            .time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorsWorkTime::FinishInterval)
                            .time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorsWorkTime::AppointmentDuration)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorsWorkTime::AppointmentPrice)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorsWorkTime::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_DoctorsWorkTime_Doctors_DoctorId")
                            .from(DoctorsWorkTime::Table, DoctorsWorkTime::DoctorId)
                            .to(Doctors::Table, Doctors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_DoctorsWorkTime_DoctorId")
                    .table(DoctorsWorkTime::Table)
                    .col(DoctorsWorkTime::DoctorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoctorsWorkTime::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DoctorsWorkTime {
    #[iden = "DoctorsWorkTime"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "DoctorId"]
    DoctorId,
    #[iden = "WeekDay"]
    WeekDay,
    #[iden = "StartTime"]
    StartTime,
    #[iden = "ExitTime"]
    ExitTime,
    #[iden = "StartInterval"]
    StartInterval,
    #[iden = "FinishInterval"]
    FinishInterval,
    #[iden = "AppointmentDuration"]
    AppointmentDuration,
    #[iden = "AppointmentPrice"]
    AppointmentPrice,
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
