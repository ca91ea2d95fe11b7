use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Doctors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Doctors::Cpf).text().not_null())
                    .col(ColumnDef::new(Doctors::Crm).text().not_null())
                    .col(ColumnDef::new(Doctors::Email).text().not_null())
                    .col(ColumnDef::new(Doctors::Name).text().not_null())
                    .col(ColumnDef::new(Doctors::Speciality).integer().not_null())
                    .col(ColumnDef::new(Doctors::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Doctors::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Doctors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Doctors {
    #[iden = "Doctors"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "CPF"]
    Cpf,
    #[iden = "CRM"]
    Crm,
    #[iden = "Email"]
    Email,
    #[iden = "Name"]
    Name,
    #[iden = "Speciality"]
    Speciality,
    #[iden = "UserId"]
    UserId,
    #[iden = "CreatedAt"]
    CreatedAt,
}
