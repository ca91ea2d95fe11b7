pub use sea_orm_migration::prelude::*;

mod m20250129_000001_create_doctors;
mod m20250129_000002_create_appointments;
mod m20250205_000003_create_doctors_work_time;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250129_000001_create_doctors::Migration),
            Box::new(m20250129_000002_create_appointments::Migration),
            Box::new(m20250205_000003_create_doctors_work_time::Migration),
        ]
    }
}
