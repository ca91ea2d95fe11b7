//! SeaORM entities for the scheduling tables.

pub mod appointment;
pub mod doctor;
pub mod doctors_work_time;
