use sea_orm::prelude::Time;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::entity::doctors_work_time;

use super::{StoreError, doctors};

#[derive(Debug, Clone)]
pub struct NewWorkTime {
    pub doctor_id: i32,
    /// 0 = Sunday .. 6 = Saturday; the store rejects anything else.
    pub week_day: i32,
    pub start_time: Time,
    pub exit_time: Time,
    pub start_interval: Time,
    pub finish_interval: Time,
    pub appointment_duration: i32,
    pub appointment_price: f64,
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    new: NewWorkTime,
) -> Result<doctors_work_time::Model, StoreError> {
    let model = doctors_work_time::ActiveModel {
        doctor_id: Set(new.doctor_id),
        week_day: Set(new.week_day),
        start_time: Set(new.start_time),
        exit_time: Set(new.exit_time),
        start_interval: Set(new.start_interval),
        finish_interval: Set(new.finish_interval),
        appointment_duration: Set(new.appointment_duration),
        appointment_price: Set(new.appointment_price),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(
        work_time_id = model.id,
        doctor_id = model.doctor_id,
        week_day = model.week_day,
        "work time created"
    );
    Ok(model)
}

/// Shifts of one doctor ordered through the week. Unknown doctor is `NotFound`.
pub async fn list_for_doctor<C: ConnectionTrait>(
    db: &C,
    doctor_id: i32,
) -> Result<Vec<doctors_work_time::Model>, StoreError> {
    let doctor = doctors::find(db, doctor_id).await?;

    Ok(doctor
        .find_related(doctors_work_time::Entity)
        .order_by_asc(doctors_work_time::Column::WeekDay)
        .order_by_asc(doctors_work_time::Column::StartTime)
        .all(db)
        .await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), StoreError> {
    let res = doctors_work_time::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(StoreError::NotFound {
            entity: "work time",
            id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::{insert_doctor, setup_db};
    use chrono::{NaiveTime, Utc};
    use sea_orm::PaginatorTrait;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn shift(doctor_id: i32, week_day: i32, start: NaiveTime) -> NewWorkTime {
        NewWorkTime {
            doctor_id,
            week_day,
            start_time: start,
            exit_time: hm(18, 0),
            start_interval: hm(12, 0),
            finish_interval: hm(13, 0),
            appointment_duration: 30,
            appointment_price: 180.5,
        }
    }

    #[tokio::test]
    async fn create_round_trips_times_and_price() {
        let db = setup_db().await;
        let doc = insert_doctor(&db, "Ana").await;
        let before = Utc::now().naive_utc();

        let wt = create(&db, shift(doc.id, 2, hm(8, 30))).await.unwrap();

        assert_eq!(wt.start_time, hm(8, 30));
        assert_eq!(wt.finish_interval, hm(13, 0));
        assert_eq!(wt.appointment_duration, 30);
        assert_eq!(wt.appointment_price, 180.5);
        assert!((wt.created_at - before).num_seconds().abs() <= 5);
    }

    #[tokio::test]
    async fn week_day_out_of_range_rejected() {
        let db = setup_db().await;
        let doc = insert_doctor(&db, "Ana").await;

        for day in [7, -1] {
            let err = create(&db, shift(doc.id, day, hm(8, 0))).await.unwrap_err();
            assert!(matches!(err, StoreError::Db(_)), "day {day}: got {err:?}");
        }
        assert!(create(&db, shift(doc.id, 0, hm(8, 0))).await.is_ok());
        assert!(create(&db, shift(doc.id, 6, hm(8, 0))).await.is_ok());
    }

    #[tokio::test]
    async fn dangling_doctor_rejected() {
        let db = setup_db().await;

        let err = create(&db, shift(31, 1, hm(8, 0))).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)), "got {err:?}");
        assert_eq!(
            doctors_work_time::Entity::find().count(&db).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn list_for_doctor_orders_by_day_then_start() {
        let db = setup_db().await;
        let doc = insert_doctor(&db, "Ana").await;
        let other = insert_doctor(&db, "Bruno").await;

        let wed_afternoon = create(&db, shift(doc.id, 3, hm(14, 0))).await.unwrap();
        let mon = create(&db, shift(doc.id, 1, hm(8, 0))).await.unwrap();
        let wed_morning = create(&db, shift(doc.id, 3, hm(7, 0))).await.unwrap();
        create(&db, shift(other.id, 0, hm(8, 0))).await.unwrap();

        let listed = list_for_doctor(&db, doc.id).await.unwrap();
        assert_eq!(
            listed.iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![mon.id, wed_morning.id, wed_afternoon.id]
        );
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let db = setup_db().await;
        assert!(delete(&db, 3).await.unwrap_err().is_not_found());
    }
}
