use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};
use crate::model::advance::{Advance, NewAdvance};

pub async fn list_by_employee(pool: &SqlitePool, employee_code: &str) -> StoreResult<Vec<Advance>> {
    sqlx::query_as::<_, Advance>("SELECT * FROM advances WHERE employee_code = ?")
        .bind(employee_code)
        .fetch_all(pool)
        .await
        .map_err(StoreError::storage("fetch advances"))
}

pub async fn create(pool: &SqlitePool, advance: NewAdvance) -> StoreResult<Advance> {
    // is_paid is bound as a bool and stored as INTEGER 0/1
    sqlx::query_as::<_, Advance>(
        r#"
        INSERT INTO advances (employee_code, amount, request_date, is_paid)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(advance.employee_code)
    .bind(advance.amount)
    .bind(advance.request_date)
    .bind(advance.is_paid)
    .fetch_one(pool)
    .await
    .map_err(StoreError::storage("create advance"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{employee, test_pool};
    use crate::model::advance::CreateAdvance;
    use crate::model::employee::CreateEmployee;
    use chrono::NaiveDate;

    async fn seed_employee(pool: &SqlitePool, code: &str) {
        let payload = CreateEmployee {
            code: Some(code.into()),
            name: Some("A".into()),
            basic_salary: Some(1000.0),
            ..Default::default()
        };
        employee::create(pool, payload.with_defaults()).await.unwrap();
    }

    fn advance(code: &str, amount: f64) -> NewAdvance {
        CreateAdvance {
            employee_code: Some(code.into()),
            amount: Some(amount),
            request_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            is_paid: None,
        }
        .with_defaults()
    }

    #[actix_web::test]
    async fn lists_all_advances_for_employee() {
        let pool = test_pool().await;
        seed_employee(&pool, "E1").await;
        seed_employee(&pool, "E2").await;

        let first = create(&pool, advance("E1", 100.0)).await.unwrap();
        let second = create(&pool, advance("E1", 250.0)).await.unwrap();
        create(&pool, advance("E2", 75.0)).await.unwrap();

        let mut ids: Vec<_> = list_by_employee(&pool, "E1")
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        ids.sort();
        assert_eq!(ids, [first.id, second.id]);
        assert!(!first.is_paid);
    }

    #[actix_web::test]
    async fn paid_flag_round_trips_as_bool() {
        let pool = test_pool().await;
        seed_employee(&pool, "E1").await;
        let mut paid = advance("E1", 10.0);
        paid.is_paid = true;

        let created = create(&pool, paid).await.unwrap();
        assert!(created.is_paid);

        let stored: i64 = sqlx::query_scalar("SELECT is_paid FROM advances WHERE id = ?")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, 1);
    }

    #[actix_web::test]
    async fn unknown_employee_is_rejected_by_foreign_key() {
        let pool = test_pool().await;
        let err = create(&pool, advance("ghost", 10.0)).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to create advance: "));
    }

    #[actix_web::test]
    async fn no_advances_is_empty_list() {
        let pool = test_pool().await;
        assert!(list_by_employee(&pool, "E1").await.unwrap().is_empty());
    }
}
