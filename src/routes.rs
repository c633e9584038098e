use crate::{
    api::{advance, backup, employee, salary_report},
    config::Config,
    error::ApiError,
};
use actix_web::{HttpResponse, Responder, get, web};

#[get("/favicon.ico")]
async fn favicon() -> impl Responder {
    HttpResponse::NoContent().finish()
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Malformed bodies fall through to the generic 500
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Unexpected(err.to_string()).into()),
    );

    cfg.service(favicon);

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{code}
                    .service(web::resource("/{code}").route(web::get().to(employee::get_employee))),
            )
            .service(
                web::scope("/advances")
                    .service(web::resource("").route(web::post().to(advance::create_advance)))
                    .service(
                        web::resource("/{employee_code}")
                            .route(web::get().to(advance::list_advances)),
                    ),
            )
            .service(
                web::scope("/salary-reports")
                    .service(
                        web::resource("")
                            .route(web::post().to(salary_report::create_salary_report)),
                    )
                    .service(
                        web::resource("/{employee_code}")
                            .route(web::get().to(salary_report::list_salary_reports)),
                    ),
            )
            .service(
                web::resource("/backup-history").route(web::post().to(backup::record_backup)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use actix_web::{App, http::StatusCode, test, web::Data};
    use serde_json::{Value, json};

    macro_rules! app {
        ($pool:expr) => {
            test::init_service(
                App::new()
                    .app_data(Data::new($pool))
                    .configure(|cfg| configure(cfg, &Config::default())),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_then_get_employee_with_defaults() {
        let app = app!(test_pool().await);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({"code": "E1", "name": "A", "basic_salary": 1000}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;

        assert_eq!(created["monthly_incentives"], json!(0.0));
        assert_eq!(created["work_days"], json!(22));
        assert_eq!(created["daily_work_hours"], json!(8.0));
        assert_eq!(created["status"], json!("active"));

        let req = test::TestRequest::get().uri("/api/employees/E1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get().uri("/api/employees").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all, vec![created]);
    }

    #[actix_web::test]
    async fn unknown_employee_is_404() {
        let app = app!(test_pool().await);

        let req = test::TestRequest::get().uri("/api/employees/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Employee not found"}));
    }

    #[actix_web::test]
    async fn duplicate_employee_is_500_with_message() {
        let app = app!(test_pool().await);
        let body = json!({"code": "E1", "name": "A", "basic_salary": 1000});

        let req = test::TestRequest::post().uri("/api/employees").set_json(&body).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post().uri("/api/employees").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let err: Value = test::read_body_json(resp).await;
        let message = err["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to create employee: "), "{message}");
    }

    #[actix_web::test]
    async fn advances_are_listed_per_employee() {
        let app = app!(test_pool().await);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({"code": "E1", "name": "A", "basic_salary": 1000}))
            .to_request();
        test::call_service(&app, req).await;

        for amount in [100, 250] {
            let req = test::TestRequest::post()
                .uri("/api/advances")
                .set_json(json!({"employee_code": "E1", "amount": amount, "request_date": "2024-03-15"}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/advances/E1").to_request();
        let advances: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let mut amounts: Vec<f64> = advances.iter().map(|a| a["amount"].as_f64().unwrap()).collect();
        amounts.sort_by(f64::total_cmp);
        assert_eq!(amounts, [100.0, 250.0]);
        assert!(advances.iter().all(|a| a["is_paid"] == json!(false)));

        let req = test::TestRequest::get().uri("/api/advances/E2").to_request();
        let none: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(none.is_empty());
    }

    #[actix_web::test]
    async fn salary_report_requires_gross_and_net() {
        let app = app!(test_pool().await);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({"code": "E1", "name": "A", "basic_salary": 1000}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/salary-reports")
            .set_json(json!({"employee_code": "E1", "month": "2024-03", "bonus": 50}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let err: Value = test::read_body_json(resp).await;
        assert!(
            err["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to create salary report: ")
        );

        let req = test::TestRequest::post()
            .uri("/api/salary-reports")
            .set_json(json!({
                "employee_code": "E1",
                "month": "2024-03",
                "gross_salary": 1050,
                "net_salary": 1000
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/salary-reports/E1").to_request();
        let reports: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["payment_status"], json!("pending"));
        assert_eq!(reports[0]["allowances"], json!(0.0));
    }

    #[actix_web::test]
    async fn backup_history_is_recorded() {
        let app = app!(test_pool().await);

        let req = test::TestRequest::post()
            .uri("/api/backup-history")
            .set_json(json!({"date": "2024-03-31", "status": "success", "details": "full"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let entry: Value = test::read_body_json(resp).await;
        assert_eq!(entry["details"], json!("full"));
        assert!(entry["id"].as_i64().unwrap() > 0);
    }

    #[actix_web::test]
    async fn malformed_body_is_generic_500() {
        let app = app!(test_pool().await);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Something went wrong!"}));
    }

    #[actix_web::test]
    async fn favicon_is_no_content() {
        let app = app!(test_pool().await);
        let req = test::TestRequest::get().uri("/favicon.ico").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    }
}
