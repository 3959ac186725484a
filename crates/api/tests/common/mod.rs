#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use staffhub_api::config::ServerConfig;
use staffhub_api::router::build_app_router;
use staffhub_api::state::AppState;
use staffhub_api::store::EmployeeStore;
use staffhub_core::error::CoreError;
use staffhub_core::roster::record::EmployeeRecord;
use staffhub_core::types::DbId;
use staffhub_db::models::employee::{Employee, DEFAULT_EMPLOYEE_ROLE};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024,
    }
}

/// In-memory [`EmployeeStore`] that mimics the database's batch semantics.
#[derive(Default)]
pub struct MemoryStore {
    employees: Mutex<Vec<Employee>>,
    /// When set, every call fails with an internal error.
    pub fail: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.employees.lock().unwrap().len()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn create_batch(
        &self,
        employer_id: DbId,
        records: &[EmployeeRecord],
    ) -> Result<Vec<Employee>, CoreError> {
        if self.fail {
            return Err(CoreError::Internal("connection refused".to_string()));
        }
        let mut employees = self.employees.lock().unwrap();
        let now = chrono::Utc::now();
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let taken = employees
                .iter()
                .chain(created.iter())
                .any(|e: &Employee| e.employer_id == employer_id && e.email == record.email);
            if taken {
                return Err(CoreError::Conflict(format!(
                    "email {} already exists",
                    record.email
                )));
            }
            created.push(Employee {
                id: (employees.len() + created.len() + 1) as DbId,
                employer_id,
                name: record.name.clone(),
                email: record.email.clone(),
                position: record.position.clone(),
                department: record.department.clone(),
                role: DEFAULT_EMPLOYEE_ROLE.to_string(),
                is_active: true,
                must_change_password: true,
                created_at: now,
                updated_at: now,
            });
        }
        employees.extend(created.iter().cloned());
        Ok(created)
    }

    async fn list_for_employer(&self, employer_id: DbId) -> Result<Vec<Employee>, CoreError> {
        if self.fail {
            return Err(CoreError::Internal("connection refused".to_string()));
        }
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.employer_id == employer_id)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        if self.fail {
            return Err(CoreError::Internal("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Build the full application router, with all middleware, over `store`.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a raw CSV body.
pub async fn post_csv(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "text/csv")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
