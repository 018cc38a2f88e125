use crate::auth::identity::sign_in;
use crate::config::AppConfig;
use crate::db::{init_db, seed_db, Database};
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// App state over a throwaway SQLite file built from the real schema and
/// demo seed. The file is removed on drop.
pub struct TestApp {
    pub state: AppState,
    path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn init_test_app() -> TestApp {
    let path = std::env::temp_dir().join(format!(
        "posacalles-test-{}-{}.sqlite3",
        std::process::id(),
        NEXT_DB.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = std::fs::remove_file(&path);

    let config = AppConfig {
        database_path: path.to_string_lossy().into_owned(),
        ..AppConfig::default()
    };
    let db = Database::new(config.database_path.clone());

    init_db(&db, &config.schema_path)
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    seed_db(&db, &config.seed_path).unwrap_or_else(|e| panic!("Seeding failed: {e}"));

    TestApp {
        state: AppState { db, config },
        path,
    }
}

/// Signs a user in directly and returns the `Cookie` header value.
pub fn signed_in_cookie(app: &TestApp, email: &str, name: &str) -> String {
    let signed_in = app
        .state
        .db
        .with_conn(|conn| sign_in(conn, email, Some(name), chrono::Utc::now().timestamp()))
        .expect("sign in");
    format!("session={}", signed_in.session_token)
}

/// Runs raw SQL against the test database, e.g. to corrupt a row.
pub fn exec_sql(app: &TestApp, sql: &str) {
    app.state
        .db
        .with_conn(|conn| {
            conn.execute_batch(sql)
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap_or_else(|e| panic!("{sql} failed: {e}"));
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn send(app: &TestApp, req: Request<Body>) -> Response {
    handle(req, &app.state).expect("Failed to handle request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).expect("valid JSON body")
}
