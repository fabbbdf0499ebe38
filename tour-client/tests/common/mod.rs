// tour-client/tests/common/mod.rs
// 测试辅助 - axum mock backend + recording hooks

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, RawQuery, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};
use tour_client::{ApiClient, ClientConfig, MemoryStore, Navigator, Notice, Notifier};

pub const TOKEN: &str = "abc.def.ghi";

// =============================================================================
// Hooks
// =============================================================================

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(Notice::is_error)
            .map(|n| n.message)
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| !n.is_error())
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Debug, Default)]
pub struct CountingNavigator {
    redirects: AtomicUsize,
}

impl CountingNavigator {
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Mock backend
// =============================================================================

/// What the backend saw
#[derive(Debug, Default)]
pub struct Backend {
    auth_headers: Mutex<Vec<Option<String>>>,
    queries: Mutex<Vec<String>>,
    logouts: AtomicUsize,
}

impl Backend {
    fn record(&self, headers: &HeaderMap) -> Option<String> {
        let auth = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(auth.clone());
        auth
    }

    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.auth_headers.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn logouts(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }
}

pub fn recommendor_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": "张三",
        "gender": "male",
        "age": 35,
        "id_number": "330106198901010011",
        "avatar": "",
        "bio": "",
        "valid_from": "2024-01-01T00:00:00Z",
        "valid_until": "2030-01-01T00:00:00Z",
        "phone": "13800138000",
        "email": "",
        "province_code": "330000",
        "city_code": "330100",
        "district_code": "330106",
        "region_address": "浙江省/杭州市/西湖区",
        "status": "active",
        "rating": 4.5,
        "qr_code_web": "data:image/png;base64,AAAA",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

/// What the backend embeds when the recommendor is not preloaded
pub fn zero_recommendor() -> Value {
    json!({
        "id": 0,
        "name": "",
        "gender": "",
        "age": 0,
        "id_number": "",
        "avatar": "",
        "bio": "",
        "valid_from": "0001-01-01T00:00:00Z",
        "valid_until": "0001-01-01T00:00:00Z",
        "phone": "",
        "email": "",
        "province_code": "",
        "city_code": "",
        "district_code": "",
        "region_address": "",
        "status": "",
        "rating": 0,
        "created_at": "0001-01-01T00:00:00Z",
        "updated_at": "0001-01-01T00:00:00Z"
    })
}

pub fn destination_json(id: i64, recommendor: Value) -> Value {
    json!({
        "id": id,
        "recommendor_id": 7,
        "recommendor": recommendor,
        "name": "西湖",
        "description": "",
        "image": "[\"a.jpg\"]",
        "address": "杭州市西湖区",
        "category": "scenic_spot",
        "rating": 4.8,
        "status": "active",
        "created_at": 1_704_067_200,
        "updated_at": 1_704_067_200
    })
}

fn page(data: Vec<Value>) -> Value {
    let total = data.len();
    json!({"data": data, "total": total, "page": 1, "page_size": 10, "total_pages": 1})
}

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "admin" && body["password"] == "secret" {
        Json(json!({
            "message": "登录成功",
            "data": {
                "token": TOKEN,
                "expires_at": 1_900_000_000,
                "user": {"id": 1, "username": "admin"}
            }
        }))
        .into_response()
    } else {
        error(
            StatusCode::UNAUTHORIZED,
            json!({"error": "Invalid username or password"}),
        )
    }
}

async fn logout(State(backend): State<Arc<Backend>>) -> Response {
    backend.logouts.fetch_add(1, Ordering::SeqCst);
    Json(json!({"message": "Logged out successfully"})).into_response()
}

async fn verify(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    let valid = backend.record(&headers).is_some();
    Json(json!({"valid": valid})).into_response()
}

async fn refresh() -> Response {
    Json(json!({"data": {"token": "new.token.value"}})).into_response()
}

async fn me() -> Response {
    Json(json!({"data": {"id": 1, "username": "admin", "role": "super_admin"}})).into_response()
}

async fn admin_recommendors(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    match backend.record(&headers) {
        Some(_) => Json(page(vec![recommendor_json(7)])).into_response(),
        None => error(
            StatusCode::UNAUTHORIZED,
            json!({"error": "Authorization header required"}),
        ),
    }
}

async fn create_recommendor(Json(body): Json<Value>) -> Response {
    let mut created = recommendor_json(8);
    created["name"] = body["name"].clone();
    created["region_address"] = body["region_address"].clone();
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn admin_recommendor_detail(Path(id): Path<i64>) -> Response {
    match id {
        7 => {
            let mut detail = recommendor_json(7);
            detail["destinations"] = json!([destination_json(3, zero_recommendor())]);
            Json(detail).into_response()
        }
        _ => error(StatusCode::NOT_FOUND, json!({"error": "Recommendor not found"})),
    }
}

async fn update_recommendor(Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    let mut updated = recommendor_json(id);
    updated["name"] = body["name"].clone();
    Json(updated).into_response()
}

async fn delete_recommendor(Path(_id): Path<i64>) -> Response {
    Json(json!({"message": "Recommendor deleted successfully"})).into_response()
}

async fn regenerate_qr_codes(Path(id): Path<i64>) -> Response {
    Json(recommendor_json(id)).into_response()
}

async fn admin_destinations(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    backend.record(&headers);
    Json(page(vec![destination_json(3, recommendor_json(7))])).into_response()
}

async fn create_destination(Json(body): Json<Value>) -> Response {
    let mut created = destination_json(4, zero_recommendor());
    created["name"] = body["name"].clone();
    (StatusCode::CREATED, Json(created)).into_response()
}

/// Id 401 stands for a revoked token
async fn destination_detail(Path(id): Path<i64>) -> Response {
    match id {
        401 => error(StatusCode::UNAUTHORIZED, json!({"error": "Invalid or expired token"})),
        _ => Json(destination_json(id, recommendor_json(7))).into_response(),
    }
}

/// Id 0 is rejected as malformed
async fn update_destination(Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    if id == 0 {
        return error(StatusCode::BAD_REQUEST, json!({"error": "Invalid request format"}));
    }
    let mut updated = destination_json(id, zero_recommendor());
    updated["name"] = body["name"].clone();
    Json(updated).into_response()
}

/// Id 0 belongs to another admin
async fn delete_destination(Path(id): Path<i64>) -> Response {
    match id {
        0 => error(StatusCode::FORBIDDEN, json!({"error": "Admin access required"})),
        _ => Json(json!({"message": "Destination deleted successfully"})).into_response(),
    }
}

async fn server_error() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

async fn conflict() -> Response {
    StatusCode::CONFLICT.into_response()
}

async fn recommendor_destinations(
    State(backend): State<Arc<Backend>>,
    Path(_id): Path<i64>,
    RawQuery(query): RawQuery,
) -> Response {
    backend.queries.lock().unwrap().push(query.unwrap_or_default());
    Json(page(vec![destination_json(3, zero_recommendor())])).into_response()
}

async fn upload(Path(kind): Path<String>, mut multipart: Multipart) -> Response {
    let dir = match kind.as_str() {
        "avatar" => "avatars",
        "image" => "images",
        _ => return error(StatusCode::PAYLOAD_TOO_LARGE, json!({"message": "File too large"})),
    };
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or("upload").to_string();
        let Ok(bytes) = field.bytes().await else {
            break;
        };
        return Json(json!({
            "message": "File uploaded successfully",
            "data": {
                "file_name": name,
                "file_path": format!("uploads/{dir}/{name}"),
                "file_size": bytes.len(),
                "content_type": "image/png",
                "url": format!("http://localhost:8080/uploads/{dir}/{name}")
            }
        }))
        .into_response();
    }
    error(StatusCode::BAD_REQUEST, json!({"error": "No file uploaded"}))
}

fn router(backend: Arc<Backend>) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh-token", post(refresh))
        .route("/api/auth/me", get(me))
        .route("/api/admin/auth/logout", post(logout))
        .route("/api/admin/auth/verify", get(verify))
        .route(
            "/api/admin/recommendors",
            get(admin_recommendors).post(create_recommendor),
        )
        .route(
            "/api/admin/recommendors/{id}",
            get(admin_recommendor_detail)
                .put(update_recommendor)
                .delete(delete_recommendor),
        )
        .route("/api/admin/recommendors/{id}/qrcodes", post(regenerate_qr_codes))
        .route(
            "/api/admin/destinations",
            get(admin_destinations).post(create_destination),
        )
        .route(
            "/api/admin/destinations/{id}",
            get(destination_detail)
                .put(update_destination)
                .delete(delete_destination),
        )
        .route("/api/recommendors", get(conflict))
        .route("/api/recommendors/{id}/destinations", get(recommendor_destinations))
        .route("/api/destinations", get(server_error))
        .route("/api/destinations/{id}", get(destination_detail))
        .route("/api/v1/upload/{kind}", post(upload))
        .with_state(backend)
}

// =============================================================================
// Harness
// =============================================================================

pub struct Harness {
    pub client: ApiClient,
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<CountingNavigator>,
    pub backend: Arc<Backend>,
}

pub async fn spawn_backend() -> (SocketAddr, Arc<Backend>) {
    let backend = Arc::new(Backend::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(backend.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, backend)
}

pub fn client_for(base_url: &str) -> (ApiClient, Arc<MemoryStore>, Arc<RecordingNotifier>, Arc<CountingNavigator>) {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(CountingNavigator::default());
    let client = ApiClient::new(&ClientConfig::new(base_url).with_timeout(5))
        .unwrap()
        .with_store(store.clone())
        .with_notifier(notifier.clone())
        .with_navigator(navigator.clone());
    (client, store, notifier, navigator)
}

pub async fn harness() -> Harness {
    let (addr, backend) = spawn_backend().await;
    let (client, store, notifier, navigator) = client_for(&format!("http://{addr}/api"));
    Harness {
        client,
        store,
        notifier,
        navigator,
        backend,
    }
}

/// Harness with a logged-in admin
pub async fn logged_in() -> Harness {
    let h = harness().await;
    assert!(h.client.login("admin", "secret").await.unwrap().is_success());
    h
}

/// Unsigned JWT with the given payload
pub fn jwt(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.sig")
}
