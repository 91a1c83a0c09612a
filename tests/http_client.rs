use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use polaris_catalogs::{
    Catalog, CatalogError, CatalogManagementClient, CatalogOptions, CatalogType, CatalogsCommand,
    ClientConfig, PolarisClient, StorageType, Subcommand,
};

/// A request observed by the mock management service
#[derive(Debug, Clone)]
struct Recorded {
    method: &'static str,
    path: String,
    authorization: Option<String>,
    body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    catalogs: Vec<Catalog>,
    requests: Vec<Recorded>,
}

type SharedState = Arc<Mutex<MockState>>;

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

fn record(
    state: &SharedState,
    method: &'static str,
    path: String,
    headers: &HeaderMap,
    body: Option<Value>,
) {
    state.lock().unwrap().requests.push(Recorded {
        method,
        path,
        authorization: authorization(headers),
        body,
    });
}

async fn list_catalogs(State(state): State<SharedState>, headers: HeaderMap) -> Json<Value> {
    record(&state, "GET", "catalogs".to_string(), &headers, None);
    let catalogs = state.lock().unwrap().catalogs.clone();
    Json(json!({ "catalogs": catalogs }))
}

async fn create_catalog(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    record(&state, "POST", "catalogs".to_string(), &headers, Some(body));
    StatusCode::CREATED
}

async fn get_catalog(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    record(&state, "GET", format!("catalogs/{}", name), &headers, None);
    let state = state.lock().unwrap();
    match state.catalogs.iter().find(|c| c.name == name) {
        Some(catalog) => Json(catalog.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "catalog not found").into_response(),
    }
}

async fn update_catalog(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let path = format!("catalogs/{}", name);
    record(&state, "PUT", path, &headers, Some(body.clone()));
    let mut state = state.lock().unwrap();
    let Some(catalog) = state.catalogs.iter_mut().find(|c| c.name == name) else {
        return (StatusCode::NOT_FOUND, "catalog not found").into_response();
    };
    if body["currentEntityVersion"].as_i64() != Some(catalog.entity_version) {
        return (StatusCode::CONFLICT, "entity version mismatch").into_response();
    }
    if let Some(properties) = body["properties"].as_object() {
        catalog.properties = properties
            .iter()
            .map(|(k, v)| (k.clone(), v.as_str().unwrap_or_default().to_string()))
            .collect();
    }
    catalog.entity_version += 1;
    Json(catalog.clone()).into_response()
}

async fn delete_catalog(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    record(&state, "DELETE", format!("catalogs/{}", name), &headers, None);
    let mut state = state.lock().unwrap();
    let before = state.catalogs.len();
    state.catalogs.retain(|c| c.name != name);
    if state.catalogs.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Mock management service listening on an ephemeral local port
struct MockServer {
    state: SharedState,
    base_url: String,
}

impl MockServer {
    async fn start(catalogs: Vec<Catalog>) -> Self {
        let state: SharedState = Arc::new(Mutex::new(MockState {
            catalogs,
            requests: Vec::new(),
        }));
        let app = Router::new()
            .route(
                "/api/management/v1/catalogs",
                get(list_catalogs).post(create_catalog),
            )
            .route(
                "/api/management/v1/catalogs/:name",
                get(get_catalog).put(update_catalog).delete(delete_catalog),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            base_url: format!("http://{}", addr),
        }
    }

    fn client(&self, token: Option<&str>) -> PolarisClient {
        let config = ClientConfig::new(&self.base_url)
            .unwrap()
            .with_access_token(token.map(String::from));
        PolarisClient::new(config).unwrap()
    }

    fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    fn catalog(&self, name: &str) -> Option<Catalog> {
        self.state
            .lock()
            .unwrap()
            .catalogs
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }
}

fn server_catalog(name: &str, entity_version: i64) -> Catalog {
    serde_json::from_value(json!({
        "type": "INTERNAL",
        "name": name,
        "properties": {"default-base-location": format!("s3://bucket/{}", name), "a": "1"},
        "createTimestamp": 1700000000000i64,
        "lastUpdateTimestamp": 1700000000000i64,
        "entityVersion": entity_version,
        "storageConfigInfo": {
            "storageType": "S3",
            "allowedLocations": [format!("s3://bucket/{}", name)],
            "roleArn": "arn:aws:iam::1:role/r"
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn list_and_get_decode_server_catalogs() {
    let server =
        MockServer::start(vec![server_catalog("zeta", 1), server_catalog("alpha", 2)]).await;
    let client = server.client(Some("secret"));

    let response = client.list_catalogs().await.unwrap();
    let names: Vec<_> = response.catalogs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);

    let catalog = client.get_catalog("alpha").await.unwrap();
    assert_eq!(catalog.entity_version, 2);
    assert_eq!(catalog.catalog_type, CatalogType::Internal);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(
        requests
            .iter()
            .all(|r| r.authorization.as_deref() == Some("Bearer secret"))
    );
    assert_eq!(requests[1].path, "catalogs/alpha");
}

#[tokio::test]
async fn missing_token_sends_no_authorization() {
    let server = MockServer::start(vec![]).await;
    server.client(None).list_catalogs().await.unwrap();
    assert_eq!(server.requests()[0].authorization, None);
}

#[tokio::test]
async fn get_missing_catalog_reports_status() {
    let server = MockServer::start(vec![]).await;
    match server.client(None).get_catalog("nope").await {
        Err(CatalogError::Remote(e)) => {
            assert_eq!(e.status, Some(404));
            assert_eq!(e.details, "catalog not found");
            assert_eq!(e.operation, "Get catalog nope");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn create_external_s3_catalog_body() {
    let server = MockServer::start(vec![]).await;
    let client = server.client(Some("secret"));

    let mut options = CatalogOptions::new(Subcommand::Create, "c1");
    options.catalog_type = CatalogType::External;
    options.storage_type = Some(StorageType::S3);
    options.default_base_location = Some("s3://b/p".to_string());
    options.remote_url = Some("https://x".to_string());
    options.role_arn = Some("arn:aws:iam::1:role/r".to_string());
    let command = CatalogsCommand::new(options);
    command.validate().unwrap();

    let output = command.execute(&client).await.unwrap();
    assert!(output.is_empty());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "catalog": {
                "type": "EXTERNAL",
                "name": "c1",
                "remoteUrl": "https://x",
                "properties": {"default-base-location": "s3://b/p"},
                "storageConfigInfo": {
                    "storageType": "S3",
                    "roleArn": "arn:aws:iam::1:role/r"
                }
            }
        }))
    );
}

#[tokio::test]
async fn update_reads_then_writes_with_entity_version() {
    let server = MockServer::start(vec![server_catalog("c1", 5)]).await;
    let client = server.client(None);

    let mut options = CatalogOptions::new(Subcommand::Update, "c1");
    options.default_base_location = Some("s3://bucket/moved".to_string());
    options.properties.insert("b".to_string(), "2".to_string());
    CatalogsCommand::new(options).execute(&client).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(
        requests[1].body,
        Some(json!({
            "currentEntityVersion": 5,
            "properties": {"default-base-location": "s3://bucket/moved", "b": "2"}
        }))
    );

    let updated = server.catalog("c1").unwrap();
    assert_eq!(updated.entity_version, 6);
    assert!(!updated.properties.contains_key("a"));
}

#[tokio::test]
async fn stale_update_surfaces_conflict() {
    let server = MockServer::start(vec![server_catalog("c1", 5)]).await;
    let client = server.client(None);

    let catalog = client.get_catalog("c1").await.unwrap();
    let mut request = polaris_catalogs::UpdateCatalogRequest::for_catalog(&catalog);
    request.current_entity_version -= 1;

    match client.update_catalog("c1", &request).await {
        Err(CatalogError::Remote(e)) => {
            assert_eq!(e.status, Some(409));
            assert_eq!(e.details, "entity version mismatch");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn delete_then_list_is_empty() {
    let server = MockServer::start(vec![server_catalog("c1", 1)]).await;
    let client = server.client(None);

    let command = CatalogsCommand::new(CatalogOptions::new(Subcommand::Delete, "c1"));
    command.execute(&client).await.unwrap();

    let output = CatalogsCommand::new(CatalogOptions::new(Subcommand::List, ""))
        .execute(&client)
        .await
        .unwrap();
    assert!(output.is_empty());
}

#[tokio::test]
async fn catalog_names_are_path_encoded() {
    let server = MockServer::start(vec![server_catalog("team one", 1)]).await;
    let catalog = server.client(None).get_catalog("team one").await.unwrap();
    assert_eq!(catalog.name, "team one");
    assert_eq!(server.requests()[0].path, "catalogs/team one");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(&format!("http://{}", addr))
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    let client = PolarisClient::new(config).unwrap();
    assert_eq!(client.config().timeout, Duration::from_secs(2));
    match client.list_catalogs().await {
        Err(CatalogError::Remote(e)) => {
            assert_eq!(e.status, None);
            assert_eq!(e.operation, "List catalogs");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
