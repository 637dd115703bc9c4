use super::*;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use shared::{
    domain::{ApiKey, ImdbId},
    protocol::DEFAULT_IMDB_ID,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

const RECORD_BODY: &str = r#"{
    "Title": "Guardians of the Galaxy Vol. 2",
    "Year": "2017",
    "Plot": "The Guardians struggle to keep together as a team.",
    "Poster": "N/A",
    "Ratings": [
        {"Source": "Internet Movie Database", "Value": "7.6/10"},
        {"Source": "Rotten Tomatoes", "Value": "85%"}
    ],
    "imdbID": "tt3896198",
    "Response": "True"
}"#;

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: &'static str,
    seen_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn handle_lookup(
    State(state): State<ServerState>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.seen_queries.lock().expect("lock").push(query);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

async fn handle_poster() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], vec![0x89, b'P', b'N', b'G'])
}

async fn spawn_movie_server(
    status: StatusCode,
    body: &'static str,
) -> Result<(String, Arc<Mutex<Vec<HashMap<String, String>>>>), std::io::Error> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let seen_queries = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        status,
        body,
        seen_queries: seen_queries.clone(),
    };
    let app = Router::new()
        .route("/", get(handle_lookup))
        .route("/poster.png", get(handle_poster))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}/"), seen_queries))
}

fn client_for(base_url: &str) -> MovieClient {
    MovieClient::new(
        Url::parse(base_url).expect("base url"),
        MovieQuery::default(),
    )
}

#[tokio::test]
async fn fetch_movie_sends_fixed_identifier_and_key() {
    let (base_url, seen) = spawn_movie_server(StatusCode::OK, RECORD_BODY)
        .await
        .expect("server");
    let client = client_for(&base_url);

    let record = client.fetch_movie().await.expect("fetch");
    assert_eq!(record.title.as_deref(), Some("Guardians of the Galaxy Vol. 2"));
    assert_eq!(record.ratings.len(), 2);
    assert_eq!(record.ratings[1].source.as_deref(), Some("Rotten Tomatoes"));

    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].get("i").map(String::as_str), Some(DEFAULT_IMDB_ID));
    assert_eq!(seen[0].get("apikey").map(String::as_str), Some("9799e6a9"));
}

#[tokio::test]
async fn repeated_fetches_return_identical_records() {
    let (base_url, _) = spawn_movie_server(StatusCode::OK, RECORD_BODY)
        .await
        .expect("server");
    let client = client_for(&base_url);

    let first = client.fetch_movie().await.expect("first fetch");
    let second = client.fetch_movie().await.expect("second fetch");
    assert_eq!(first, second);
}

#[tokio::test]
async fn error_envelope_with_ok_status_is_upstream_error() {
    let (base_url, _) = spawn_movie_server(
        StatusCode::OK,
        r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#,
    )
    .await
    .expect("server");

    let err = client_for(&base_url)
        .fetch_movie()
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), "upstream");
    assert!(err.to_string().contains("Incorrect IMDb ID."));
}

#[tokio::test]
async fn unauthorized_envelope_keeps_upstream_message() {
    let (base_url, _) = spawn_movie_server(
        StatusCode::UNAUTHORIZED,
        r#"{"Response":"False","Error":"Invalid API key!"}"#,
    )
    .await
    .expect("server");

    let err = client_for(&base_url)
        .fetch_movie()
        .await
        .expect_err("must fail");
    assert!(
        matches!(err, FetchError::Upstream(ref upstream) if upstream.message == "Invalid API key!")
    );
}

#[tokio::test]
async fn server_error_without_envelope_is_status_error() {
    let (base_url, _) = spawn_movie_server(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
        .await
        .expect("server");

    let err = client_for(&base_url)
        .fetch_movie()
        .await
        .expect_err("must fail");
    assert!(matches!(err, FetchError::Status(status) if status == StatusCode::BAD_GATEWAY));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let (base_url, _) = spawn_movie_server(StatusCode::OK, "{not json")
        .await
        .expect("server");

    let err = client_for(&base_url)
        .fetch_movie()
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = client_for(&format!("http://{addr}/"))
        .fetch_movie()
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), "transport");
}

#[tokio::test]
async fn fetch_poster_returns_raw_bytes() {
    let (base_url, _) = spawn_movie_server(StatusCode::OK, RECORD_BODY)
        .await
        .expect("server");
    let client = client_for(&base_url);

    let bytes = client
        .fetch_poster(&format!("{base_url}poster.png"))
        .await
        .expect("poster");
    assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
}

#[test]
fn client_from_settings_uses_configured_query() {
    let settings = Settings {
        api_base_url: "http://127.0.0.1:1/".into(),
        imdb_id: "tt0000001".into(),
        api_key: "secret".into(),
        ..Settings::default()
    };
    let client = MovieClient::from_settings(&settings).expect("client");
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:1/");
    assert_eq!(client.query().imdb_id, ImdbId::from("tt0000001"));
    assert_eq!(client.query().api_key, ApiKey::from("secret"));
}
