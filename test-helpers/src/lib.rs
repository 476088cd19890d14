pub mod telemetry;

use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde::Deserialize;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard};

/// What the mock server answers to every joke request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
}

impl MockReply {
    /// A successful single joke, shaped like a real JokeAPI payload.
    pub fn joke(text: &str) -> Self {
        Self::json(serde_json::json!({
            "error": false,
            "category": "Programming",
            "type": "single",
            "joke": text,
            "flags": {
                "nsfw": false,
                "religious": false,
                "political": false,
                "racist": false,
                "sexist": false,
                "explicit": false
            },
            "id": 1,
            "safe": true,
            "lang": "en"
        }))
    }

    /// A 200 response with an arbitrary JSON body.
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    /// A response with the given status and a plain text body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: "mock failure".into(),
        }
    }

    /// A 200 response whose body is not JSON.
    pub fn garbage() -> Self {
        Self {
            status: 200,
            body: "<html>definitely not json</html>".into(),
        }
    }
}

/// A request the mock server received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub category: String,
    pub joke_type: Option<String>,
}

#[derive(Default)]
struct MockState {
    reply: Mutex<Option<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockJokeApi {
    pub client: payloads::APIClient,
    state: Arc<MockState>,
}

impl MockJokeApi {
    /// Replace the reply served from now on.
    pub fn set_reply(&self, reply: MockReply) {
        *lock(&self.state.reply) = Some(reply);
    }

    /// Every request served so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state.requests).clone()
    }

    pub fn hits(&self) -> usize {
        lock(&self.state.requests).len()
    }
}

#[derive(Deserialize)]
struct JokeParams {
    #[serde(rename = "type")]
    joke_type: Option<String>,
}

async fn serve_joke(
    request: HttpRequest,
    category: web::Path<String>,
    params: web::Query<JokeParams>,
    state: web::Data<Arc<MockState>>,
) -> HttpResponse {
    tracing::debug!("mock joke api: {} {}", request.method(), request.uri());
    lock(&state.requests).push(RecordedRequest {
        category: category.into_inner(),
        joke_type: params.into_inner().joke_type,
    });

    let reply = lock(&state.reply)
        .clone()
        .unwrap_or_else(|| MockReply::joke("This is a test joke."));
    let status = StatusCode::from_u16(reply.status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json")
        .body(reply.body)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Build the mock server, but not await it.
///
/// Returns the port that the server has bound to.
fn build(state: Arc<MockState>) -> std::io::Result<(Server, u16)> {
    // OS assigns the port if binding to 0
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    let state = web::Data::new(state);
    let server = HttpServer::new(move || {
        App::new()
            .route("/joke/{category}", web::get().to(serve_joke))
            .app_data(state.clone())
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok((server, port))
}

/// Spawn a mock JokeAPI on an OS-assigned port. Until [`MockJokeApi::set_reply`]
/// is called it serves `{ "joke": "This is a test joke." }`.
pub async fn spawn_joke_api() -> MockJokeApi {
    telemetry::init_test_subscriber();

    let state = Arc::new(MockState::default());
    let (server, port) = build(state.clone()).unwrap();
    tokio::spawn(server);

    MockJokeApi {
        client: payloads::APIClient::new(format!("http://127.0.0.1:{port}")),
        state,
    }
}

/// A client pointing at a port nothing listens on.
pub fn unreachable_client() -> payloads::APIClient {
    telemetry::init_test_subscriber();

    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .unwrap();
    // the listener is dropped here, so connections are refused
    payloads::APIClient::new(format!("http://127.0.0.1:{port}"))
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: reqwest::StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
