//! In-process fake of the school REST API plus a recording prompt.

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

use mergington::Controller;
use mergington::common::{AppConfig, LocalStorage, MemoryStorage};
use mergington::components::Prompt;
use parking_lot::Mutex;
use serde_json::{Map, Value, json};
use std::{net::TcpListener, sync::Arc, time::Duration};
use url::Url;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TEACHER_EMAIL: &str = "hughes@mergington.edu";
pub const TEACHER_PASSWORD: &str = "teach123";
pub const TEACHER_NAME: &str = "Ms. Hughes";
pub const TEACHER_TOKEN: &str = "token-hughes";

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

struct FakeActivity {
    description: &'static str,
    schedule: &'static str,
    max_participants: i64,
    participants: Vec<String>,
}

type Roster = Arc<Mutex<Vec<(String, FakeActivity)>>>;

fn seed() -> Vec<(String, FakeActivity)> {
    vec![
        (
            "Chess Club".to_string(),
            FakeActivity {
                description: "Learn strategies and compete in chess tournaments",
                schedule: "Fridays, 3:30 PM - 5:00 PM",
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        ),
        (
            "Programming Class".to_string(),
            FakeActivity {
                description: "Learn programming fundamentals and build software projects",
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                max_participants: 20,
                participants: vec![
                    "emma@mergington.edu".to_string(),
                    "sophia@mergington.edu".to_string(),
                ],
            },
        ),
        (
            "Gym Class".to_string(),
            FakeActivity {
                description: "Physical education and sports activities",
                schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                max_participants: 30,
                participants: Vec::new(),
            },
        ),
    ]
}

fn teacher_json() -> Value {
    json!({"email": TEACHER_EMAIL, "name": TEACHER_NAME, "role": "teacher"})
}

fn detail(status: u16, detail: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "detail": detail }))
}

fn encode_segment(name: &str) -> String {
    let mut url = Url::parse("http://fake.test/").unwrap();
    url.path_segments_mut().unwrap().clear().push(name);
    url.path()[1..].to_string()
}

/// Activity whose encoded name is the second path segment.
fn activity_index(roster: &[(String, FakeActivity)], request: &Request) -> Option<usize> {
    let segment = request.url.path_segments()?.nth(1)?.to_string();
    roster
        .iter()
        .position(|(name, _)| encode_segment(name) == segment)
}

fn query_email(request: &Request) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value.into_owned())
}

fn has_teacher_token(request: &Request) -> bool {
    request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {TEACHER_TOKEN}").as_str())
}

/// Stateful fake: signups and removals show up in later `GET /activities`.
pub struct FakeSchool {
    pub server: MockServer,
    roster: Roster,
}

impl FakeSchool {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let roster: Roster = Arc::new(Mutex::new(seed()));

        let list = roster.clone();
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(move |_: &Request| {
                let mut body = Map::new();
                for (name, activity) in list.lock().iter() {
                    body.insert(
                        name.clone(),
                        json!({
                            "description": activity.description,
                            "schedule": activity.schedule,
                            "max_participants": activity.max_participants,
                            "participants": activity.participants,
                        }),
                    );
                }
                ResponseTemplate::new(200).set_body_json(Value::Object(body))
            })
            .mount(&server)
            .await;

        let signups = roster.clone();
        Mock::given(method("POST"))
            .and(path_regex(r"^/activities/[^/]+/signup$"))
            .respond_with(move |request: &Request| {
                let mut roster = signups.lock();
                let Some(index) = activity_index(&roster, request) else {
                    return detail(404, "Activity not found");
                };
                let Some(email) = query_email(request) else {
                    return detail(422, "email is required");
                };
                let (name, activity) = &mut roster[index];
                if activity.participants.contains(&email) {
                    return detail(400, "Student is already signed up");
                }
                activity.participants.push(email.clone());
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "message": format!("Signed up {email} for {name}") }))
            })
            .mount(&server)
            .await;

        let removals = roster.clone();
        Mock::given(method("DELETE"))
            .and(path_regex(r"^/activities/[^/]+/unregister$"))
            .respond_with(move |request: &Request| {
                if !has_teacher_token(request) {
                    return detail(401, "Teacher authentication required");
                }
                let mut roster = removals.lock();
                let Some(index) = activity_index(&roster, request) else {
                    return detail(404, "Activity not found");
                };
                let email = query_email(request).unwrap_or_default();
                let (name, activity) = &mut roster[index];
                let Some(position) = activity.participants.iter().position(|p| *p == email) else {
                    return detail(400, "Student is not signed up for this activity");
                };
                activity.participants.remove(position);
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "message": format!("Unregistered {email} from {name}") }))
            })
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(|request: &Request| {
                let form: Vec<(String, String)> = url::form_urlencoded::parse(&request.body)
                    .into_owned()
                    .collect();
                let field = |key: &str| {
                    form.iter()
                        .find(|(name, _)| name == key)
                        .map(|(_, value)| value.as_str())
                };
                if field("email") == Some(TEACHER_EMAIL) && field("password") == Some(TEACHER_PASSWORD)
                {
                    ResponseTemplate::new(200).set_body_json(json!({
                        "access_token": TEACHER_TOKEN,
                        "token_type": "bearer",
                        "teacher": teacher_json(),
                    }))
                } else {
                    detail(401, "Invalid email or password")
                }
            })
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(|request: &Request| {
                if has_teacher_token(request) {
                    ResponseTemplate::new(200).set_body_json(teacher_json())
                } else {
                    detail(401, "Not authenticated")
                }
            })
            .mount(&server)
            .await;

        Self { server, roster }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.roster
            .lock()
            .iter()
            .find(|(name, _)| name == activity)
            .map(|(_, activity)| activity.participants.clone())
            .unwrap_or_default()
    }

    /// Number of received requests with `method` whose path starts with `prefix`.
    pub async fn requests(&self, method: &str, prefix: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| {
                request.method.as_str() == method && request.url.path().starts_with(prefix)
            })
            .count()
    }
}

/// Records alerts and confirmations; answers every confirmation with `answer`.
#[derive(Debug)]
pub struct RecordingPrompt {
    answer: bool,
    pub alerts: Mutex<Vec<String>>,
    pub confirms: Mutex<Vec<String>>,
}

impl RecordingPrompt {
    pub fn new(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            alerts: Mutex::new(Vec::new()),
            confirms: Mutex::new(Vec::new()),
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().clone()
    }
}

impl Prompt for RecordingPrompt {
    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().push(message.to_string());
        self.answer
    }
}

pub fn config(base_url: &str) -> AppConfig {
    AppConfig::new(base_url)
        .unwrap()
        .with_message_ttl(Duration::from_secs(60))
}

pub fn controller(
    base_url: &str,
    storage: Arc<dyn LocalStorage>,
    prompt: Arc<RecordingPrompt>,
) -> Controller {
    Controller::new(&config(base_url), storage, prompt).unwrap()
}

/// Anonymous page with in-memory storage, already bootstrapped.
pub async fn anonymous_page(school: &FakeSchool, prompt: Arc<RecordingPrompt>) -> Controller {
    let controller = controller(&school.uri(), Arc::new(MemoryStorage::new()), prompt);
    controller.bootstrap().await;
    controller
}
