use crate::api::Session;
use crate::libs::config::ConfigModule;
use crate::libs::task::{Priority, Task};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SESSION_FILE: &str = ".session";
const LOGIN_URL: &str = "api/auth/login";
const TASKS_URL: &str = "api/tasks";
const MAX_RETRY_COUNT: i32 = 3;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("resource not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct LoginCredentials {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

/// Task record as the server serializes it.
///
/// The server speaks camelCase and ISO-8601 date strings; conversion to and
/// from the local `Task` shape happens here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RemoteTask {
    /// Converts a server record into a local task.
    ///
    /// Unknown priority strings collapse to medium, malformed dates to
    /// absent; a sync must never fail on a single odd record.
    pub fn into_task(self) -> Task {
        let priority = self.priority.as_deref().map(|p| p.parse().unwrap_or_default()).unwrap_or(Priority::Medium);
        Task {
            id: None,
            remote_id: Some(self.id),
            title: self.title,
            description: self.description,
            completed: self.completed,
            priority,
            tags: self.tags.unwrap_or_default(),
            due_date: self.due_date.as_deref().and_then(parse_remote_date),
            created_at: self.created_at.as_deref().and_then(parse_remote_timestamp),
        }
    }
}

/// Partial task payload for create and update calls.
///
/// `title` is required on create; every other field is optional and omitted
/// from the JSON body when unset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl TaskInput {
    pub fn from_task(task: &Task) -> Self {
        TaskInput {
            title: Some(task.title.clone()),
            description: task.description.clone(),
            completed: Some(task.completed),
            priority: Some(task.priority),
            tags: Some(task.tags.clone()),
            due_date: task.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Date strings arrive either as plain dates or full ISO timestamps;
/// only the calendar day matters locally.
fn parse_remote_date(value: &str) -> Option<NaiveDate> {
    let day = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_remote_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.fZ")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub struct Remote {
    client: Client,
    config: RemoteConfig,
    password: Option<String>,
    retries: i32,
}

impl Remote {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            password: None,
            retries: 0,
        }
    }

    pub async fn fetch_tasks(&mut self) -> Result<Vec<RemoteTask>> {
        let mut attempts = 0;
        loop {
            let token = self.get_token().await?;
            let url = format!("{}/{}", self.config.api_url, TASKS_URL);
            let res = self.client.get(url).header(header::AUTHORIZATION, format!("Bearer {}", token)).send().await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if attempts < MAX_RETRY_COUNT => {
                    self.delete_session()?;
                    attempts += 1;
                }
                StatusCode::OK => return Ok(res.json().await?),
                status => return Err(ApiError::Status(status).into()),
            }
        }
    }

    pub async fn create_task(&mut self, input: &TaskInput) -> Result<RemoteTask> {
        let token = self.get_token().await?;
        let url = format!("{}/{}", self.config.api_url, TASKS_URL);
        let res = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .json(input)
            .send()
            .await?;

        match res.status() {
            StatusCode::CREATED | StatusCode::OK => Ok(res.json().await?),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            status => Err(ApiError::Status(status).into()),
        }
    }

    pub async fn update_task(&mut self, id: &str, input: &TaskInput) -> Result<RemoteTask> {
        let token = self.get_token().await?;
        let url = format!("{}/{}/{}", self.config.api_url, TASKS_URL, id);
        let res = self
            .client
            .put(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .json(input)
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound.into()),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            status => Err(ApiError::Status(status).into()),
        }
    }

    pub async fn delete_task(&mut self, id: &str) -> Result<()> {
        let token = self.get_token().await?;
        let url = format!("{}/{}/{}", self.config.api_url, TASKS_URL, id);
        let res = self
            .client
            .delete(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?;

        match res.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound.into()),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            status => Err(ApiError::Status(status).into()),
        }
    }
}

impl Session for Remote {
    async fn login(&self) -> Result<String> {
        let url = format!("{}/{}", self.config.api_url, LOGIN_URL);
        let credentials = LoginCredentials {
            email: self.config.email.clone(),
            password: self.password.clone().unwrap_or_default(),
        };
        let res = self.client.post(url).json(&credentials).send().await?;

        if res.status() != StatusCode::OK {
            return Err(ApiError::Unauthorized.into());
        }

        let auth: AuthResponse = res.json().await?;
        Ok(auth.token)
    }

    fn set_credentials(&mut self, password: &str) {
        self.password = Some(password.to_string());
    }

    fn session_file(&self) -> &str {
        SESSION_FILE
    }

    fn password_prompt(&self) -> &str {
        "Enter your password"
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RemoteConfig {
    pub email: String,
    pub api_url: String,
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: "Sync server".to_string(),
        }
    }

    pub fn init(config: &Option<RemoteConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            email: String::new(),
            api_url: String::new(),
        });
        println!("Sync server settings");
        Ok(Self {
            email: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter your account email")
                .default(config.email)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the server URL")
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
