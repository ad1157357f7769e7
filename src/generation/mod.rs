pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::{CourseContentDraft, CourseDraft, DepartmentDraft};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
}

impl GenerationConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::Config("GEMINI_API_KEY is not set".to_string()))?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }
}

/// A text-in, text-out generation service. The response is expected to hold
/// exactly one JSON object, possibly wrapped in code fences.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

pub struct GeminiClient {
    client: Client,
    config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(config: GenerationConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Generation(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.config.model
        );

        let request_body = dto::GenerateContentRequest {
            contents: vec![dto::Content {
                role: "user".to_string(),
                parts: vec![dto::Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "Generation API error {}: {}",
                status, body
            )));
        }

        let parsed: dto::GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to parse response: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::Generation("Empty response".to_string()));
        }

        Ok(text)
    }
}

const COURSE_CONTENT_INSTRUCTIONS: &str = "\
You are an AI university course generator.
Your task is to given a course, make adjustements to it as per the user's prompt.
You might be given a course with no content, in which case you are expected to generate the course content from scratch.
The prompt field is a string that will be passed on to you in the future for generating individual course content.
Description should be short whereas prompt should be detailed.
Book must preferably have a specific edition number listed.
Source refers to a specific location within the book which where content for the target is located.
Ensure that there is no overlap in content between different courses.

TargetDraft: {
  serial: number,
  text: string,
  source: string
}

WeekDraft: {
  serial: number,
  text: string,
  targets: Targets[]
}

CourseContentDraft: {
  name: string,
  description: string,
  book: string,
  weeks: WeekDraft[]
}

Output must only consist of JSON and nothing else.

Response: CourseContentDraft";

const COURSE_PLAN_INSTRUCTIONS: &str = "\
You are an AI university course generator.
Your task is to given a list of courses, make adjustements to it as per the user's prompt.
You might be given an empty list, in which case you are expected to generate the list from scratch.
The prompt field is a string that will be passed on to you in the future for generating individual course content.
Description should be short whereas prompt should be detailed.
Book must preferably have a specific edition number listed.
Ensure that there is no overlap in content between different courses.

CourseDraft: {
  department: text,
  name: text,
  description: text,
  book: text,
  prompt: text
}

Each course must have an associated department.
The department field holds the department code.
If a course belongs to a pre-existing department, tag it with its code.
Course names should not contain a department code or any kind of serial number.
Otherwise, generate a new department, in the form of DepartmentDraft.
You must finally return all departments as output, existing and new.

DepartmentDraft: {
  code: text,
  name: text
}

Output must only consist of JSON and nothing else.

Response: {
  departments: DepartmentDraft[]
  courses: CourseDraft[]
}";

/// Full prompt for reworking a single course's content.
pub fn course_content_prompt(
    prompt: &str,
    content: &CourseContentDraft,
) -> Result<String, AppError> {
    Ok(format!(
        "{}\n\nPrompt:\n{}\n\nCourse:\n{}\n",
        COURSE_CONTENT_INSTRUCTIONS,
        prompt,
        to_pretty_json(content)?
    ))
}

/// Full prompt for planning a course list against existing departments.
pub fn course_plan_prompt(
    prompt: &str,
    departments: &[DepartmentDraft],
    courses: &[CourseDraft],
) -> Result<String, AppError> {
    Ok(format!(
        "{}\n\nPrompt:\n{}\n\nDepartments:\n{}\n\nCourses:\n{}\n",
        COURSE_PLAN_INSTRUCTIONS,
        prompt,
        to_pretty_json(&departments)?,
        to_pretty_json(&courses)?
    ))
}

/// Strips code-fence markers from a generation response and parses the
/// remainder as the expected draft shape. Anything that is not valid JSON of
/// that shape is a `MalformedOutput` error; no partial result escapes.
pub fn parse_generated<T: DeserializeOwned>(text: &str) -> Result<T, AppError> {
    let cleaned = text.replace("```json", "").replace("```", "");
    Ok(serde_json::from_str(cleaned.trim())?)
}

// The contract pins 4-space indentation for the serialized state.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
