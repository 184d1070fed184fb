use std::env;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use quiz_core::model::{
    DailyProgress, Direction, DirectionStats, MissedCharacter, ProgressSnapshot, QuizCharacter,
    SessionStats, StartOptions,
};

use crate::api::{CharacterFetch, QuizApi, UserSettings};
use crate::error::ApiError;

/// Where the quiz backend lives.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub base_url: String,
}

impl ServerConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the server address from `KANJI_SERVER_URL`, falling back to the
    /// development default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("KANJI_SERVER_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://127.0.0.1:5000".into());
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// `QuizApi` over JSON-over-HTTP.
///
/// The backend keeps quiz state in a session cookie, so the underlying
/// client carries a cookie store and must be reused for the whole session.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: ServerConfig,
}

impl HttpQuizApi {
    /// # Errors
    ///
    /// Returns `ApiError::Http` when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client, config })
    }

    async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let response = self.client.get(self.config.endpoint(path)).send().await?;
        ensure_success(response)
    }

    async fn post<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<Response, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await?;
        ensure_success(response)
    }

    async fn post_empty(&self, path: &str) -> Result<Response, ApiError> {
        let response = self.client.post(self.config.endpoint(path)).send().await?;
        ensure_success(response)
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::HttpStatus(response.status()));
    }
    Ok(response)
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn start_game(&self, options: StartOptions) -> Result<CharacterFetch, ApiError> {
        let payload = StartGamePayload {
            num_chars: options.num_chars(),
            direction: options.direction(),
        };
        let body: CharacterPayload = self.post("/start_game", &payload).await?.json().await?;
        body.into_fetch()
    }

    async fn next_character(&self) -> Result<CharacterFetch, ApiError> {
        let body: CharacterPayload = self.get("/get_character").await?.json().await?;
        body.into_fetch()
    }

    async fn submit_answer(&self, character: &str, is_correct: bool) -> Result<(), ApiError> {
        let payload = AnswerPayload {
            character,
            is_correct,
        };
        self.post("/answer", &payload).await?;
        Ok(())
    }

    async fn progress(&self) -> Result<ProgressSnapshot, ApiError> {
        let body: ProgressPayload = self.get("/get_progress").await?.json().await?;
        Ok(body.into_snapshot())
    }

    async fn reset_progress(&self) -> Result<(), ApiError> {
        self.post_empty("/reset_progress").await?;
        Ok(())
    }

    async fn undo_answer(&self, character: &str) -> Result<(), ApiError> {
        let payload = UndoPayload { character };
        let body: AckPayload = self.post("/undo_answer", &payload).await?.json().await?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.message.unwrap_or_else(|| "undo refused".into()),
            ));
        }
        Ok(())
    }

    async fn user_settings(&self) -> Result<UserSettings, ApiError> {
        let body: SettingsPayload = self.get("/get_user_settings").await?.json().await?;
        Ok(UserSettings {
            username: body.username,
            saved_num_chars: body.saved_num_chars,
        })
    }

    async fn stats(&self) -> Result<SessionStats, ApiError> {
        let body: StatsPayload = self.get("/api/stats").await?.json().await?;
        Ok(body.into_stats())
    }
}

//
// ─── WIRE PAYLOADS ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct StartGamePayload {
    num_chars: u32,
    direction: Direction,
}

#[derive(Debug, Serialize)]
struct AnswerPayload<'a> {
    character: &'a str,
    is_correct: bool,
}

#[derive(Debug, Serialize)]
struct UndoPayload<'a> {
    character: &'a str,
}

/// Either a character or the exhaustion flag; the server never sends both.
#[derive(Debug, Deserialize)]
struct CharacterPayload {
    #[serde(default)]
    no_more_characters: bool,
    #[serde(default)]
    character: Option<String>,
    #[serde(default)]
    meaning: Option<String>,
    #[serde(default)]
    direction: Option<Direction>,
    #[serde(default)]
    char_number: Option<u32>,
}

impl CharacterPayload {
    /// Missing fields fall through to the domain constructor, which rejects
    /// blank text and a zero ordinal.
    fn into_fetch(self) -> Result<CharacterFetch, ApiError> {
        if self.no_more_characters {
            return Ok(CharacterFetch::NoMoreCharacters);
        }

        let character = QuizCharacter::new(
            self.character.unwrap_or_default(),
            self.meaning.unwrap_or_default(),
            self.direction.unwrap_or_default(),
            self.char_number.unwrap_or_default(),
        )?;
        Ok(CharacterFetch::Character(character))
    }
}

#[derive(Debug, Deserialize)]
struct AckPayload {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SettingsPayload {
    username: String,
    saved_num_chars: u32,
}

#[derive(Debug, Deserialize)]
struct ProgressPayload {
    shown_characters: u32,
    total_characters: u32,
    progress_percentage: f64,
    score_percentage: f64,
    #[serde(default)]
    incorrect_characters: Vec<MissedPayload>,
}

#[derive(Debug, Deserialize)]
struct MissedPayload {
    character: String,
    meaning: String,
}

impl ProgressPayload {
    fn into_snapshot(self) -> ProgressSnapshot {
        ProgressSnapshot {
            shown_characters: self.shown_characters,
            total_characters: self.total_characters,
            progress_percentage: self.progress_percentage,
            score_percentage: self.score_percentage,
            incorrect: self
                .incorrect_characters
                .into_iter()
                .map(|item| MissedCharacter {
                    character: item.character,
                    meaning: item.meaning,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StatsPayload {
    total_answered: u32,
    total_correct: u32,
    overall_percentage: f64,
    #[serde(default)]
    avg_correct_time: u32,
    #[serde(default)]
    avg_incorrect_time: u32,
    #[serde(default)]
    fastest_time: u32,
    #[serde(default)]
    slowest_time: u32,
    #[serde(default)]
    jp_to_en: DirectionStatsPayload,
    #[serde(default)]
    en_to_jp: DirectionStatsPayload,
    #[serde(default)]
    recent_progress: Vec<DailyPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct DirectionStatsPayload {
    total: u32,
    correct: u32,
    percentage: f64,
}

#[derive(Debug, Deserialize)]
struct DailyPayload {
    date: NaiveDate,
    total: u32,
    #[serde(default)]
    correct: u32,
}

impl StatsPayload {
    fn into_stats(self) -> SessionStats {
        SessionStats {
            total_answered: self.total_answered,
            total_correct: self.total_correct,
            overall_percentage: self.overall_percentage,
            avg_correct_time_ms: self.avg_correct_time,
            avg_incorrect_time_ms: self.avg_incorrect_time,
            fastest_time_ms: self.fastest_time,
            slowest_time_ms: self.slowest_time,
            jp_to_en: direction_stats(self.jp_to_en),
            en_to_jp: direction_stats(self.en_to_jp),
            recent: self
                .recent_progress
                .into_iter()
                .map(|row| DailyProgress {
                    date: row.date,
                    total: row.total,
                    correct: row.correct,
                })
                .collect(),
        }
    }
}

fn direction_stats(payload: DirectionStatsPayload) -> DirectionStats {
    DirectionStats {
        total: payload.total,
        correct: payload.correct,
        percentage: payload.percentage,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
