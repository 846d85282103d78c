//! HTTP handlers for the grammar quiz

use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shared::{Context, Cookies, CsvAttachment};
use std::collections::HashMap;
use url::form_urlencoded;

use crate::core::{GrammarQuiz, PartOfSpeech, build_quiz, ctime};
use crate::error::{GrammarError, GrammarResult};
use crate::state::{AppState, RECENT_SCORES};
use crate::types::{NewScore, ScoreRow};

/// Name and question count, from the start form or the quiz query string
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub num_questions: String,
}

impl QuizRequest {
    pub fn validate(&self, max_questions: u32) -> Result<(String, u32), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Please enter your name.".to_string());
        }

        let num_questions: u32 = self
            .num_questions
            .trim()
            .parse()
            .map_err(|_| "Number of questions must be a whole number.".to_string())?;
        if num_questions == 0 || num_questions > max_questions {
            return Err(format!(
                "Number of questions must be between 1 and {}.",
                max_questions
            ));
        }

        Ok((name.to_string(), num_questions))
    }
}

/// `/quiz?name=…&num_questions=…`
pub fn quiz_url(name: &str, num_questions: u32) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name)
        .append_pair("num_questions", &num_questions.to_string())
        .finish();
    format!("/quiz?{query}")
}

/// `/result?score=…&time_spent=…&name=…`
pub fn result_url(score: f64, time_spent: f64, name: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("score", &format!("{:.2}", score))
        .append_pair("time_spent", &format!("{:.2}", time_spent))
        .append_pair("name", name)
        .finish();
    format!("/result?{query}")
}

#[derive(Debug, Serialize)]
struct CategoryView {
    label: &'static str,
    description: &'static str,
}

fn categories() -> Vec<CategoryView> {
    PartOfSpeech::ALL
        .into_iter()
        .map(|pos| CategoryView {
            label: pos.label(),
            description: pos.description(),
        })
        .collect()
}

/// Parts of speech explained
pub async fn home(State(state): State<AppState>) -> GrammarResult<Html<String>> {
    let mut context = Context::new();
    context.insert("categories", &categories());
    Ok(state.templates.render("index.html", &context)?)
}

fn render_start_form(
    state: &AppState,
    form: &QuizRequest,
    error: Option<&str>,
) -> GrammarResult<Html<String>> {
    let mut context = Context::new();
    context.insert("name", form.name.trim());
    context.insert("num_questions", form.num_questions.trim());
    context.insert("max_questions", &state.max_questions);
    context.insert("error", &error);
    Ok(state.templates.render("start.html", &context)?)
}

pub async fn start_form(State(state): State<AppState>) -> GrammarResult<Html<String>> {
    let defaults = QuizRequest {
        num_questions: "5".to_string(),
        ..Default::default()
    };
    render_start_form(&state, &defaults, None)
}

pub async fn start_quiz(
    State(state): State<AppState>,
    Form(form): Form<QuizRequest>,
) -> GrammarResult<Response> {
    match form.validate(state.max_questions) {
        Ok((name, num_questions)) => Ok(Redirect::to(&quiz_url(&name, num_questions)).into_response()),
        Err(message) => Ok(render_start_form(&state, &form, Some(&message))?.into_response()),
    }
}

/// Build a fresh quiz, remember it in the session and show the questions
pub async fn quiz(
    State(state): State<AppState>,
    cookies: Cookies,
    Query(request): Query<QuizRequest>,
) -> GrammarResult<Html<String>> {
    let (name, requested) = request
        .validate(state.max_questions)
        .map_err(GrammarError::invalid)?;

    let items = {
        let mut rng = state.rng();
        build_quiz(&state.corpus, &*state.tagger, requested as usize, &mut *rng)
    };
    if items.len() < requested as usize {
        shared::app_warn!(
            "⚠️ Corpus only yielded {} of {} requested questions",
            items.len(),
            requested
        );
    }

    let mut context = Context::new();
    context.insert("name", &name);
    context.insert("items", &items);
    context.insert("requested", &requested);
    context.insert("categories", &categories());
    context.insert("show_results", &false);
    let page = state.templates.render("quiz.html", &context)?;

    let session_id = state.sessions.session_id(&cookies);
    shared::app_info!("📝 {} started a grammar quiz with {} questions", name, items.len());
    state
        .sessions
        .insert(session_id, GrammarQuiz::new(name, items, Utc::now()))
        .await;

    Ok(page)
}

/// Grade the session's quiz and store the score
pub async fn submit_quiz(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<HashMap<String, String>>,
) -> GrammarResult<Response> {
    let Some(session_id) = state.sessions.existing_id(&cookies) else {
        return Ok(Redirect::to("/start").into_response());
    };
    // the quiz stays in the session until its score is stored
    let Some(quiz) = state.sessions.get(session_id).await else {
        return Ok(Redirect::to("/start").into_response());
    };

    let finished_at = Utc::now();
    let outcome = quiz.grade(&form);
    let time_spent = quiz.time_spent(finished_at);

    state
        .store
        .record(&NewScore {
            name: quiz.name.clone(),
            num_questions: outcome.total,
            score: outcome.score,
            timestamp: ctime(finished_at),
            time_spent,
        })
        .await?;
    state.sessions.remove(session_id).await;

    let mut context = Context::new();
    context.insert("name", &quiz.name);
    context.insert("results", &outcome.answers);
    context.insert("correct", &outcome.correct);
    context.insert("total", &outcome.total);
    context.insert("final_score", &shared::score::round2(outcome.score));
    context.insert("time_spent", &shared::score::round2(time_spent));
    context.insert("result_url", &result_url(outcome.score, time_spent, &quiz.name));
    context.insert("show_results", &true);
    Ok(state.templates.render("quiz.html", &context)?.into_response())
}

pub async fn recent_scores(State(state): State<AppState>) -> GrammarResult<Html<String>> {
    let scores = state.store.recent(RECENT_SCORES).await?;
    let mut context = Context::new();
    context.insert("scores", &scores);
    Ok(state.templates.render("recent_scores.html", &context)?)
}

/// The recent scores as a CSV download
pub async fn export_scores(State(state): State<AppState>) -> GrammarResult<CsvAttachment> {
    let scores = state.store.recent(RECENT_SCORES).await?;
    let body = shared::write_csv(
        &ScoreRow::CSV_HEADERS,
        scores.iter().map(ScoreRow::csv_record),
    )?;
    shared::app_info!("📤 Exported {} recent scores", scores.len());
    Ok(CsvAttachment::new("recent_scores.csv", body))
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultQuery {
    pub score: Option<String>,
    pub time_spent: Option<String>,
    pub name: Option<String>,
}

fn two_decimals(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) => value
            .parse::<f64>()
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|_| value.to_string()),
        None => String::new(),
    }
}

/// Standalone result page
pub async fn result(
    State(state): State<AppState>,
    Query(query): Query<ResultQuery>,
) -> GrammarResult<Html<String>> {
    let mut context = Context::new();
    context.insert("name", query.name.as_deref().unwrap_or_default());
    context.insert("score", &two_decimals(query.score.as_deref()));
    context.insert("time_spent", &two_decimals(query.time_spent.as_deref()));
    Ok(state.templates.render("result.html", &context)?)
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "app": "grammar",
        "corpus_sentences": state.corpus.len(),
        "active_sessions": state.sessions.len().await,
        "timestamp": Utc::now().timestamp(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, n: &str) -> QuizRequest {
        QuizRequest {
            name: name.to_string(),
            num_questions: n.to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(request(" ada ", "3").validate(25).unwrap(), ("ada".to_string(), 3));
        assert!(request("", "3").validate(25).is_err());
        assert!(request("ada", "three").validate(25).is_err());
        assert!(request("ada", "0").validate(25).is_err());
        assert!(request("ada", "26").validate(25).is_err());
    }

    #[test]
    fn test_urls_are_encoded() {
        assert_eq!(quiz_url("Ada Lovelace", 4), "/quiz?name=Ada+Lovelace&num_questions=4");
        assert_eq!(
            result_url(200.0 / 3.0, 12.0, "O'Neil & co"),
            "/result?score=66.67&time_spent=12.00&name=O%27Neil+%26+co"
        );
    }

    #[test]
    fn test_two_decimals() {
        assert_eq!(two_decimals(Some("66.6666")), "66.67");
        assert_eq!(two_decimals(Some("n/a")), "n/a");
        assert_eq!(two_decimals(None), "");
    }
}
