//! HTTP handlers for the arithmetic quiz

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shared::{Context, Cookies, CsvAttachment, Uuid};

use crate::core::{AnswerOutcome, Difficulty, MAX_DIFFICULTY, MIN_DIFFICULTY, Operation, QuizSession, QuizSettings};
use crate::error::{ArithmeticError, ArithmeticResult};
use crate::state::AppState;
use crate::types::QuizResultRow;

/// Number of results listed on the results page
pub const RECENT_RESULTS: u32 = 10;

/// Raw start form. Every field is text so bad input can be reported inline.
#[derive(Debug, Default, Deserialize)]
pub struct StartQuizForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub num_questions: String,
}

impl StartQuizForm {
    pub fn validate(&self, max_questions: u32) -> Result<QuizSettings, String> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("Please enter your name.".to_string());
        }

        let age: i64 = self
            .age
            .trim()
            .parse()
            .map_err(|_| "Age must be a whole number.".to_string())?;
        if !(0..=150).contains(&age) {
            return Err("Age must be between 0 and 150.".to_string());
        }

        let operation: Operation = self.operation.parse().map_err(|e: ArithmeticError| e.to_string())?;

        let difficulty = self
            .difficulty
            .trim()
            .parse::<i64>()
            .map_err(|_| "Difficulty must be a whole number.".to_string())
            .and_then(|d| Difficulty::new(d).map_err(|e| e.to_string()))?;

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

        Ok(QuizSettings {
            username: username.to_string(),
            age,
            operation,
            difficulty,
            num_questions,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AnswerForm {
    #[serde(default)]
    pub answer: String,
}

/// What the question page needs from the session
#[derive(Debug, Serialize)]
struct QuestionView {
    question: String,
    number: u32,
    total: u32,
    correct_so_far: u32,
    last_correct: Option<bool>,
}

impl QuestionView {
    fn feedback(&self) -> Option<&'static str> {
        self.last_correct
            .map(|correct| if correct { "correct" } else { "incorrect" })
    }

    fn from_session(session: &mut QuizSession) -> Self {
        let question = session.ensure_problem(&mut rand::thread_rng()).question();
        Self {
            question,
            number: session.question_number(),
            total: session.settings.num_questions,
            correct_so_far: session.correct_answers,
            last_correct: session.last_correct,
        }
    }
}

/// Home page
pub async fn home(State(state): State<AppState>) -> ArithmeticResult<Html<String>> {
    Ok(state.templates.render("index.html", &Context::new())?)
}

fn render_start_form(
    state: &AppState,
    form: &StartQuizForm,
    error: Option<&str>,
) -> ArithmeticResult<Html<String>> {
    let mut context = Context::new();
    context.insert("operations", &Operation::ALL.map(|op| op.as_str()));
    context.insert("min_difficulty", &MIN_DIFFICULTY);
    context.insert("max_difficulty", &MAX_DIFFICULTY);
    context.insert("max_questions", &state.max_questions);
    context.insert("username", form.username.trim());
    context.insert("age", form.age.trim());
    context.insert("selected_operation", form.operation.trim());
    context.insert("difficulty", form.difficulty.trim());
    context.insert("num_questions", form.num_questions.trim());
    context.insert("error", &error);
    Ok(state.templates.render("quiz.html", &context)?)
}

/// Quiz start form
pub async fn quiz_form(State(state): State<AppState>) -> ArithmeticResult<Html<String>> {
    let defaults = StartQuizForm {
        operation: Operation::Addition.as_str().to_string(),
        difficulty: "1".to_string(),
        num_questions: "10".to_string(),
        ..Default::default()
    };
    render_start_form(&state, &defaults, None)
}

/// Start a new quiz session
pub async fn start_quiz(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<StartQuizForm>,
) -> ArithmeticResult<Response> {
    let settings = match form.validate(state.max_questions) {
        Ok(settings) => settings,
        Err(message) => {
            return Ok(render_start_form(&state, &form, Some(&message))?.into_response());
        }
    };

    let session_id = state.sessions.session_id(&cookies);
    shared::app_info!(
        "📝 {} started a {} quiz: difficulty {}, {} questions",
        settings.username,
        settings.operation,
        settings.difficulty.value(),
        settings.num_questions
    );
    state
        .sessions
        .insert(session_id, QuizSession::new(settings, Utc::now()))
        .await;

    Ok(Redirect::to("/quiz/question").into_response())
}

fn render_question(
    state: &AppState,
    view: &QuestionView,
    error: Option<&str>,
) -> ArithmeticResult<Html<String>> {
    let mut context = Context::new();
    context.insert("question", &view.question);
    context.insert("number", &view.number);
    context.insert("total", &view.total);
    context.insert("correct_so_far", &view.correct_so_far);
    context.insert("feedback", &view.feedback());
    context.insert("error", &error);
    Ok(state.templates.render("quiz_question.html", &context)?)
}

/// Show the current question
pub async fn question(State(state): State<AppState>, cookies: Cookies) -> ArithmeticResult<Response> {
    let Some(session_id) = state.sessions.existing_id(&cookies) else {
        return Ok(Redirect::to("/quiz").into_response());
    };

    match state.sessions.update(session_id, QuestionView::from_session).await {
        Some(view) => Ok(render_question(&state, &view, None)?.into_response()),
        None => Ok(Redirect::to("/quiz").into_response()),
    }
}

/// Grade an answer and move on
pub async fn submit_answer(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<AnswerForm>,
) -> ArithmeticResult<Response> {
    let Some(session_id) = state.sessions.existing_id(&cookies) else {
        return Ok(Redirect::to("/quiz").into_response());
    };

    let answer: i64 = match form.answer.trim().parse() {
        Ok(answer) => answer,
        Err(_) => {
            let Some(view) = state.sessions.update(session_id, QuestionView::from_session).await else {
                return Ok(Redirect::to("/quiz").into_response());
            };
            let page = render_question(&state, &view, Some("Please enter a whole number."))?;
            return Ok(page.into_response());
        }
    };

    let outcome = state
        .sessions
        .update(session_id, |session| session.submit_answer(answer))
        .await;

    match outcome {
        None => Ok(Redirect::to("/quiz").into_response()),
        Some(AnswerOutcome::Continue { .. }) => Ok(Redirect::to("/quiz/question").into_response()),
        Some(AnswerOutcome::NoPendingQuestion) | Some(AnswerOutcome::Finished { .. }) => {
            finish_quiz(&state, session_id).await
        }
    }
}

/// Store a finished quiz. The session outlives a failed write so the last
/// answer can be submitted again.
async fn finish_quiz(state: &AppState, session_id: Uuid) -> ArithmeticResult<Response> {
    let Some(session) = state.sessions.get(session_id).await else {
        return Ok(Redirect::to("/quiz").into_response());
    };
    if !session.is_finished() {
        return Ok(Redirect::to("/quiz/question").into_response());
    }

    let completed = session.complete(Utc::now());
    let user_id = state.store.record(&completed).await?;
    state.sessions.remove(session_id).await;
    Ok(Redirect::to(&format!("/results/{}", user_id)).into_response())
}

/// Recent results for a user
pub async fn results(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ArithmeticResult<Html<String>> {
    let user = state
        .store
        .user(user_id)
        .await?
        .ok_or(ArithmeticError::UserNotFound { user_id })?;
    let recent_scores = state
        .store
        .results_for_user(user_id, Some(RECENT_RESULTS))
        .await?;

    let mut context = Context::new();
    context.insert("user", &user);
    context.insert("recent_scores", &recent_scores);
    Ok(state.templates.render("results.html", &context)?)
}

/// Download every result of a user as CSV
pub async fn export_csv(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ArithmeticResult<CsvAttachment> {
    let user = state
        .store
        .user(user_id)
        .await?
        .ok_or(ArithmeticError::UserNotFound { user_id })?;
    let rows = state.store.results_for_user(user_id, None).await?;

    let body = shared::write_csv(
        &QuizResultRow::CSV_HEADERS,
        rows.iter().map(QuizResultRow::csv_record),
    )?;
    shared::app_info!("📤 Exported {} results for user {}", rows.len(), user_id);

    Ok(CsvAttachment::new(
        format!("{}_quiz_results.csv", user.username),
        body,
    ))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "app": "arithmetic",
        "active_sessions": state.sessions.len().await,
        "timestamp": Utc::now().timestamp(),
    }))
}
