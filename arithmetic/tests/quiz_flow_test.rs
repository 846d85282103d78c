//! End-to-end quiz flow through the router

mod helpers;

use arithmetic::ArithmeticError;
use arithmetic::MockResultStore;
use axum::http::{StatusCode, header};
use helpers::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_home_and_start_pages_render() {
    let (app, _pool) = create_test_app().await;

    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Arithmetic Quiz"));

    let response = get(&app, "/quiz", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("name=\"username\""));
    assert!(html.contains("multiplication"));
}

#[tokio::test]
async fn test_invalid_start_form_shows_inline_error() {
    let (app, _pool) = create_test_app().await;

    let response = post_form(
        &app,
        "/quiz",
        "username=ada&age=old&operation=addition&difficulty=1&num_questions=3",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());
    let html = body_text(response).await;
    assert!(html.contains("Age must be a whole number."));
    assert!(html.contains("value=\"ada\""));
}

#[tokio::test]
async fn test_question_without_session_redirects_to_start() {
    let (app, _pool) = create_test_app().await;

    let response = get(&app, "/quiz/question", None).await;
    assert_redirect(&response, "/quiz");

    let response = post_form(&app, "/quiz/question", "answer=4", None).await;
    assert_redirect(&response, "/quiz");
}

#[tokio::test]
async fn test_completing_quiz_inserts_one_result_row() {
    let (app, pool) = create_test_app().await;
    let cookie = start_quiz(
        &app,
        "username=ada&age=9&operation=addition&difficulty=2&num_questions=3",
    )
    .await;

    // Answer the first two correctly and the last one wrong
    for i in 0..3 {
        let response = get(&app, "/quiz/question", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(&format!("Question {} of 3", i + 1)));

        let answer = solve_question(&html) + if i == 2 { 1 } else { 0 };
        let response = post_form(&app, "/quiz/question", &format!("answer={answer}"), Some(&cookie)).await;
        if i < 2 {
            assert_redirect(&response, "/quiz/question");
        } else {
            assert_redirect(&response, "/results/1");
        }
    }

    let rows: Vec<(i64, f64, i64, String)> = sqlx::query_as(
        "SELECT user_id, score, correct_answers, operation FROM quiz_result",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(rows.len(), 1);
    let (user_id, score, correct, operation) = &rows[0];
    assert_eq!(*user_id, 1);
    assert!((score - 200.0 / 3.0).abs() < 1e-9);
    assert!((0.0..=100.0).contains(score));
    assert_eq!(*correct, 2);
    assert_eq!(operation, "addition");

    // Session is gone once the quiz is stored
    let response = get(&app, "/quiz/question", Some(&cookie)).await;
    assert_redirect(&response, "/quiz");
}

#[tokio::test]
async fn test_feedback_after_answer() {
    let (app, _pool) = create_test_app().await;
    let cookie = start_quiz(
        &app,
        "username=bob&age=10&operation=multiplication&difficulty=1&num_questions=2",
    )
    .await;

    let html = body_text(get(&app, "/quiz/question", Some(&cookie)).await).await;
    assert!(!html.contains("Correct!"));
    let answer = solve_question(&html);
    post_form(&app, "/quiz/question", &format!("answer={answer}"), Some(&cookie)).await;

    let html = body_text(get(&app, "/quiz/question", Some(&cookie)).await).await;
    assert!(html.contains("Correct!"));
    assert!(html.contains("Correct so far: 1"));
}

#[tokio::test]
async fn test_non_numeric_answer_does_not_advance() {
    let (app, pool) = create_test_app().await;
    let cookie = start_quiz(
        &app,
        "username=cy&age=8&operation=addition&difficulty=1&num_questions=1",
    )
    .await;

    let first = body_text(get(&app, "/quiz/question", Some(&cookie)).await).await;

    let response = post_form(&app, "/quiz/question", "answer=twelve", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Please enter a whole number."));
    assert!(html.contains("Question 1 of 1"));
    // same question is still on screen
    assert_eq!(solve_question(&html), solve_question(&first));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quiz_result")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_results_and_export() {
    let (app, _pool) = create_test_app().await;

    for _ in 0..2 {
        let cookie = start_quiz(
            &app,
            "username=dee&age=11&operation=multiplication&difficulty=1&num_questions=1",
        )
        .await;
        let html = body_text(get(&app, "/quiz/question", Some(&cookie)).await).await;
        let answer = solve_question(&html);
        let response = post_form(&app, "/quiz/question", &format!("answer={answer}"), Some(&cookie)).await;
        assert_redirect(&response, "/results/1");
    }

    let response = get(&app, "/results/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Results for dee"));
    assert_eq!(html.matches("<td>Multiplication</td>").count(), 2);
    assert!(html.contains("/export/1"));

    let response = get(&app, "/export/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"dee_quiz_results.csv\""
    );
    let csv = body_text(response).await;
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Operation,Difficulty,Number of Questions,Score (%),Time Spent (s),Date,Correct Answers"
    );
    let data: Vec<&str> = lines.collect();
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|line| line.starts_with("multiplication,1,1,100,")));
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let (app, _pool) = create_test_app().await;

    assert_eq!(get(&app, "/results/42", None).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/export/42", None).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_keeps_the_finished_quiz() {
    let mut store = MockResultStore::new();
    let mut calls = 0;
    store.expect_record().times(2).returning(move |completed| {
        calls += 1;
        assert_eq!(completed.username, "eve");
        assert_eq!(completed.num_questions, 1);
        if calls == 1 {
            Err(ArithmeticError::Database(sqlx::Error::PoolClosed))
        } else {
            Ok(7)
        }
    });
    let app = create_app_with_store(Arc::new(store));

    let cookie = start_quiz(
        &app,
        "username=eve&age=12&operation=addition&difficulty=1&num_questions=1",
    )
    .await;
    let html = body_text(get(&app, "/quiz/question", Some(&cookie)).await).await;
    let answer = solve_question(&html);

    let response = post_form(&app, "/quiz/question", &format!("answer={answer}"), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(response).await.contains("PoolClosed"));

    // submitting again stores the same quiz
    let response = post_form(&app, "/quiz/question", &format!("answer={answer}"), Some(&cookie)).await;
    assert_redirect(&response, "/results/7");

    let response = get(&app, "/quiz/question", Some(&cookie)).await;
    assert_redirect(&response, "/quiz");
}

#[tokio::test]
async fn test_abandoned_quizzes_expire() {
    let app = create_app_with_idle_sessions(Duration::from_millis(100)).await;

    for i in 0..5 {
        start_quiz(
            &app,
            &format!("username=user{i}&age=30&operation=addition&difficulty=1&num_questions=3"),
        )
        .await;
    }
    let health = health_json(&app).await;
    assert_eq!(health["active_sessions"], 5);

    tokio::time::sleep(Duration::from_millis(250)).await;
    let health = health_json(&app).await;
    assert_eq!(health["active_sessions"], 0);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _pool) = create_test_app().await;
    let response = get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["app"], "arithmetic");
}
