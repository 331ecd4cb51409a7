//! Integration tests for the goal and todo services against the in-memory
//! store.

use chrono::{NaiveDate, NaiveDateTime};

use day_scheduler::db::repositories::LocalRepository;
use day_scheduler::services::validation::{GoalDraft, TodoDraft};
use day_scheduler::services::{GoalService, ServiceError, TodoService};
use std::sync::Arc;

fn services() -> (GoalService, TodoService) {
    let repo = Arc::new(LocalRepository::new());
    (GoalService::new(repo.clone()), TodoService::new(repo))
}

fn on(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn goal(title: &str, day: u32) -> GoalDraft {
    GoalDraft {
        title: Some(title.to_string()),
        description: None,
        date: Some(on(day)),
    }
}

fn todo(title: &str, day: u32, completed: bool) -> TodoDraft {
    TodoDraft {
        title: Some(title.to_string()),
        description: None,
        completed,
        date: Some(on(day)),
    }
}

#[tokio::test]
async fn goal_crud_round_trip() {
    let (goals, _) = services();

    let created = goals.create(goal("Run 5k", 10)).await.unwrap();
    let id = created.id.clone().unwrap();
    assert!(created.created_at.is_some());

    let fetched = goals.get(&id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Run 5k");

    let updated = goals.update(&id, goal("Run 10k", 11)).await.unwrap();
    assert_eq!(updated.title, "Run 10k");
    assert_eq!(updated.date, on(11));
    assert_eq!(updated.created_at, created.created_at);

    goals.delete(&id).await.unwrap();
    assert!(goals.get(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn goal_validation_rejects_bad_drafts() {
    let (goals, _) = services();

    assert!(matches!(
        goals.create(goal("   ", 10)).await.unwrap_err(),
        ServiceError::Validation(_)
    ));

    let long_title = goal(&"g".repeat(300), 10);
    assert!(matches!(
        goals.create(long_title).await.unwrap_err(),
        ServiceError::Validation(_)
    ));

    let mut missing_date = goal("Run 5k", 10);
    missing_date.date = None;
    assert!(matches!(
        goals.create(missing_date).await.unwrap_err(),
        ServiceError::Validation(_)
    ));

    assert!(goals.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn goal_update_of_unknown_id_reports_not_found() {
    let (goals, _) = services();
    let err = goals.update("missing", goal("Run 5k", 10)).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[tokio::test]
async fn goal_date_and_title_queries() {
    let (goals, _) = services();
    goals.create(goal("Read a book", 10)).await.unwrap();
    goals.create(goal("Write a post", 12)).await.unwrap();

    let day10 = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let day11 = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();

    let on_day = goals.on_date(day10).await.unwrap();
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].title, "Read a book");

    assert!(goals.on_date(day11).await.unwrap().is_empty());

    let in_range = goals
        .in_date_range(day10, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap())
        .await
        .unwrap();
    assert_eq!(in_range.len(), 2);

    let found = goals.search_by_title("BOOK").await.unwrap();
    assert_eq!(found.len(), 1);

    let recent = goals.created_in_last_days(7).await.unwrap();
    assert_eq!(recent.len(), 2);
}

#[tokio::test]
async fn todo_completion_toggles_persist() {
    let (_, todos) = services();
    let created = todos.create(todo("Buy milk", 10, false)).await.unwrap();
    let id = created.id.unwrap();
    assert!(!created.completed);

    let done = todos.mark_completed(&id).await.unwrap();
    assert!(done.completed);
    assert!(todos.get(&id).await.unwrap().unwrap().completed);

    let undone = todos.mark_incomplete(&id).await.unwrap();
    assert!(!undone.completed);
}

#[tokio::test]
async fn todo_completion_filter_and_count_agree() {
    let (_, todos) = services();
    todos.create(todo("a", 10, true)).await.unwrap();
    todos.create(todo("b", 10, false)).await.unwrap();
    todos.create(todo("c", 11, true)).await.unwrap();

    let done = todos.by_completion(true).await.unwrap();
    assert_eq!(done.len(), 2);
    assert_eq!(todos.count_by_completion(true).await.unwrap(), 2);
    assert_eq!(todos.count_by_completion(false).await.unwrap(), 1);
}

#[tokio::test]
async fn todo_update_replaces_all_fields() {
    let (_, todos) = services();
    let created = todos.create(todo("Buy milk", 10, false)).await.unwrap();
    let id = created.id.unwrap();

    let mut replacement = todo("Buy oat milk", 11, true);
    replacement.description = Some("the good kind".to_string());
    let updated = todos.update(&id, replacement).await.unwrap();

    assert_eq!(updated.title, "Buy oat milk");
    assert_eq!(updated.description.as_deref(), Some("the good kind"));
    assert!(updated.completed);
    assert_eq!(updated.date, on(11));
}

#[tokio::test]
async fn todo_not_found_paths() {
    let (_, todos) = services();
    assert!(matches!(
        todos.mark_completed("missing").await.unwrap_err(),
        ServiceError::NotFound { .. }
    ));
    assert!(matches!(
        todos.delete("missing").await.unwrap_err(),
        ServiceError::NotFound { .. }
    ));
}
