//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures, providing fast, deterministic, and
//! isolated execution.

use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::db::repository::*;
use crate::models::{Goal, ScheduleEntry, Todo};
use crate::services::validation::day_window;

/// In-memory local repository.
///
/// Stores all three document collections in HashMaps behind a single
/// `RwLock`, making it ideal for tests and local runs that need isolation
/// and speed. Ids are UUID v4 strings assigned on first save; the store
/// stamps `created_at` on insert and refreshes `updated_at` on every write.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    goals: HashMap<String, Goal>,
    todos: HashMap<String, Todo>,
    schedules: HashMap<String, ScheduleEntry>,

    // Connection health, toggleable for failure-path tests
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        let healthy = data.is_healthy;
        *data = LocalData {
            is_healthy: healthy,
            ..Default::default()
        };
    }

    /// Number of schedule entries stored.
    pub fn schedule_count(&self) -> usize {
        self.data.read().unwrap().schedules.len()
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn fresh_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn title_matches(title: &str, fragment: &str) -> bool {
        title.to_lowercase().contains(&fragment.to_lowercase())
    }

    fn within_days(t: NaiveDateTime, start: NaiveDate, end: NaiveDate) -> bool {
        let (window_start, _) = day_window(start);
        let (_, window_end) = day_window(end);
        t >= window_start && t <= window_end
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn list_schedules(&self) -> RepositoryResult<Vec<ScheduleEntry>> {
        let data = self.data.read().unwrap();
        let mut entries: Vec<_> = data.schedules.values().cloned().collect();
        entries.sort_by_key(|e| e.start_time);
        Ok(entries)
    }

    async fn get_schedule(&self, id: &str) -> RepositoryResult<Option<ScheduleEntry>> {
        let data = self.data.read().unwrap();
        Ok(data.schedules.get(id).cloned())
    }

    async fn schedule_exists(&self, id: &str) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.schedules.contains_key(id))
    }

    async fn save_schedule(&self, mut entry: ScheduleEntry) -> RepositoryResult<ScheduleEntry> {
        let now = Self::now();
        let mut data = self.data.write().unwrap();

        let id = match &entry.id {
            Some(id) => id.clone(),
            None => {
                let id = Self::fresh_id();
                entry.id = Some(id.clone());
                entry.created_at = Some(now);
                id
            }
        };
        // Preserve the original creation stamp across replaces
        if entry.created_at.is_none() {
            entry.created_at = data.schedules.get(&id).and_then(|prev| prev.created_at);
        }
        entry.updated_at = Some(now);

        data.schedules.insert(id, entry.clone());
        Ok(entry)
    }

    async fn delete_schedule(&self, id: &str) -> RepositoryResult<bool> {
        let mut data = self.data.write().unwrap();
        Ok(data.schedules.remove(id).is_some())
    }

    async fn schedules_on_day(&self, date: NaiveDate) -> RepositoryResult<Vec<ScheduleEntry>> {
        self.schedules_in_range(date, date).await
    }

    async fn schedules_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<ScheduleEntry>> {
        let data = self.data.read().unwrap();
        let mut entries: Vec<_> = data
            .schedules
            .values()
            .filter(|e| Self::within_days(e.start_time, start, end))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.start_time);
        Ok(entries)
    }

    async fn schedules_by_title(&self, fragment: &str) -> RepositoryResult<Vec<ScheduleEntry>> {
        let data = self.data.read().unwrap();
        let mut entries: Vec<_> = data
            .schedules
            .values()
            .filter(|e| Self::title_matches(&e.title, fragment))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.start_time);
        Ok(entries)
    }

    async fn schedules_created_since(
        &self,
        cutoff: NaiveDateTime,
    ) -> RepositoryResult<Vec<ScheduleEntry>> {
        let data = self.data.read().unwrap();
        let mut entries: Vec<_> = data
            .schedules
            .values()
            .filter(|e| e.created_at.is_some_and(|t| t >= cutoff))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.start_time);
        Ok(entries)
    }
}

#[async_trait]
impl GoalRepository for LocalRepository {
    async fn list_goals(&self) -> RepositoryResult<Vec<Goal>> {
        let data = self.data.read().unwrap();
        let mut goals: Vec<_> = data.goals.values().cloned().collect();
        goals.sort_by_key(|g| g.date);
        Ok(goals)
    }

    async fn get_goal(&self, id: &str) -> RepositoryResult<Option<Goal>> {
        let data = self.data.read().unwrap();
        Ok(data.goals.get(id).cloned())
    }

    async fn goal_exists(&self, id: &str) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.goals.contains_key(id))
    }

    async fn save_goal(&self, mut goal: Goal) -> RepositoryResult<Goal> {
        let now = Self::now();
        let mut data = self.data.write().unwrap();

        let id = match &goal.id {
            Some(id) => id.clone(),
            None => {
                let id = Self::fresh_id();
                goal.id = Some(id.clone());
                goal.created_at = Some(now);
                id
            }
        };
        if goal.created_at.is_none() {
            goal.created_at = data.goals.get(&id).and_then(|prev| prev.created_at);
        }
        goal.updated_at = Some(now);

        data.goals.insert(id, goal.clone());
        Ok(goal)
    }

    async fn delete_goal(&self, id: &str) -> RepositoryResult<bool> {
        let mut data = self.data.write().unwrap();
        Ok(data.goals.remove(id).is_some())
    }

    async fn goals_on_day(&self, date: NaiveDate) -> RepositoryResult<Vec<Goal>> {
        self.goals_in_range(date, date).await
    }

    async fn goals_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<Goal>> {
        let data = self.data.read().unwrap();
        let mut goals: Vec<_> = data
            .goals
            .values()
            .filter(|g| Self::within_days(g.date, start, end))
            .cloned()
            .collect();
        goals.sort_by_key(|g| g.date);
        Ok(goals)
    }

    async fn goals_by_title(&self, fragment: &str) -> RepositoryResult<Vec<Goal>> {
        let data = self.data.read().unwrap();
        let mut goals: Vec<_> = data
            .goals
            .values()
            .filter(|g| Self::title_matches(&g.title, fragment))
            .cloned()
            .collect();
        goals.sort_by_key(|g| g.date);
        Ok(goals)
    }

    async fn goals_created_since(&self, cutoff: NaiveDateTime) -> RepositoryResult<Vec<Goal>> {
        let data = self.data.read().unwrap();
        let mut goals: Vec<_> = data
            .goals
            .values()
            .filter(|g| g.created_at.is_some_and(|t| t >= cutoff))
            .cloned()
            .collect();
        goals.sort_by_key(|g| g.date);
        Ok(goals)
    }
}

#[async_trait]
impl TodoRepository for LocalRepository {
    async fn list_todos(&self) -> RepositoryResult<Vec<Todo>> {
        let data = self.data.read().unwrap();
        let mut todos: Vec<_> = data.todos.values().cloned().collect();
        todos.sort_by_key(|t| t.date);
        Ok(todos)
    }

    async fn get_todo(&self, id: &str) -> RepositoryResult<Option<Todo>> {
        let data = self.data.read().unwrap();
        Ok(data.todos.get(id).cloned())
    }

    async fn todo_exists(&self, id: &str) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.todos.contains_key(id))
    }

    async fn save_todo(&self, mut todo: Todo) -> RepositoryResult<Todo> {
        let now = Self::now();
        let mut data = self.data.write().unwrap();

        let id = match &todo.id {
            Some(id) => id.clone(),
            None => {
                let id = Self::fresh_id();
                todo.id = Some(id.clone());
                todo.created_at = Some(now);
                id
            }
        };
        if todo.created_at.is_none() {
            todo.created_at = data.todos.get(&id).and_then(|prev| prev.created_at);
        }
        todo.updated_at = Some(now);

        data.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete_todo(&self, id: &str) -> RepositoryResult<bool> {
        let mut data = self.data.write().unwrap();
        Ok(data.todos.remove(id).is_some())
    }

    async fn todos_by_completed(&self, completed: bool) -> RepositoryResult<Vec<Todo>> {
        let data = self.data.read().unwrap();
        let mut todos: Vec<_> = data
            .todos
            .values()
            .filter(|t| t.completed == completed)
            .cloned()
            .collect();
        todos.sort_by_key(|t| t.date);
        Ok(todos)
    }

    async fn count_todos_by_completed(&self, completed: bool) -> RepositoryResult<u64> {
        let data = self.data.read().unwrap();
        Ok(data.todos.values().filter(|t| t.completed == completed).count() as u64)
    }

    async fn todos_on_day(&self, date: NaiveDate) -> RepositoryResult<Vec<Todo>> {
        self.todos_in_range(date, date).await
    }

    async fn todos_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<Todo>> {
        let data = self.data.read().unwrap();
        let mut todos: Vec<_> = data
            .todos
            .values()
            .filter(|t| Self::within_days(t.date, start, end))
            .cloned()
            .collect();
        todos.sort_by_key(|t| t.date);
        Ok(todos)
    }

    async fn todos_by_title(&self, fragment: &str) -> RepositoryResult<Vec<Todo>> {
        let data = self.data.read().unwrap();
        let mut todos: Vec<_> = data
            .todos
            .values()
            .filter(|t| Self::title_matches(&t.title, fragment))
            .cloned()
            .collect();
        todos.sort_by_key(|t| t.date);
        Ok(todos)
    }

    async fn todos_created_since(&self, cutoff: NaiveDateTime) -> RepositoryResult<Vec<Todo>> {
        let data = self.data.read().unwrap();
        let mut todos: Vec<_> = data
            .todos
            .values()
            .filter(|t| t.created_at.is_some_and(|c| c >= cutoff))
            .cloned()
            .collect();
        todos.sort_by_key(|t| t.date);
        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(title: &str, day: u32, h: u32) -> ScheduleEntry {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        ScheduleEntry {
            id: None,
            title: title.to_string(),
            description: None,
            start_time: date.and_hms_opt(h, 0, 0).unwrap(),
            end_time: date.and_hms_opt(h + 1, 0, 0).unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_audit_stamps() {
        let repo = LocalRepository::new();
        let saved = repo.save_schedule(entry("Standup", 15, 9)).await.unwrap();

        assert!(saved.id.is_some());
        assert!(saved.created_at.is_some());
        assert!(saved.updated_at.is_some());
    }

    #[tokio::test]
    async fn replace_preserves_created_at() {
        let repo = LocalRepository::new();
        let saved = repo.save_schedule(entry("Standup", 15, 9)).await.unwrap();

        let mut replacement = saved.clone();
        replacement.title = "Renamed".to_string();
        replacement.created_at = None;
        let replaced = repo.save_schedule(replacement).await.unwrap();

        assert_eq!(replaced.id, saved.id);
        assert_eq!(replaced.created_at, saved.created_at);
        assert_eq!(repo.schedule_count(), 1);
    }

    #[tokio::test]
    async fn day_query_scopes_to_start_date() {
        let repo = LocalRepository::new();
        repo.save_schedule(entry("Mon", 15, 9)).await.unwrap();
        repo.save_schedule(entry("Tue", 16, 9)).await.unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let found = repo.schedules_on_day(day).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Mon");
    }

    #[tokio::test]
    async fn day_window_includes_last_microsecond_only() {
        let repo = LocalRepository::new();
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let mut late = entry("Late", 15, 9);
        late.start_time = day.and_hms_micro_opt(23, 59, 59, 999_999).unwrap();
        late.end_time = day.succ_opt().unwrap().and_hms_opt(0, 30, 0).unwrap();
        repo.save_schedule(late).await.unwrap();

        let mut next_midnight = entry("Next", 16, 0);
        next_midnight.start_time = day.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
        repo.save_schedule(next_midnight).await.unwrap();

        let found = repo.schedules_on_day(day).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Late");
    }

    #[tokio::test]
    async fn title_search_is_case_insensitive() {
        let repo = LocalRepository::new();
        repo.save_schedule(entry("Team Standup", 15, 9)).await.unwrap();
        repo.save_schedule(entry("Lunch", 15, 12)).await.unwrap();

        let found = repo.schedules_by_title("standup").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Team Standup");
    }

    #[tokio::test]
    async fn delete_reports_absence() {
        let repo = LocalRepository::new();
        let saved = repo.save_schedule(entry("Standup", 15, 9)).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repo.delete_schedule(&id).await.unwrap());
        assert!(!repo.delete_schedule(&id).await.unwrap());
    }

    #[tokio::test]
    async fn clear_removes_all_data_but_keeps_health() {
        let repo = LocalRepository::new();
        repo.save_schedule(entry("Standup", 15, 9)).await.unwrap();
        repo.set_healthy(false);

        repo.clear();

        assert_eq!(repo.schedule_count(), 0);
        assert!(!repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn completion_count_agrees_with_filter() {
        let repo = LocalRepository::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        for (title, completed) in [("a", true), ("b", false), ("c", true)] {
            repo.save_todo(Todo {
                id: None,
                title: title.to_string(),
                description: None,
                completed,
                date,
                created_at: None,
                updated_at: None,
            })
            .await
            .unwrap();
        }

        let done = repo.todos_by_completed(true).await.unwrap();
        assert_eq!(done.len(), 2);
        assert_eq!(repo.count_todos_by_completed(true).await.unwrap(), 2);
        assert_eq!(repo.count_todos_by_completed(false).await.unwrap(), 1);
    }
}
