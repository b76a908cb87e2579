use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use triomphe::Arc;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, TypedBuilder)]
pub struct NewTask {
    #[builder(setter(into))]
    title: String,
    #[builder(setter(into))]
    description: String,
}

#[derive(Clone, TypedBuilder)]
pub struct TaskUpdate {
    #[builder(setter(into))]
    title: String,
    #[builder(setter(into))]
    description: String,
    #[builder(default)]
    done: bool,
}

/// Task list in creation order
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<RwLock<Vec<Task>>>,
}

impl TaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    #[instrument(skip_all)]
    pub async fn insert(&self, new_task: NewTask) -> Task {
        let task = Task {
            id: Uuid::new_v4(),
            title: new_task.title,
            description: new_task.description,
            done: false,
            created_at: OffsetDateTime::now_utc(),
        };

        self.inner.write().await.push(task.clone());
        debug!(id = %task.id, "created task");

        task
    }

    pub async fn get(&self, id: Uuid) -> Option<Task> {
        self.inner.read().await.iter().find(|task| task.id == id).cloned()
    }

    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.clone()
    }

    /// Returns `None` if no task has this ID
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: Uuid, update: TaskUpdate) -> Option<Task> {
        let mut tasks = self.inner.write().await;
        let task = tasks.iter_mut().find(|task| task.id == id)?;

        task.title = update.title;
        task.description = update.description;
        task.done = update.done;

        Some(task.clone())
    }

    /// Returns whether a task was removed
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut tasks = self.inner.write().await;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);

        tasks.len() != before
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
