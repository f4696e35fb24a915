use super::actions::Action;
use crate::api::TodoApi;
use crate::constants::{
    ERROR_LOAD_FAILED, ERROR_TODO_CREATE_FAILED, ERROR_TODO_DELETE_FAILED, ERROR_TODO_UPDATE_FAILED,
};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Registry for in-flight remote calls.
///
/// Each call runs as a tokio task and reports back by sending a single
/// `Action` over the channel; the UI loop drains the channel and applies
/// the result. If the receiver is gone the send fails silently, so a
/// torn-down UI never sees a late update.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn spawn<F>(&mut self, description: String, future: F) -> TaskId
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let _ = action_sender.send(future.await);
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Fetch the full collection in the background.
    pub fn spawn_fetch(&mut self, api: Arc<dyn TodoApi>) -> TaskId {
        self.spawn("Fetch todos".to_string(), async move {
            match api.fetch_todos().await {
                Ok(todos) => Action::TodosLoaded(todos),
                Err(e) => Action::OperationFailed(format!("{}: {}", ERROR_LOAD_FAILED, e)),
            }
        })
    }

    /// Create a todo in the background.
    pub fn spawn_create(&mut self, api: Arc<dyn TodoApi>, text: String) -> TaskId {
        self.spawn(format!("Create todo '{}'", text), async move {
            match api.create_todo(&text).await {
                Ok(todo) => Action::TodoCreated(todo),
                Err(e) => Action::OperationFailed(format!("{}: {}", ERROR_TODO_CREATE_FAILED, e)),
            }
        })
    }

    /// Replace a todo's text in the background.
    pub fn spawn_update(&mut self, api: Arc<dyn TodoApi>, id: String, text: String) -> TaskId {
        self.spawn(format!("Update todo {}", id), async move {
            match api.update_todo(&id, &text).await {
                Ok(()) => Action::TodoUpdated { id, text },
                Err(e) => Action::OperationFailed(format!("{}: {}", ERROR_TODO_UPDATE_FAILED, e)),
            }
        })
    }

    /// Delete a todo in the background.
    pub fn spawn_delete(&mut self, api: Arc<dyn TodoApi>, id: String) -> TaskId {
        self.spawn(format!("Delete todo {}", id), async move {
            match api.delete_todo(&id).await {
                Ok(()) => Action::TodoDeleted(id),
                Err(e) => Action::OperationFailed(format!("{}: {}", ERROR_TODO_DELETE_FAILED, e)),
            }
        })
    }

    /// Drop bookkeeping for tasks that have finished.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
