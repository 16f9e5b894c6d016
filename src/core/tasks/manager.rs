use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::api;

/// Runs network fetches off the UI thread. Each task spawns a thread that
/// blocks on the shared tokio runtime and reports back over the channel; the
/// app drains the channel once per frame. No retry and no cancellation — a
/// failed fetch just surfaces as an Err result.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();
        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn fetch_directory(&self) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(api::fetch_employees(api::DIRECTORY_LIMIT))
                .map_err(|e| e.to_string());
            let _ = sender.send(TaskResult::DirectoryLoaded(result));
        });
    }

    pub fn fetch_employee(&self, id: u32) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(api::fetch_employee(id)).map_err(|e| e.to_string());
            let _ = sender.send(TaskResult::EmployeeLoaded { id, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
