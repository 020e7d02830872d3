#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use taskboard_core::api::{PageRequest, Task, TaskPage, TaskSource};

/// Source that replays a fixed list of page responses and records requests.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<TaskPage, String>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<TaskPage, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_page(&self, request: PageRequest) -> anyhow::Result<TaskPage> {
        self.requests.lock().unwrap().push(request);
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(page)) => Ok(page),
            Some(Err(msg)) => Err(anyhow::anyhow!(msg)),
            None => Err(anyhow::anyhow!("no scripted response for page {}", request.page)),
        }
    }
}

pub fn task(id: &str, status: Option<&str>) -> Task {
    Task {
        clickup_id: Some(id.to_string()),
        name: format!("task {id}"),
        status: status.map(str::to_string),
        ..Task::default()
    }
}

pub fn page(ids: &[&str], has_more: bool) -> TaskPage {
    TaskPage::new(ids.iter().map(|id| task(id, None)).collect(), has_more)
}

pub fn ids(tasks: &[Task]) -> Vec<String> {
    tasks.iter().filter_map(Task::identifier).collect()
}
