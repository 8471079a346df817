//! Mock host context source.

use agentos_core::{Canon, Scene, Timeline};
use agentos_error::{AgentosResult, HostError, HostErrorKind};
use agentos_interface::{ContextSession, ContextSource};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counters shared between a source and its sessions.
#[derive(Debug, Default)]
pub struct SessionLog {
    pub opened: AtomicUsize,
    pub closed: AtomicUsize,
    pub dropped: AtomicUsize,
    pub fetches: AtomicUsize,
}

impl SessionLog {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

/// In-memory host holding one project.
#[derive(Clone)]
pub struct MockContextSource {
    scenes: Vec<Scene>,
    canon: Canon,
    failing_status: Option<u16>,
    log: Arc<SessionLog>,
}

impl MockContextSource {
    pub fn new(scenes: Vec<Scene>, canon: Canon) -> Self {
        Self {
            scenes,
            canon,
            failing_status: None,
            log: Arc::new(SessionLog::default()),
        }
    }

    /// Make the canon endpoint fail with the given status.
    pub fn with_failing_canon(mut self, status: u16) -> Self {
        self.failing_status = Some(status);
        self
    }

    pub fn log(&self) -> Arc<SessionLog> {
        Arc::clone(&self.log)
    }
}

#[async_trait]
impl ContextSource for MockContextSource {
    async fn open(&self) -> AgentosResult<Box<dyn ContextSession>> {
        self.log.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            source: self.clone(),
        }))
    }
}

struct MockSession {
    source: MockContextSource,
}

#[async_trait]
impl ContextSession for MockSession {
    async fn get_scene(&self, scene_id: &str) -> AgentosResult<Scene> {
        self.source.log.fetches.fetch_add(1, Ordering::SeqCst);
        self.source
            .scenes
            .iter()
            .find(|s| s.id == scene_id)
            .cloned()
            .ok_or_else(|| {
                HostError::new(HostErrorKind::Status {
                    endpoint: format!("/internal/scenes/{}", scene_id),
                    status: 404,
                })
                .into()
            })
    }

    async fn get_project_canon(&self, project_id: &str) -> AgentosResult<Canon> {
        self.source.log.fetches.fetch_add(1, Ordering::SeqCst);
        match self.source.failing_status {
            Some(status) => Err(HostError::new(HostErrorKind::Status {
                endpoint: format!("/internal/projects/{}/canon", project_id),
                status,
            })
            .into()),
            None => Ok(self.source.canon.clone()),
        }
    }

    async fn get_project_scenes(&self, _project_id: &str) -> AgentosResult<Timeline> {
        self.source.log.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(Timeline::new(self.source.scenes.clone()))
    }

    async fn close(&self) {
        self.source.log.closed.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.source.log.dropped.fetch_add(1, Ordering::SeqCst);
    }
}
