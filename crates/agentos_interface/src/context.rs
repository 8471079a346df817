use agentos_core::{Canon, Scene, Timeline};
use agentos_error::AgentosResult;
use async_trait::async_trait;

/// Factory for per-request host sessions.
#[async_trait]
pub trait ContextSource: Send + Sync {
    /// Open a session owned exclusively by one analysis request.
    async fn open(&self) -> AgentosResult<Box<dyn ContextSession>>;
}

/// A request-scoped connection to the host application.
///
/// Callers must call [`close`](ContextSession::close) once they are done, on
/// success and on failure alike. Implementations release their resources on
/// drop as well, so a cancelled request still cleans up.
#[async_trait]
pub trait ContextSession: Send + Sync {
    /// Fetch one scene by id.
    async fn get_scene(&self, scene_id: &str) -> AgentosResult<Scene>;

    /// Fetch the canon (characters, locations, world rules) of a project.
    async fn get_project_canon(&self, project_id: &str) -> AgentosResult<Canon>;

    /// Fetch every scene of a project in story order.
    async fn get_project_scenes(&self, project_id: &str) -> AgentosResult<Timeline>;

    /// Release the session. Calling it twice is harmless.
    async fn close(&self);
}
