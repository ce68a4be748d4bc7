mod http;
mod types;

pub use http::HttpBackend;
pub use types::*;

use crate::error::ApiError;
use async_trait::async_trait;

/// The remote service, seen as four operations.
///
/// Command logic talks to this trait so the transport stays swappable
/// and tests can stub the backend.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn sign_in(&self, req: &SignInRequest) -> Result<AuthResponse, ApiError>;

    async fn sign_up(&self, req: &SignUpRequest) -> Result<AuthResponse, ApiError>;

    async fn generate_plan(&self, req: &PlanRequest) -> Result<PlanResponse, ApiError>;

    /// Prior generations for a user, newest first as the backend returns
    /// them. A user with no history yet is an empty list, not an error.
    async fn history(&self, username: &str) -> Result<Vec<HistoryEntry>, ApiError>;
}
