use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::{ActionKind, GameState, TableConfig};

/// Everything that can go wrong on the client side. Network failures and
/// non-2xx statuses both surface as `Transport`; the engine's rejection of
/// an action is indistinguishable from a dropped request at this layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("another action is already in flight")]
    ActionPending,
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateResponse {
    session_id: Uuid,
}

#[derive(Debug, Serialize)]
struct ActionRequest {
    #[serde(rename = "type")]
    kind: ActionKind,
    amount: u32,
}

/// Thin wrapper over the engine's four-operation API. No retries, no
/// backoff; callers decide what a failure means.
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: reqwest::Client,
    base: String,
}

impl EngineClient {
    /// `server` is the engine's root URL, e.g. `http://localhost:8080`.
    pub fn new(server: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: format!("{}/api/game", server.trim_end_matches('/')),
        }
    }

    pub async fn create(&self, config: &TableConfig) -> Result<Uuid> {
        let response: CreateResponse = self
            .http
            .post(format!("{}/create", self.base))
            .json(config)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.session_id)
    }

    pub async fn start_hand(&self, session: Uuid) -> Result<GameState> {
        let state = self
            .http
            .post(format!("{}/{}/start", self.base, session))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(state)
    }

    /// Side-effect-free from the client's point of view.
    pub async fn state(&self, session: Uuid) -> Result<GameState> {
        let state = self
            .http
            .get(format!("{}/{}/state", self.base, session))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(state)
    }

    /// Submits one action for the human seat. `amount` is forced to 0 for
    /// actions that carry no stake; the server resolves those itself.
    pub async fn act(&self, session: Uuid, kind: ActionKind, amount: u32) -> Result<GameState> {
        let body = ActionRequest {
            kind,
            amount: if kind.carries_amount() { amount } else { 0 },
        };
        let state = self
            .http
            .post(format!("{}/{}/action", self.base, session))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(state)
    }

    pub async fn end_session(&self, session: Uuid) -> Result<()> {
        self.http
            .delete(format!("{}/{}", self.base, session))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
