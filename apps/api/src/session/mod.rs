//! In-memory sessions for the interactive shell.
//!
//! A session is created by a successful upload, so "idle" is simply the
//! absence of a session. States after that:
//!
//! ResumeLoaded → Generating → Generated
//!      ↑              |            |
//!      └── failure ───┘            └── regenerate → Generating
//!
//! A run that is dropped mid-flight (client went away) counts as a failure.
//! Nothing is persisted; sessions older than the TTL are swept, and the rest
//! die with the process.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::GeneratedPortfolio;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub enum SessionState {
    ResumeLoaded,
    Generating,
    Generated(GeneratedPortfolio),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::ResumeLoaded => "resume_loaded",
            SessionState::Generating => "generating",
            SessionState::Generated(_) => "generated",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub filename: String,
    pub resume_text: String,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub filename: String,
    pub resume_chars: usize,
    pub state: &'static str,
    pub created_at: DateTime<Utc>,
}

/// Shared session map. Locks are never held across the model call.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a session in `ResumeLoaded`.
    pub async fn create(&self, filename: String, resume_text: String) -> SessionSummary {
        let id = Uuid::new_v4();
        let session = Session {
            filename,
            resume_text,
            state: SessionState::ResumeLoaded,
            created_at: Utc::now(),
        };
        let summary = summarize(id, &session);
        self.inner.write().await.insert(id, session);
        info!("Session {id} created ({} chars loaded)", summary.resume_chars);
        summary
    }

    pub async fn summary(&self, id: Uuid) -> Result<SessionSummary, AppError> {
        let sessions = self.inner.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(summarize(id, session))
    }

    /// Moves the session to `Generating`. The returned guard puts it back to
    /// `ResumeLoaded` if it is dropped before `finish` or `abort`.
    pub async fn begin_generation(&self, id: Uuid) -> Result<GenerationGuard, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        if matches!(session.state, SessionState::Generating) {
            return Err(AppError::Conflict(format!(
                "Session {id} is already generating"
            )));
        }
        session.state = SessionState::Generating;
        Ok(GenerationGuard {
            store: self.clone(),
            id,
            resume_text: session.resume_text.clone(),
            armed: true,
        })
    }

    pub async fn bundle(&self, id: Uuid) -> Result<Bytes, AppError> {
        let sessions = self.inner.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        match &session.state {
            SessionState::Generated(portfolio) => Ok(portfolio.bundle.clone()),
            other => Err(AppError::Conflict(format!(
                "Session {id} has no website to download (state: {})",
                other.name()
            ))),
        }
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| info!("Session {id} discarded"))
            .ok_or_else(|| not_found(id))
    }

    /// Drops every session older than the TTL. Returns how many went.
    pub async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now()).await
    }

    /// Sessions mid-generation are left to their guard.
    async fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| {
            let expired = now
                .signed_duration_since(session.created_at)
                .to_std()
                .is_ok_and(|age| age > self.ttl);
            !expired || matches!(session.state, SessionState::Generating)
        });
        before - sessions.len()
    }

    /// Runs `purge_expired` every `every` until the runtime shuts down.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let purged = store.purge_expired().await;
                if purged > 0 {
                    info!("Swept {purged} expired sessions");
                }
            }
        })
    }

    async fn set_state(&self, id: Uuid, state: SessionState) -> Result<(), AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.state = state;
        Ok(())
    }
}

/// Ownership of one in-flight generation run.
pub struct GenerationGuard {
    store: SessionStore,
    id: Uuid,
    resume_text: String,
    armed: bool,
}

impl GenerationGuard {
    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub async fn finish(mut self, portfolio: GeneratedPortfolio) -> Result<(), AppError> {
        let result = self
            .store
            .set_state(self.id, SessionState::Generated(portfolio))
            .await;
        self.armed = false;
        result
    }

    /// Returns a failed run to `ResumeLoaded` so the user can retry by hand.
    pub async fn abort(mut self) -> Result<(), AppError> {
        let result = self.store.set_state(self.id, SessionState::ResumeLoaded).await;
        self.armed = false;
        result
    }
}

impl Drop for GenerationGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let id = self.id;
        match self.store.inner.try_write() {
            Ok(mut sessions) => reset_if_generating(&mut sessions, id),
            Err(_) => {
                let store = self.store.clone();
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    handle.spawn(async move {
                        reset_if_generating(&mut *store.inner.write().await, id);
                    });
                }
            }
        }
    }
}

fn reset_if_generating(sessions: &mut HashMap<Uuid, Session>, id: Uuid) {
    if let Some(session) = sessions.get_mut(&id) {
        if matches!(session.state, SessionState::Generating) {
            warn!("Generation for session {id} was cancelled");
            session.state = SessionState::ResumeLoaded;
        }
    }
}

fn summarize(id: Uuid, session: &Session) -> SessionSummary {
    SessionSummary {
        session_id: id,
        filename: session.filename.clone(),
        resume_chars: session.resume_text.chars().count(),
        state: session.state.name(),
        created_at: session.created_at,
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
