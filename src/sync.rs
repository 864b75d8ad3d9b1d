use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::{ClientError, EngineClient, Result};
use crate::legality::{self, BetBounds};
use crate::state::{ActionKind, GameState, TableConfig};

const POLL_PERIOD: Duration = Duration::from_secs(1);
const WATCH_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
struct Slot {
    applied: u64,
    state: Option<GameState>,
}

#[derive(Debug)]
struct Inner {
    slot: Mutex<Slot>,
    tickets: AtomicU64,
    acting: AtomicBool,
}

/// Owns a session against the remote engine and the single displayed
/// snapshot. The snapshot is only ever replaced wholesale, and every
/// response is gated by a monotonically increasing ticket so a slow poll
/// can never overwrite the result of a later-issued action.
#[derive(Debug, Clone)]
pub struct Table {
    client: EngineClient,
    session: Uuid,
    big_blind: u32,
    inner: Arc<Inner>,
}

impl Table {
    /// Opens a session. Fails on transport error; no retry.
    pub async fn create(client: EngineClient, config: &TableConfig) -> Result<Self> {
        let session = client.create(config).await?;
        Ok(Self {
            client,
            session,
            big_blind: config.big_blind,
            inner: Arc::new(Inner {
                slot: Mutex::new(Slot::default()),
                tickets: AtomicU64::new(0),
                acting: AtomicBool::new(false),
            }),
        })
    }

    pub fn session(&self) -> Uuid {
        self.session
    }

    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    /// Clone of the latest applied snapshot, if any hand has been dealt.
    pub fn snapshot(&self) -> Option<GameState> {
        self.inner.slot.lock().state.clone()
    }

    /// Legal-action bounds for the human seat, re-derived from the given
    /// snapshot. Never cached: bet levels move on every action.
    pub fn bounds(&self, state: &GameState) -> Option<BetBounds> {
        state
            .human()
            .map(|human| legality::bet_bounds(state, human, self.big_blind))
    }

    /// Deals a new hand. Valid only between hands; misuse mid-hand is a
    /// caller error the engine owns.
    pub async fn start_hand(&self) -> Result<GameState> {
        let ticket = self.ticket();
        let state = self.client.start_hand(self.session).await?;
        Ok(self.apply(ticket, state))
    }

    /// Fetches the current snapshot and applies it if still fresh.
    pub async fn refresh(&self) -> Result<GameState> {
        let ticket = self.ticket();
        let state = self.client.state(self.session).await?;
        Ok(self.apply(ticket, state))
    }

    /// Submits one action for the human seat. At most one action may be in
    /// flight: the guard is taken atomically before dispatch, so a racing
    /// second submit fails with `ActionPending` instead of double-sending.
    pub async fn act(&self, kind: ActionKind, amount: u32) -> Result<GameState> {
        let _guard = ActingGuard::take(&self.inner.acting)?;
        let ticket = self.ticket();
        let state = self.client.act(self.session, kind, amount).await?;
        Ok(self.apply(ticket, state))
    }

    /// Arms the 1-second polling timer. The task stops issuing refreshes
    /// once the displayed snapshot reports the hand complete, and the
    /// returned guard aborts it on drop, so the timer never outlives the
    /// view that armed it. Re-arming simply replaces the old guard.
    pub fn arm_polling(&self) -> PollGuard {
        let table = self.clone();
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(POLL_PERIOD);
            timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            timer.tick().await; // the interval's zeroth tick is immediate
            loop {
                timer.tick().await;
                if table.hand_complete() {
                    break;
                }
                match table.refresh().await {
                    Ok(_) => {}
                    // Transient failure: keep the previous snapshot.
                    Err(error) => warn!(%error, "poll failed; retaining last snapshot"),
                }
            }
        });
        PollGuard { handle }
    }

    /// Blocks (cooperatively) until the snapshot shows the human's turn or
    /// a completed hand, polling the engine in the background meanwhile.
    pub async fn wait_for_turn(&self) -> GameState {
        if let Some(state) = self.snapshot() {
            if state.is_human_turn || state.hand_complete {
                return state;
            }
        }
        let _poller = self.arm_polling();
        loop {
            tokio::time::sleep(WATCH_PERIOD).await;
            if let Some(state) = self.snapshot() {
                if state.is_human_turn || state.hand_complete {
                    return state;
                }
            }
        }
    }

    /// Tears the session down server-side. Best effort on quit.
    pub async fn close(&self) {
        if let Err(error) = self.client.end_session(self.session).await {
            warn!(%error, "failed to end session");
        }
    }

    fn hand_complete(&self) -> bool {
        self.inner
            .slot
            .lock()
            .state
            .as_ref()
            .is_some_and(|state| state.hand_complete)
    }

    fn ticket(&self) -> u64 {
        self.inner.tickets.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Single application point for every response. Older tickets lose:
    /// the snapshot they carry is already superseded and is discarded.
    fn apply(&self, ticket: u64, state: GameState) -> GameState {
        let mut slot = self.inner.slot.lock();
        if ticket > slot.applied {
            slot.applied = ticket;
            slot.state = Some(state.clone());
            debug!(ticket, "applied snapshot");
            state
        } else {
            debug!(ticket, applied = slot.applied, "discarded stale snapshot");
            slot.state.clone().unwrap_or(state)
        }
    }
}

/// Scoped ownership of the polling timer.
pub struct PollGuard {
    handle: JoinHandle<()>,
}

impl Drop for PollGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Holds the action-in-flight flag; releases it on any exit path.
struct ActingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ActingGuard<'a> {
    fn take(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ClientError::ActionPending)?;
        Ok(Self { flag })
    }
}

impl Drop for ActingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
