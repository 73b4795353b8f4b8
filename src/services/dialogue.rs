//! Dialogue service
//!
//! Glues the session store to the dialogue state machine and owns the
//! session lifecycle: create on `/start`, write back on progress, delete
//! once a completed request has been dispatched.

use tracing::{debug, info};

use crate::models::StoryRequest;
use crate::state::{DialogueMachine, Reply, SessionStore, StepOutcome};
use crate::state::prompts;
use crate::utils::logging::{log_rejected_input, log_step_transition, log_user_action};

/// What the transport should do after an input was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Send this reply
    Reply(Reply),
    /// The request was dispatched and the session removed; nothing to reply
    Dispatched,
}

/// Session-aware front of the dialogue state machine
#[derive(Debug, Clone, Default)]
pub struct DialogueService {
    store: SessionStore,
    machine: DialogueMachine,
}

impl DialogueService {
    pub fn new(store: SessionStore, machine: DialogueMachine) -> Self {
        Self { store, machine }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Begin a new questionnaire, discarding any unfinished one
    pub fn start(&self, user_id: i64) -> Reply {
        self.store.create(user_id);
        log_user_action(user_id, "start", None);
        self.machine.start_reply()
    }

    /// Feed one text message into the user's session
    ///
    /// When the last child is stored, `dispatch` is called exactly once with
    /// the assembled request and the session is deleted right after it.
    pub fn handle_input<F>(&self, user_id: i64, input: &str, dispatch: F) -> InputResult
    where
        F: FnOnce(StoryRequest),
    {
        let Some(mut session) = self.store.get(user_id) else {
            debug!(user_id = user_id, "Message without active session");
            return InputResult::Reply(Reply::text(prompts::NO_SESSION));
        };

        let from = session.step;
        match self.machine.advance(&mut session, input) {
            StepOutcome::Advanced(reply) => {
                log_step_transition(user_id, from.as_str(), session.step.as_str());
                self.store.save(session);
                InputResult::Reply(reply)
            }
            StepOutcome::Rejected(reply) => {
                log_rejected_input(user_id, from.as_str());
                InputResult::Reply(reply)
            }
            StepOutcome::Completed(request) => {
                info!(user_id = user_id, children = request.children.len(), "Story request completed");
                dispatch(request);
                self.store.delete(user_id);
                InputResult::Dispatched
            }
        }
    }
}
