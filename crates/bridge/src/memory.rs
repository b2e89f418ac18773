//! In-memory [`Bridge`] that replays scripted replies and records every call.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::{Bridge, BridgeError, BridgeResult};

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub command: String,
    pub args: Value,
}

#[derive(Clone, Debug)]
enum Reply {
    Resolve(Value),
    Reject(String),
    Hang,
}

#[derive(Default)]
struct State {
    replies: HashMap<String, VecDeque<Reply>>,
    calls: Vec<RecordedCall>,
}

/// Clones share the same script and call log, so a test can keep one handle
/// and give the other away.
///
/// Replies queue per command; the last queued reply keeps answering once the
/// queue is down to one entry. Unscripted commands are rejected the way the
/// shell rejects unregistered ones.
#[derive(Clone, Default)]
pub struct MemoryBridge {
    state: Rc<RefCell<State>>,
}

impl MemoryBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply for `command`.
    ///
    /// # Panics
    ///
    /// When `reply` cannot be represented as JSON.
    pub fn resolve(&self, command: &str, reply: impl Serialize) -> &Self {
        let value = serde_json::to_value(reply).expect("scripted reply must serialize");
        self.push(command, Reply::Resolve(value))
    }

    pub fn reject(&self, command: &str, reason: &str) -> &Self {
        self.push(command, Reply::Reject(reason.to_owned()))
    }

    /// Queues a reply that never settles.
    pub fn hang(&self, command: &str) -> &Self {
        self.push(command, Reply::Hang)
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.borrow().calls.clone()
    }

    /// Arguments of every call made to `command`, oldest first.
    #[must_use]
    pub fn calls_to(&self, command: &str) -> Vec<Value> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| call.command == command)
            .map(|call| call.args.clone())
            .collect()
    }

    fn push(&self, command: &str, reply: Reply) -> &Self {
        self.state
            .borrow_mut()
            .replies
            .entry(command.to_owned())
            .or_default()
            .push_back(reply);
        self
    }

    fn next_reply(&self, command: &str) -> Option<Reply> {
        let mut state = self.state.borrow_mut();
        let queue = state.replies.get_mut(command)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait(?Send)]
impl Bridge for MemoryBridge {
    async fn invoke(&self, command: &str, args: Value) -> BridgeResult<Value> {
        self.state.borrow_mut().calls.push(RecordedCall {
            command: command.to_owned(),
            args,
        });

        match self.next_reply(command) {
            Some(Reply::Resolve(value)) => Ok(value),
            Some(Reply::Reject(reason)) => Err(BridgeError::Rejected {
                command: command.to_owned(),
                reason,
            }),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(BridgeError::Rejected {
                command: command.to_owned(),
                reason: format!("command {command} not found"),
            }),
        }
    }
}
