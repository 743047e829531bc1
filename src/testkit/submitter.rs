//! Submitter that answers from a script.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{BetId, BetTicket};
use crate::error::SubmissionError;
use crate::port::BetSubmitter;

/// Pops queued answers in order; succeeds with `BET-<n>` once the queue is empty.
/// Every ticket it sees is kept.
#[derive(Default)]
pub struct ScriptedSubmitter {
    answers: Mutex<VecDeque<Result<BetId, SubmissionError>>>,
    tickets: Mutex<Vec<BetTicket>>,
}

impl ScriptedSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next answer.
    pub fn push(&self, answer: Result<BetId, SubmissionError>) {
        self.answers.lock().push_back(answer);
    }

    /// Tickets submitted so far.
    pub fn tickets(&self) -> Vec<BetTicket> {
        self.tickets.lock().clone()
    }
}

#[async_trait]
impl BetSubmitter for ScriptedSubmitter {
    async fn submit(&self, ticket: &BetTicket) -> Result<BetId, SubmissionError> {
        let n = {
            let mut tickets = self.tickets.lock();
            tickets.push(ticket.clone());
            tickets.len()
        };
        let answer = self.answers.lock().pop_front();
        answer.unwrap_or_else(|| Ok(BetId::new(format!("BET-{n}"))))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
