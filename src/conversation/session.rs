//! Per-interaction session state: phase, history, and the two record
//! slots. The session owns all of it; nothing here touches the network.

use crate::language::Language;
use crate::models::{Message, UserProfile};

use super::phase::{Phase, TurnEvent};
use super::texts;

/// One user interaction, from first message until the process forgets it.
#[derive(Debug, Clone)]
pub struct Session {
    language: Language,
    phase: Phase,
    history: Vec<Message>,
    /// Candidate awaiting the user's yes/no.
    pending: Option<UserProfile>,
    /// Committed after an explicit "yes"; feeds the responder.
    confirmed: Option<UserProfile>,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            phase: Phase::Collecting,
            history: Vec::new(),
            pending: None,
            confirmed: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn pending(&self) -> Option<&UserProfile> {
        self.pending.as_ref()
    }

    pub fn confirmed(&self) -> Option<&UserProfile> {
        self.confirmed.as_ref()
    }

    pub fn push(&mut self, message: Message) {
        self.history.push(message);
    }

    /// Switching language reinitializes the session completely.
    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            tracing::info!(
                from = self.language.as_tag(),
                to = language.as_tag(),
                "Language changed, resetting session"
            );
            *self = Session::new(language);
        }
    }

    /// Record a successful extraction: hold the candidate and move to
    /// confirming.
    pub fn begin_confirmation(&mut self, candidate: UserProfile) {
        self.pending = Some(candidate);
        self.phase = self.phase.next(TurnEvent::ExtractionSucceeded);
    }

    /// Apply the user's out-of-band yes/no to the pending candidate.
    ///
    /// "Yes" commits the candidate and returns the one-time welcome text;
    /// anything else discards it and the collection conversation resumes.
    /// Outside the confirming phase this is a no-op returning `None`.
    pub fn resolve_confirmation(&mut self, accepted: bool) -> Option<String> {
        if self.phase != Phase::Confirming {
            return None;
        }
        if accepted {
            let profile = self.pending.take()?;
            let welcome = texts::welcome_message(self.language, &profile.first_name);
            self.history
                .push(Message::user(texts::user_confirmed(self.language)));
            self.confirmed = Some(profile);
            self.phase = self.phase.next(TurnEvent::Confirmed);
            Some(welcome)
        } else {
            self.pending = None;
            self.history
                .push(Message::user(texts::user_corrected(self.language)));
            self.phase = self.phase.next(TurnEvent::Rejected);
            None
        }
    }
}
