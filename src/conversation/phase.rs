use serde::{Deserialize, Serialize};

/// Where a conversation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Gathering the mandatory profile fields.
    Collecting,
    /// A candidate profile is pending the user's explicit yes/no.
    Confirming,
    /// Profile committed; every turn is a knowledge-base question.
    Answering,
}

/// What happened during the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    ExtractionSucceeded,
    ExtractionFailed,
    Confirmed,
    Rejected,
    Question,
}

impl Phase {
    /// The full transition table. Events that don't belong to the current
    /// phase leave it unchanged; a phase only moves after its own step
    /// fully succeeds.
    pub fn next(self, event: TurnEvent) -> Phase {
        use Phase::*;
        use TurnEvent::*;
        match (self, event) {
            (Collecting, ExtractionSucceeded) => Confirming,
            (Collecting, ExtractionFailed) => Collecting,
            (Confirming, Confirmed) => Answering,
            (Confirming, Rejected) => Collecting,
            (Answering, Question) => Answering,
            (current, _) => current,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Collecting => "collecting",
            Phase::Confirming => "confirming",
            Phase::Answering => "answering",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Phase::*;
    use super::TurnEvent::*;

    #[test]
    fn collecting_advances_only_on_success() {
        assert_eq!(Collecting.next(ExtractionSucceeded), Confirming);
        assert_eq!(Collecting.next(ExtractionFailed), Collecting);
    }

    #[test]
    fn confirming_splits_on_reply() {
        assert_eq!(Confirming.next(Confirmed), Answering);
        assert_eq!(Confirming.next(Rejected), Collecting);
    }

    #[test]
    fn answering_is_terminal() {
        assert_eq!(Answering.next(Question), Answering);
        // No event leads back out
        assert_eq!(Answering.next(ExtractionSucceeded), Answering);
        assert_eq!(Answering.next(Rejected), Answering);
    }

    #[test]
    fn foreign_events_do_not_move_the_phase() {
        assert_eq!(Collecting.next(Confirmed), Collecting);
        assert_eq!(Confirming.next(ExtractionFailed), Confirming);
    }

    #[test]
    fn phase_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Collecting).unwrap(), "\"collecting\"");
        assert_eq!(serde_json::to_string(&Confirming).unwrap(), "\"confirming\"");
    }
}
