//! Top-level UI phase state machine
//!
//! The application is always in exactly one of three phases. Transitions are
//! a pure function of (phase, event) so the flow is testable without any
//! window or GPU.

/// The three mutually exclusive top-level UI modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Landing screen with the "Begin Journey" prompt
    Welcome,
    /// 20-second forward-flight animation
    Journey,
    /// Interactive solar-system navigation
    Portfolio,
}

/// Events that can move the application between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// The visitor pressed the "Begin Journey" button
    BeginJourney,
    /// The journey animation finished (including its grace delay)
    JourneyComplete,
}

/// Compute the next phase. Events that are not legal in the current phase
/// leave it unchanged.
pub fn transition(phase: Phase, event: PhaseEvent) -> Phase {
    match (phase, event) {
        (Phase::Welcome, PhaseEvent::BeginJourney) => Phase::Journey,
        (Phase::Journey, PhaseEvent::JourneyComplete) => Phase::Portfolio,
        (current, _) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_to_journey_on_begin() {
        assert_eq!(
            transition(Phase::Welcome, PhaseEvent::BeginJourney),
            Phase::Journey
        );
    }

    #[test]
    fn journey_to_portfolio_on_complete() {
        assert_eq!(
            transition(Phase::Journey, PhaseEvent::JourneyComplete),
            Phase::Portfolio
        );
    }

    #[test]
    fn illegal_events_are_ignored() {
        assert_eq!(
            transition(Phase::Welcome, PhaseEvent::JourneyComplete),
            Phase::Welcome
        );
        assert_eq!(
            transition(Phase::Journey, PhaseEvent::BeginJourney),
            Phase::Journey
        );
        assert_eq!(
            transition(Phase::Portfolio, PhaseEvent::BeginJourney),
            Phase::Portfolio
        );
        assert_eq!(
            transition(Phase::Portfolio, PhaseEvent::JourneyComplete),
            Phase::Portfolio
        );
    }
}
