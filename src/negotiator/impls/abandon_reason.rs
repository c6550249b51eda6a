use std::fmt;
use crate::negotiator::enums::abandon_reason::AbandonReason;

impl fmt::Display for AbandonReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbandonReason::Cancelled => write!(f, "cancelled"),
            AbandonReason::BudgetExhausted => write!(f, "resolution budget exhausted"),
            AbandonReason::SessionClosed => write!(f, "session closed"),
        }
    }
}
