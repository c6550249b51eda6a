use std::fmt;
use crate::tracker::enums::request_kind::RequestKind;

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Announce => write!(f, "announce"),
            RequestKind::Push => write!(f, "push"),
        }
    }
}
