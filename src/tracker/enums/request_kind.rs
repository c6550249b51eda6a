#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Announce,
    Push,
}
