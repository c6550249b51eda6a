#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayEnd {
    RemoteClosed,
    LocalClosed,
}
