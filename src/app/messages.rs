/// Commands the reader understands, decoded from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NextSpread,
    PreviousSpread,
    JumpToEnd,
    JumpToStart,
    Quit,
}
