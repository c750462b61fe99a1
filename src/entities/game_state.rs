#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    /// Lives or health ran out; the loss screen is held for a few seconds
    /// before the loop ends.
    Lost,
}
