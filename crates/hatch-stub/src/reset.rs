/// Reset protocol shared by every mock in the harness.
///
/// History and behavior reset independently so a test can forget recorded
/// calls while keeping configured responses, or the other way round.
pub trait MockReset {
    /// Forget every recorded call. Configured behavior is kept.
    fn reset_mock_history(&self);

    /// Drop configured behavior, restoring the default.
    fn reset_mock_behavior(&self);

    /// History reset followed by behavior reset.
    fn reset_mock(&self) {
        self.reset_mock_history();
        self.reset_mock_behavior();
    }
}
