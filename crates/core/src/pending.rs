/// Last scoring signal seen by the fast poll, waiting to be reported.
///
/// The fast poll is the only writer and the slow cycle the only reader.
/// Reading consumes the value, so one observation is reported at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingScore {
    value: Option<i64>,
}

impl PendingScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest raw signal. An absent signal clears the cell.
    pub fn observe(&mut self, raw: Option<i64>) {
        self.value = raw;
    }

    pub fn peek(&self) -> Option<i64> {
        self.value
    }

    /// Takes the pending value if it is reportable (non-negative).
    /// The cell is empty afterwards either way.
    pub fn take(&mut self) -> Option<i64> {
        self.value.take().filter(|v| *v >= 0)
    }
}
