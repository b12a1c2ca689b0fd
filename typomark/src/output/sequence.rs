/// Hands out the sequence keys of one render pass.
///
/// Keys start at 0 and grow by one per call to [`next_key`](Self::next_key).
/// The renderer resets its sequencer at the start of every pass.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    next: usize,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current key and advance.
    pub fn next_key(&mut self) -> usize {
        let key = self.next;
        self.next += 1;
        key
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Number of keys handed out since the last reset
    pub fn issued(&self) -> usize {
        self.next
    }
}
