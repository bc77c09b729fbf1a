/// Which repeating callback a ticker drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TickerKind {
    /// One-second countdown.
    Countdown,
    /// Sprite frame advance at the current stage's interval.
    Animation,
    /// Clears the completion celebration after one firing.
    Celebration,
    /// Flips the readout between its two pulse sizes.
    Pulse,
}

/// Identity of one armed ticker. The subscription layer keys its sleeper
/// thread on this, so a new generation always restarts the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TickerSpec {
    pub(crate) kind: TickerKind,
    pub(crate) interval_ms: u64,
    pub(crate) generation: u64,
}

/// Cancellable repeating task handle.
///
/// Arming bumps the generation so ticks already in flight from an earlier
/// schedule are rejected by [`Ticker::accepts`].
#[derive(Debug, Clone)]
pub(crate) struct Ticker {
    kind: TickerKind,
    interval_ms: u64,
    generation: u64,
    armed: bool,
}

impl Ticker {
    pub(crate) fn new(kind: TickerKind) -> Self {
        Self {
            kind,
            interval_ms: 0,
            generation: 0,
            armed: false,
        }
    }

    /// Cancel-then-schedule.
    pub(crate) fn arm(&mut self, interval_ms: u64) {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.interval_ms = interval_ms.max(1);
        self.armed = true;
    }

    /// No-op when already cancelled or never armed.
    pub(crate) fn cancel(&mut self) {
        self.armed = false;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.armed
    }

    pub(crate) fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub(crate) fn accepts(&self, generation: u64) -> bool {
        self.armed && self.generation == generation
    }

    pub(crate) fn spec(&self) -> Option<TickerSpec> {
        self.armed.then_some(TickerSpec {
            kind: self.kind,
            interval_ms: self.interval_ms,
            generation: self.generation,
        })
    }
}
