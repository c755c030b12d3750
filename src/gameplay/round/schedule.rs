//! Delayed one-shot cues with epoch-based cancellation.
//!
//! Every pending cue is stamped with the epoch it was scheduled in.
//! `cancel_all` moves to a new epoch; cues from older epochs are discarded
//! the next time the queue is ticked and never fire.

/// A cue waiting for its delay to elapse.
#[derive(Debug, Clone)]
struct Pending<C> {
    due: f32,
    seq: u64,
    epoch: u64,
    cue: C,
}

/// One-shot timer queue driven by explicit `tick(dt)` calls.
#[derive(Debug, Clone)]
pub struct Schedule<C> {
    now: f32,
    epoch: u64,
    next_seq: u64,
    pending: Vec<Pending<C>>,
}

impl<C> Default for Schedule<C> {
    fn default() -> Self {
        Self {
            now: 0.0,
            epoch: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<C> Schedule<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `cue` to fire `delay` seconds from now in the current epoch.
    pub fn after(&mut self, delay: f32, cue: C) {
        self.pending.push(Pending {
            due: self.now + delay.max(0.0),
            seq: self.next_seq,
            epoch: self.epoch,
            cue,
        });
        self.next_seq += 1;
    }

    /// Advances the clock by `dt` seconds and returns the cues that fell
    /// due, earliest first. Cues with equal due times keep their
    /// scheduling order.
    pub fn tick(&mut self, dt: f32) -> Vec<C> {
        self.now += dt.max(0.0);
        let now = self.now;
        let epoch = self.epoch;

        self.pending.retain(|p| p.epoch == epoch);
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|p| p.cue).collect()
    }

    /// Starts a new epoch, invalidating every cue queued so far.
    pub const fn cancel_all(&mut self) {
        self.epoch += 1;
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True when no cue of the current epoch is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cues of the current epoch still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.iter().filter(|p| p.epoch == self.epoch).count()
    }
}
