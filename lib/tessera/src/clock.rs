use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::Duration,
};
use time::OffsetDateTime;

/// Direction a mocked clock should be moved in
#[derive(Clone, Copy, PartialEq)]
pub enum DeltaDirection {
    Forward,
    Backward,
}

/// Handle to move a mockable [`Clock`]
#[derive(Clone)]
pub struct MockHandle {
    delta: Arc<AtomicI64>,
}

impl MockHandle {
    pub fn adjust(&self, direction: DeltaDirection, delta: Duration) {
        let mut delta = i64::try_from(delta.as_secs()).unwrap_or(i64::MAX);
        if direction == DeltaDirection::Backward {
            delta = -delta;
        }

        self.delta.fetch_add(delta, Ordering::AcqRel);
    }
}

/// Wall clock with an optional adjustable offset
///
/// Reads unix timestamps in whole seconds, which is the resolution tokens are stamped with.
#[derive(Clone, Default)]
pub struct Clock {
    delta: Option<Arc<AtomicI64>>,
}

impl Clock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a clock that can be moved through the returned handle
    #[must_use]
    pub fn mockable() -> (Self, MockHandle) {
        let delta = Arc::new(AtomicI64::default());
        let handle = MockHandle {
            delta: Arc::clone(&delta),
        };

        (Self { delta: Some(delta) }, handle)
    }

    #[must_use]
    pub fn now(&self) -> i64 {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        match self.delta {
            Some(ref delta) => now.saturating_add(delta.load(Ordering::Acquire)),
            None => now,
        }
    }
}
