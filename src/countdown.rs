use std::time::{Duration, SystemTime};

/// Explicit countdown lifecycle. The start timestamp only exists while
/// running, so the invariants hold by construction:
/// Stopped has no timestamp and zero elapsed time, Paused has no timestamp
/// and the elapsed time accumulated so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountdownState {
    Stopped,
    Running { started_at: SystemTime },
    Paused,
}

/// Notification emitted by the engine once per tick while running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Whole seconds left, rounded from the wall-clock delta.
    Remaining(u64),
    /// The countdown reached zero; the engine has already reset itself.
    Finished,
}

/// Single-observer callback contract consumed by the UI layer.
pub trait CountdownObserver {
    fn on_remaining(&mut self, secs: u64);
    fn on_finished(&mut self);
}

impl CountdownEvent {
    pub fn dispatch(self, observer: &mut impl CountdownObserver) {
        match self {
            CountdownEvent::Remaining(secs) => observer.on_remaining(secs),
            CountdownEvent::Finished => observer.on_finished(),
        }
    }
}

/// Countdown engine: owns the state machine and derives elapsed time from
/// wall-clock timestamps. The periodic 1 Hz cycle lives in the host event
/// loop, which calls `tick` once per cycle; deriving the remaining time
/// from timestamp subtraction instead of counting ticks keeps the countdown
/// self-correcting across missed or delayed ticks.
#[derive(Clone, Debug)]
pub struct Countdown {
    state: CountdownState,
    duration_secs: f64,
    elapsed_secs: f64,
    default_duration_secs: f64,
}

impl Countdown {
    pub fn new(default_duration_secs: f64) -> Self {
        Self {
            state: CountdownState::Stopped,
            duration_secs: default_duration_secs,
            elapsed_secs: 0.0,
            default_duration_secs,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.state, CountdownState::Stopped) && self.elapsed_secs == 0.0
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, CountdownState::Paused)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    /// Begins a countdown from the stopped state and immediately emits the
    /// first remaining notification. A no-op from any other state.
    pub fn start(&mut self, now: SystemTime) -> Option<CountdownEvent> {
        if !self.is_stopped() {
            return None;
        }
        self.state = CountdownState::Running { started_at: now };
        self.elapsed_secs = 0.0;
        self.tick(now)
    }

    /// Continues a paused countdown. The start timestamp is rewound by the
    /// accumulated elapsed time so the elapsed calculation is continuous
    /// across the pause. A no-op unless paused.
    pub fn resume(&mut self, now: SystemTime) -> Option<CountdownEvent> {
        if !self.is_paused() {
            return None;
        }
        let started_at = now - Duration::from_secs_f64(self.elapsed_secs);
        self.state = CountdownState::Running { started_at };
        self.tick(now)
    }

    /// Pauses a running countdown, retaining the elapsed time at its last
    /// computed value. A no-op unless running.
    pub fn pause(&mut self, now: SystemTime) {
        let CountdownState::Running { started_at } = self.state else {
            return;
        };
        self.elapsed_secs = Self::wall_elapsed(started_at, now).min(self.duration_secs);
        self.state = CountdownState::Paused;
    }

    /// Returns to the stopped state from anywhere and restores the default
    /// duration.
    pub fn reset(&mut self) {
        self.state = CountdownState::Stopped;
        self.elapsed_secs = 0.0;
        self.duration_secs = self.default_duration_secs;
    }

    /// One cycle of the periodic notification loop. Yields nothing unless
    /// running.
    pub fn tick(&mut self, now: SystemTime) -> Option<CountdownEvent> {
        let CountdownState::Running { started_at } = self.state else {
            return None;
        };
        self.elapsed_secs = Self::wall_elapsed(started_at, now);

        let remaining = (self.duration_secs - self.elapsed_secs).round();
        if remaining <= 0.0 {
            self.reset();
            Some(CountdownEvent::Finished)
        } else {
            Some(CountdownEvent::Remaining(remaining as u64))
        }
    }

    fn wall_elapsed(started_at: SystemTime, now: SystemTime) -> f64 {
        // A clock stepped backwards reads as no time passed.
        now.duration_since(started_at)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}
