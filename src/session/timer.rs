//! Countdown timer.
//!
//! [`Countdown`] is a logical clock: it only moves when [`Countdown::tick`] is
//! called with the handle returned by the latest [`Countdown::arm`]. In the
//! application a tokio task started by [`spawn_ticker`] supplies one tick per
//! second; tests drive it by hand.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::controller::{SharedController, TickOutcome};

/// Real-time length of one countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identifies one arming of a [`Countdown`]. Handles from earlier armings are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed. The last tick of an arming carries `remaining: 0`.
    Tick { remaining: u32 },
    /// The countdown reached zero. Emitted once per arming, right after the
    /// zero tick.
    Expired,
}

#[derive(Debug, Default)]
pub struct Countdown {
    generation: u64,
    remaining: u32,
    armed: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from `total_seconds`, invalidating every earlier
    /// handle.
    pub fn arm(&mut self, total_seconds: u32) -> TimerHandle {
        self.generation += 1;
        self.remaining = total_seconds;
        self.armed = true;
        TimerHandle {
            generation: self.generation,
        }
    }

    /// Stop immediately. Pending ticks for the current handle become no-ops.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn accepts(&self, handle: TimerHandle) -> bool {
        self.armed && handle.generation == self.generation
    }

    /// Advance by one second.
    ///
    /// Yields the new remaining time as a `Tick`; when that reaches zero an
    /// `Expired` follows it and the countdown disarms. Nothing is yielded for
    /// a stale handle or once the countdown is disarmed or expired.
    pub fn tick(&mut self, handle: TimerHandle) -> Vec<TimerEvent> {
        if !self.accepts(handle) {
            return Vec::new();
        }

        self.remaining = self.remaining.saturating_sub(1);
        let mut events = vec![TimerEvent::Tick {
            remaining: self.remaining,
        }];
        if self.remaining == 0 {
            self.armed = false;
            events.push(TimerEvent::Expired);
        }
        events
    }
}

/// Drive the controller's countdown from a tokio interval.
///
/// The task exits on its own once the controller reports the handle as stale
/// or expired; callers may also abort it early.
pub fn spawn_ticker(
    controller: SharedController,
    handle: TimerHandle,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let outcome = controller.lock().await.tick(handle);
            match outcome {
                TickOutcome::Ticked(_) => {}
                TickOutcome::Expired => {
                    log::debug!("ticker finished: countdown expired");
                    break;
                }
                TickOutcome::Stale => {
                    log::debug!("ticker finished: handle no longer armed");
                    break;
                }
            }
        }
    })
}
