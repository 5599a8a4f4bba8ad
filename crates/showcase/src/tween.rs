//! Time-based linear tweens with cancellable handles.
//!
//! A [`Tween`] is sampled against the elapsed app time rather than stepped
//! per frame, so its value depends only on how much time has passed since it
//! started. [`VehicleTweens`] holds at most one in-flight tween per
//! [`TweenSlot`]; starting a tween in an occupied slot supersedes the old one.

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;

/// Linear interpolation from `from` to `to` over `duration`, starting at
/// app time `started_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub started_at: Duration,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, started_at: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
        }
    }

    /// Fraction of the duration elapsed at `now`, clamped to [0, 1].
    /// A zero duration is complete immediately.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Value at `now`. Exactly `to` once the duration has elapsed.
    pub fn sample(&self, now: Duration) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * progress
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// What a vehicle tween animates. One tween per slot may be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenSlot {
    /// Hidden vehicle sliding off to the left before a backdrop change.
    VehicleExit,
    /// Vehicle driving across the new backdrop from left to right.
    VehicleCross,
}

/// Continuation run when a tween completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenFinish {
    Nothing,
    /// Show the vehicle again and start the drive-across.
    RevealAndCross,
}

/// Identifies one started tween; stale handles never cancel a newer tween
/// in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenHandle {
    pub slot: TweenSlot,
    id: u64,
}

#[derive(Debug, Clone, Copy)]
struct ActiveTween {
    id: u64,
    tween: Tween,
    finish: TweenFinish,
}

/// Fired when a tween reaches its target (not when it is cancelled).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenFinished {
    pub handle: TweenHandle,
    pub finish: TweenFinish,
}

/// In-flight vehicle tweens, keyed by slot.
#[derive(Resource, Debug, Default)]
pub struct VehicleTweens {
    next_id: u64,
    active: HashMap<TweenSlot, ActiveTween>,
}

impl VehicleTweens {
    /// Start `tween` in `slot`, superseding whatever was running there.
    pub fn start(&mut self, slot: TweenSlot, tween: Tween, finish: TweenFinish) -> TweenHandle {
        self.next_id += 1;
        let id = self.next_id;
        if self
            .active
            .insert(slot, ActiveTween { id, tween, finish })
            .is_some()
        {
            debug!("Tween in {:?} superseded", slot);
        }
        TweenHandle { slot, id }
    }

    /// Cancel the tween behind `handle`. Returns `false` if it already
    /// finished, was cancelled, or was superseded.
    pub fn cancel(&mut self, handle: TweenHandle) -> bool {
        match self.active.get(&handle.slot) {
            Some(active) if active.id == handle.id => {
                self.active.remove(&handle.slot);
                true
            }
            _ => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.active.clear();
    }

    pub fn is_active(&self, handle: TweenHandle) -> bool {
        self.active
            .get(&handle.slot)
            .is_some_and(|active| active.id == handle.id)
    }

    pub fn get(&self, slot: TweenSlot) -> Option<&Tween> {
        self.active.get(&slot).map(|active| &active.tween)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Current value of every in-flight tween at `now`.
    pub fn samples(&self, now: Duration) -> impl Iterator<Item = (TweenSlot, f32)> + '_ {
        self.active
            .iter()
            .map(move |(slot, active)| (*slot, active.tween.sample(now)))
    }

    /// Remove every tween that has reached its target at `now` and return
    /// their handles and continuations.
    pub fn retire_finished(&mut self, now: Duration) -> Vec<TweenFinished> {
        let finished: Vec<TweenFinished> = self
            .active
            .iter()
            .filter(|(_, active)| active.tween.is_finished(now))
            .map(|(slot, active)| TweenFinished {
                handle: TweenHandle {
                    slot: *slot,
                    id: active.id,
                },
                finish: active.finish,
            })
            .collect();
        for done in &finished {
            self.active.remove(&done.handle.slot);
        }
        finished
    }
}
