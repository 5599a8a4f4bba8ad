//! Backdrop catalogue and the scrolling background cycle.
//!
//! While travelling, the backdrop texture offset creeps forward every frame.
//! Once it passes the loop threshold the next backdrop in the fixed rotation
//! takes over and a [`BackdropChanged`] event with
//! [`BackdropChangeCause::Looped`] tells the rest of the showcase to run the
//! loop sequence. The manual "next" control does the same with
//! [`BackdropChangeCause::Manual`].

use bevy::prelude::*;

use crate::controls::NextBackdropRequested;
use crate::params::ShowcaseParams;

/// One entry of the backdrop rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub name: &'static str,
    /// Image path relative to the asset root.
    pub image: &'static str,
}

/// Fixed backdrop rotation, in display order.
pub const BACKDROPS: [Backdrop; 7] = [
    Backdrop { name: "Jungle", image: "images/jungle.jpg" },
    Backdrop { name: "Winter", image: "images/winter.jpg" },
    Backdrop { name: "Mountains", image: "images/mountains.jpg" },
    Backdrop { name: "Sea", image: "images/sea.jpg" },
    Backdrop { name: "Night", image: "images/night.jpg" },
    Backdrop { name: "Grass", image: "images/grass.jpg" },
    Backdrop { name: "Sand", image: "images/sand.jpg" },
];

/// The textured plane behind the road. Spawned by the renderer, despawned
/// on loop and when leaving travel mode.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct BackdropPlane;

/// Current position in the backdrop rotation and its texture offset.
///
/// `index` is always in `0..BACKDROPS.len()` and survives returning to the
/// selection screen. `active` is only true in travel mode.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct BackgroundCycle {
    index: usize,
    pub offset: f32,
    pub active: bool,
}

impl BackgroundCycle {
    pub fn with_index(index: usize) -> Self {
        Self {
            index: index % BACKDROPS.len(),
            ..Default::default()
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Backdrop {
        BACKDROPS[self.index]
    }

    /// Move to the next backdrop (wrapping) with a fresh texture offset.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % BACKDROPS.len();
        self.offset = 0.0;
        self.index
    }

    /// Scroll the texture by `step`. Returns `true` when the offset passed
    /// `threshold` and the cycle advanced to the next backdrop.
    pub fn scroll(&mut self, step: f32, threshold: f32) -> bool {
        self.offset += step;
        if self.offset > threshold {
            self.advance();
            return true;
        }
        false
    }
}

/// Why the backdrop changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropChangeCause {
    /// Travel mode started; the current backdrop is being set up.
    Entered,
    /// The visitor pressed "next".
    Manual,
    /// The texture offset passed the loop threshold.
    Looped,
}

impl BackdropChangeCause {
    /// Manual and looped changes replay the vehicle exit/re-enter sequence.
    pub fn runs_loop_sequence(self) -> bool {
        matches!(self, BackdropChangeCause::Manual | BackdropChangeCause::Looped)
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropChanged {
    pub index: usize,
    pub cause: BackdropChangeCause,
}

impl BackdropChanged {
    pub fn backdrop(&self) -> Backdrop {
        BACKDROPS[self.index]
    }
}

// =============================================================================
// Systems
// =============================================================================

/// `OnEnter(Traveling)`: start scrolling the current backdrop.
pub fn activate_backdrop(
    mut cycle: ResMut<BackgroundCycle>,
    mut changed: EventWriter<BackdropChanged>,
) {
    cycle.active = true;
    cycle.offset = 0.0;
    info!("Backdrop: {}", cycle.current().name);
    changed.send(BackdropChanged {
        index: cycle.index(),
        cause: BackdropChangeCause::Entered,
    });
}

/// `OnExit(Traveling)`: stop scrolling; the index is kept for next time.
pub fn deactivate_backdrop(mut cycle: ResMut<BackgroundCycle>) {
    cycle.active = false;
    cycle.offset = 0.0;
}

/// Per frame: advance the texture offset and loop when it passes the
/// threshold.
pub fn scroll_backdrop(
    params: Res<ShowcaseParams>,
    mut cycle: ResMut<BackgroundCycle>,
    mut changed: EventWriter<BackdropChanged>,
) {
    if !cycle.active {
        return;
    }
    if cycle.scroll(params.backdrop_scroll_step, params.backdrop_loop_threshold) {
        info!("Backdrop looped to {}", cycle.current().name);
        changed.send(BackdropChanged {
            index: cycle.index(),
            cause: BackdropChangeCause::Looped,
        });
    }
}

/// Handles the "next backdrop" control.
pub fn advance_backdrop_on_request(
    mut requests: EventReader<NextBackdropRequested>,
    mut cycle: ResMut<BackgroundCycle>,
    mut changed: EventWriter<BackdropChanged>,
) {
    for _ in requests.read() {
        if !cycle.active {
            continue;
        }
        cycle.advance();
        info!("Backdrop advanced to {}", cycle.current().name);
        changed.send(BackdropChanged {
            index: cycle.index(),
            cause: BackdropChangeCause::Manual,
        });
    }
}
