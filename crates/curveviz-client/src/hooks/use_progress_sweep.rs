//! Interval-driven path sweep for the pose demo.

use std::cell::RefCell;
use std::rc::Rc;

use curveviz_core::{PoseDemo, SweepTick};
use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

/// Controls returned by [`use_progress_sweep`].
#[derive(Clone, PartialEq)]
pub struct SweepHandle {
    /// Restarts the sweep from 0, replacing any sweep in flight.
    pub animate: Callback<()>,
    /// Stops the sweep and releases its timer.
    pub cancel: Callback<()>,
}

type TimerSlot = Rc<RefCell<Option<(u64, Interval)>>>;

/// Owns at most one interval timer driving `demo`'s progress sweep.
///
/// Each tick advances the sweep and fires `on_change`. When the sweep
/// finishes the timer releases itself; starting a new sweep or unmounting
/// the component drops the previous timer first.
#[hook]
pub fn use_progress_sweep(demo: Rc<RefCell<PoseDemo>>, on_change: Callback<()>) -> SweepHandle {
    let slot: TimerSlot = use_mut_ref(|| None);

    {
        let slot = slot.clone();
        let demo = demo.clone();
        use_effect_with((), move |_| {
            move || {
                slot.borrow_mut().take();
                demo.borrow_mut().cancel_sweep();
            }
        });
    }

    let animate = {
        let (slot, demo, on_change) = (slot.clone(), demo.clone(), on_change.clone());
        Callback::from(move |()| {
            // Drop the old timer before the new sweep starts
            slot.borrow_mut().take();

            let (generation, interval_ms) = {
                let mut demo = demo.borrow_mut();
                (demo.animate(), demo.config().sweep_interval_ms)
            };
            on_change.emit(());

            let interval = {
                let (slot, demo, on_change) = (slot.clone(), demo.clone(), on_change.clone());
                Interval::new(interval_ms, move || {
                    let tick = {
                        let mut demo = demo.borrow_mut();
                        if demo.sweep_generation() != generation {
                            return;
                        }
                        demo.tick_sweep()
                    };
                    match tick {
                        SweepTick::Continue(_) => on_change.emit(()),
                        SweepTick::Finished(_) => {
                            on_change.emit(());
                            release_later(&slot, generation);
                        }
                        SweepTick::Idle => release_later(&slot, generation),
                    }
                })
            };
            *slot.borrow_mut() = Some((generation, interval));
        })
    };

    let cancel = {
        let (slot, demo) = (slot.clone(), demo.clone());
        Callback::from(move |()| {
            slot.borrow_mut().take();
            demo.borrow_mut().cancel_sweep();
        })
    };

    SweepHandle { animate, cancel }
}

/// Drops the timer of `generation` once the current tick has returned.
fn release_later(slot: &TimerSlot, generation: u64) {
    let slot = slot.clone();
    Timeout::new(0, move || {
        let mut slot = slot.borrow_mut();
        if slot.as_ref().is_some_and(|(owner, _)| *owner == generation) {
            slot.take();
        }
    })
    .forget();
}
