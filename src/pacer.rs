//! The autoplay pacer.
//!
//! A self-correcting scheduler that repeatedly steps a shared [`World`] at a
//! target interval, subtracting each step's own cost from the next wait so
//! the tick rate stays close to the target even when stepping is slow.

use crate::{
    rules::{Life, Rule},
    world::{Diff, World},
};
use log::{debug, trace};
use std::{cell::RefCell, cmp, rc::Rc, time::Duration};
use tokio::{
    sync::{mpsc, watch},
    task,
    time::{self, Instant},
};

/// The floor on the wait between ticks.
///
/// Guarantees forward progress and keeps the loop cooperative even when a
/// step takes longer than the target interval.
const MIN_WAIT: Duration = Duration::from_millis(1);

/// What one autoplay tick produced.
#[derive(Clone, Debug)]
pub struct Tick {
    /// The generation counter after the step.
    pub generation: u64,
    /// The cells that changed in the step.
    pub diff: Diff,
    /// Wall-clock cost of the step itself.
    pub elapsed: Duration,
    /// Achieved rate in generations per second, for display.
    ///
    /// Never claims more than the configured target rate, even when a step
    /// happened to run faster.
    pub rate: u32,
}

/// Drives a shared [`World`] at a target interval while running.
///
/// The pacer is a two-state machine, idle or running; [`start`](Self::start)
/// and [`stop`](Self::stop) are both idempotent. Ticks are delivered to the
/// receiver returned by [`new`](Self::new); the same receiver keeps working
/// across stop/start cycles.
///
/// The world is shared through `Rc<RefCell<_>>` and the tick loop runs as a
/// local task, so everything stays on one thread: mutations made between
/// ticks (toggles, stamps) are always visible to the next tick, and `stop`
/// takes effect synchronously — the stop signal is checked before the timer,
/// so once `stop` returns, no previously scheduled tick can run.
///
/// ```no_run
/// use lifediff::{Config, Pacer};
/// use std::{cell::RefCell, rc::Rc, time::Duration};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), lifediff::Error> {
/// let world = Rc::new(RefCell::new(Config::new(64, 64).world()?));
/// let (mut pacer, mut ticks) = Pacer::new(Rc::clone(&world));
/// tokio::task::LocalSet::new()
///     .run_until(async move {
///         pacer.start(Duration::from_millis(100));
///         while let Some(tick) = ticks.recv().await {
///             println!("gen {}: {} cells changed", tick.generation, tick.diff.len());
///         }
///     })
///     .await;
/// # Ok(())
/// # }
/// ```
pub struct Pacer<R: Rule + 'static = Life> {
    world: Rc<RefCell<World<R>>>,
    reports: mpsc::UnboundedSender<Tick>,
    /// The cancellation handle of the running tick loop; `None` while idle.
    stop: Option<watch::Sender<bool>>,
}

impl<R: Rule + 'static> Pacer<R> {
    /// Creates an idle pacer for `world`, along with the receiving end of
    /// its tick reports.
    pub fn new(world: Rc<RefCell<World<R>>>) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (reports, receiver) = mpsc::unbounded_channel();
        (
            Pacer {
                world,
                reports,
                stop: None,
            },
            receiver,
        )
    }

    /// Whether the tick loop is running.
    pub fn is_running(&self) -> bool {
        self.stop.is_some()
    }

    /// Starts the tick loop with the given target interval, scheduling the
    /// first tick one interval from now. A no-op while already running.
    ///
    /// # Panics
    ///
    /// Panics if called outside a [`task::LocalSet`] or a local runtime
    /// context, since the tick loop is spawned with [`task::spawn_local`].
    pub fn start(&mut self, target: Duration) {
        if self.stop.is_some() {
            return;
        }
        let (stop, mut stopped) = watch::channel(false);
        let world = Rc::clone(&self.world);
        let reports = self.reports.clone();
        task::spawn_local(async move {
            let mut wait = target;
            loop {
                tokio::select! {
                    // Check the stop signal before the timer, so a cancelled
                    // tick never fires even if its deadline has passed.
                    biased;
                    _ = stopped.changed() => break,
                    _ = time::sleep(wait) => {
                        let started = Instant::now();
                        let (diff, generation) = {
                            let mut world = world.borrow_mut();
                            let diff = world.step();
                            (diff, world.generation())
                        };
                        let elapsed = started.elapsed();
                        wait = wait_after(target, elapsed);
                        trace!("tick took {elapsed:?}, next in {wait:?}");
                        let tick = Tick {
                            generation,
                            diff,
                            elapsed,
                            rate: displayed_rate(target, elapsed),
                        };
                        if reports.send(tick).is_err() {
                            // Nobody is listening anymore.
                            break;
                        }
                    }
                }
            }
        });
        self.stop = Some(stop);
        debug!("autoplay started, target interval {target:?}");
    }

    /// Stops the tick loop and cancels any pending tick. A no-op while idle.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(true);
            debug!("autoplay stopped");
        }
    }
}

/// A dropped pacer cancels its tick loop.
impl<R: Rule + 'static> Drop for Pacer<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// How long to wait before the next tick, after a step that took `elapsed`:
/// `max(MIN_WAIT, target − elapsed)`.
fn wait_after(target: Duration, elapsed: Duration) -> Duration {
    cmp::max(MIN_WAIT, target.saturating_sub(elapsed))
}

/// The rate to display for a step that took `elapsed`: the measured rate,
/// capped at the configured target rate.
fn displayed_rate(target: Duration, elapsed: Duration) -> u32 {
    cmp::min(rate(elapsed), rate(target))
}

/// Rounded generations per second for one interval.
///
/// A zero interval saturates instead of dividing by zero; callers cap the
/// result with [`displayed_rate`].
fn rate(interval: Duration) -> u32 {
    (1.0 / interval.as_secs_f64()).round() as u32
}
