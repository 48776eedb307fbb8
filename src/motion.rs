//! Smooth cursor movement.
//!
//! Enigo only knows how to jump the cursor. A glide is built from eased
//! waypoints stepped through at a fixed rate, sleeping on the injected clock
//! between steps.

use std::time::Duration;

use tracing::{debug, trace};

use crate::backend::{InputDevice, InputError};
use crate::clock::Clock;

/// Default waypoint rate for glides.
pub const DEFAULT_FPS: u32 = 60;

/// Cubic ease-in-out: smooth acceleration and deceleration.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Number of waypoints for a glide of `duration` at `fps` (at least one).
pub fn step_count(duration: Duration, fps: u32) -> u32 {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let steps = (duration.as_nanos() * u128::from(fps)).div_ceil(NANOS_PER_SEC);
    u32::try_from(steps).unwrap_or(u32::MAX).max(1)
}

/// Absolute positions from `from` (exclusive) to `to` (inclusive).
///
/// Yielded lazily; the last waypoint is always exactly `to`.
#[allow(clippy::cast_possible_truncation)]
pub fn waypoints(
    from: (i32, i32),
    to: (i32, i32),
    steps: u32,
) -> impl ExactSizeIterator<Item = (i32, i32)> {
    let steps = steps.max(1);
    let dx = f64::from(to.0) - f64::from(from.0);
    let dy = f64::from(to.1) - f64::from(from.1);

    (0..steps).map(move |i| {
        let i = i + 1;
        if i == steps {
            return to;
        }
        let progress = ease_in_out(f64::from(i) / f64::from(steps));
        (
            (f64::from(from.0) + dx * progress).round() as i32,
            (f64::from(from.1) + dy * progress).round() as i32,
        )
    })
}

/// Glide the cursor from `from` to `to` over roughly `duration`.
pub fn glide<D, C>(
    device: &mut D,
    clock: &C,
    from: (i32, i32),
    to: (i32, i32),
    duration: Duration,
    fps: u32,
) -> Result<(), InputError>
where
    D: InputDevice + ?Sized,
    C: Clock + ?Sized,
{
    let steps = step_count(duration, fps);
    let delay = duration / steps;
    debug!(
        "Gliding cursor {:?} -> {:?} in {} steps over {:?}",
        from, to, steps, duration
    );

    for (x, y) in waypoints(from, to, steps) {
        trace!("Waypoint ({}, {})", x, y);
        device.move_cursor_to(x, y)?;
        clock.sleep(delay);
    }

    Ok(())
}
