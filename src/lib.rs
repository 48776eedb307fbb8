//! mon - simulate workstation presence.
//!
//! Runs an alternating schedule of active and idle phases. Active phases
//! glide the cursor by small random offsets and, optionally, type random
//! Base64 characters on a fixed cadence. Idle phases do nothing.
//!
//! Input, time and randomness are all passed into [`ActivitySimulator`] so a
//! run can be replayed deterministically with a [`ManualClock`] and a seeded
//! generator.

pub mod backend;
pub mod clock;
pub mod config;
pub mod domain;
pub mod motion;
pub mod simulator;

pub use backend::{DryRunDevice, EnigoDevice, InputDevice, InputError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use domain::{Action, Offset, Phase, PhaseKind, Schedule};
pub use simulator::{ActivitySimulator, PhaseReport, RunSummary, Settings};
