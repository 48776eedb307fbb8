//! Activity simulator.
//!
//! Walks a schedule phase by phase. Active phases repeat a single random
//! action followed by a fixed pause until the phase length has elapsed; idle
//! phases just sleep. The elapsed-time check only happens between cycles, so
//! an active phase may run past its nominal length by up to one cycle
//! (action time plus the pause).

use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info};

use crate::backend::InputDevice;
use crate::clock::Clock;
use crate::config::Config;
use crate::domain::{self, Action, Offset, Phase, PhaseKind, Schedule};
use crate::motion;

/// Tunables for active phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Allow keystrokes in addition to cursor movement.
    pub keystrokes_enabled: bool,
    /// Pause after every action.
    pub action_interval: Duration,
    /// Per-axis bound for cursor offsets.
    pub max_offset: u32,
    /// Duration of a single cursor glide.
    pub move_duration: Duration,
    /// Waypoint rate during a glide.
    pub move_fps: u32,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            keystrokes_enabled: config.keystrokes,
            action_interval: config.action_interval(),
            max_offset: config.max_offset,
            move_duration: config.move_duration(),
            move_fps: config.move_fps,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Outcome of a single phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub kind: PhaseKind,
    /// Requested length.
    pub nominal: Duration,
    /// Clock time actually spent, including any overshoot.
    pub elapsed: Duration,
    pub moves: usize,
    pub keystrokes: usize,
}

impl PhaseReport {
    fn new(phase: Phase) -> Self {
        Self {
            kind: phase.kind,
            nominal: phase.length,
            elapsed: Duration::ZERO,
            moves: 0,
            keystrokes: 0,
        }
    }

    /// Total number of actions performed.
    pub fn actions(&self) -> usize {
        self.moves + self.keystrokes
    }

    /// Time spent past the nominal length.
    pub fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.nominal)
    }
}

/// Outcome of a whole schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub phases: Vec<PhaseReport>,
}

impl RunSummary {
    pub fn total_moves(&self) -> usize {
        self.phases.iter().map(|p| p.moves).sum()
    }

    pub fn total_keystrokes(&self) -> usize {
        self.phases.iter().map(|p| p.keystrokes).sum()
    }

    pub fn elapsed(&self) -> Duration {
        self.phases.iter().map(|p| p.elapsed).sum()
    }
}

/// Drives an input device through a schedule of active and idle phases.
pub struct ActivitySimulator<D, C, R> {
    device: D,
    clock: C,
    rng: R,
    settings: Settings,
}

impl<D, C, R> ActivitySimulator<D, C, R>
where
    D: InputDevice,
    C: Clock,
    R: Rng,
{
    /// Create a simulator from its input, time and randomness capabilities.
    pub fn new(device: D, clock: C, rng: R, settings: Settings) -> Self {
        Self {
            device,
            clock,
            rng,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Run every phase of the schedule in order.
    ///
    /// Stops at the first input failure.
    pub fn run(&mut self, schedule: &Schedule) -> Result<RunSummary> {
        let total = schedule.len();
        let mut summary = RunSummary::default();

        for (index, phase) in schedule.phases().iter().enumerate() {
            info!(
                "Phase {}/{}: {} for {:?}",
                index + 1,
                total,
                phase.kind.as_str(),
                phase.length
            );

            let report = self.run_phase(*phase).with_context(|| {
                format!("Phase {}/{} ({}) aborted", index + 1, total, phase.kind.as_str())
            })?;

            info!(
                "Phase {}/{} done after {:?} ({} moves, {} keystrokes)",
                index + 1,
                total,
                report.elapsed,
                report.moves,
                report.keystrokes
            );
            summary.phases.push(report);
        }

        Ok(summary)
    }

    /// Run a single phase.
    pub fn run_phase(&mut self, phase: Phase) -> Result<PhaseReport> {
        match phase.kind {
            PhaseKind::Active => self.run_active(phase),
            PhaseKind::Idle => Ok(self.run_idle(phase)),
        }
    }

    fn run_active(&mut self, phase: Phase) -> Result<PhaseReport> {
        let mut report = PhaseReport::new(phase);
        let start = self.clock.now();

        while self.clock.elapsed_since(start) < phase.length {
            let action = self.choose_action();
            self.perform(action)?;

            match action {
                Action::Type(_) => report.keystrokes += 1,
                Action::Move(_) => report.moves += 1,
            }

            self.clock.sleep(self.settings.action_interval);
        }

        report.elapsed = self.clock.elapsed_since(start);
        if report.overshoot() > Duration::ZERO {
            debug!("Active phase overshot by {:?}", report.overshoot());
        }
        Ok(report)
    }

    fn run_idle(&mut self, phase: Phase) -> PhaseReport {
        let mut report = PhaseReport::new(phase);
        let start = self.clock.now();

        self.clock.sleep(phase.length);

        report.elapsed = self.clock.elapsed_since(start);
        report
    }

    /// Pick the next action.
    ///
    /// With keystrokes disabled this is always a cursor move and no coin is
    /// flipped.
    pub fn choose_action(&mut self) -> Action {
        if self.settings.keystrokes_enabled && self.rng.gen_bool(0.5) {
            Action::Type(domain::random_symbol(&mut self.rng))
        } else {
            Action::Move(Offset::random(&mut self.rng, self.settings.max_offset))
        }
    }

    /// Carry out one action on the device.
    pub fn perform(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Type(c) => {
                self.device.type_char(c).context("Keystroke action failed")?;
                info!("Typed: {}", c);
            }
            Action::Move(offset) => {
                let from = self
                    .device
                    .cursor_position()
                    .context("Cursor move action failed")?;
                let to = offset.apply(from);
                motion::glide(
                    &mut self.device,
                    &self.clock,
                    from,
                    to,
                    self.settings.move_duration,
                    self.settings.move_fps,
                )
                .context("Cursor move action failed")?;
                info!("Moved cursor by: ({}, {})", offset.dx, offset.dy);
            }
        }
        Ok(())
    }
}
