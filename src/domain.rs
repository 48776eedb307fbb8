//! Domain types for presence simulation.

use std::sync::LazyLock;
use std::time::Duration;

use base64::alphabet;
use rand::Rng;
use rand::seq::SliceRandom;

/// Symbols used for simulated keystrokes: the standard Base64 alphabet.
static SYMBOLS: LazyLock<Vec<char>> =
    LazyLock::new(|| alphabet::STANDARD.as_str().chars().collect());

/// Get the keystroke alphabet (`A-Z a-z 0-9 + /`).
pub fn symbols() -> &'static [char] {
    &SYMBOLS
}

/// Check whether a character belongs to the keystroke alphabet.
pub fn is_symbol(c: char) -> bool {
    symbols().contains(&c)
}

/// Kind of a scheduled phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Cursor movement and (optionally) keystrokes on a fixed cadence.
    Active,
    /// Pure waiting, no input.
    Idle,
}

impl PhaseKind {
    /// Even positions are active, odd positions idle.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Active
        } else {
            Self::Idle
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
        }
    }
}

/// A single scheduled phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub length: Duration,
}

impl Phase {
    /// Create a phase of `minutes` length.
    pub fn from_minutes(kind: PhaseKind, minutes: u64) -> Self {
        Self {
            kind,
            length: Duration::from_secs(minutes.saturating_mul(60)),
        }
    }
}

/// Ordered phases built from a list of durations in minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    phases: Vec<Phase>,
}

impl Schedule {
    /// Build a schedule, alternating active/idle starting with active.
    pub fn from_minutes(durations: &[u64]) -> Self {
        let phases = durations
            .iter()
            .enumerate()
            .map(|(i, &minutes)| Phase::from_minutes(PhaseKind::for_index(i), minutes))
            .collect();
        Self { phases }
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Sum of all nominal phase lengths.
    pub fn nominal_length(&self) -> Duration {
        self.phases.iter().map(|p| p.length).sum()
    }
}

/// Cursor displacement relative to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    /// Draw a per-axis offset uniformly from `[-max, max]`.
    pub fn random<R: Rng>(rng: &mut R, max: u32) -> Self {
        let bound = i32::try_from(max).unwrap_or(i32::MAX);
        Self {
            dx: rng.gen_range(-bound..=bound),
            dy: rng.gen_range(-bound..=bound),
        }
    }

    /// Apply this offset to a position.
    pub fn apply(self, (x, y): (i32, i32)) -> (i32, i32) {
        (x.saturating_add(self.dx), y.saturating_add(self.dy))
    }
}

/// One simulated input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Inject a single keystroke.
    Type(char),
    /// Glide the cursor by an offset.
    Move(Offset),
}

/// Pick a random symbol from the keystroke alphabet.
pub fn random_symbol<R: Rng>(rng: &mut R) -> char {
    // The alphabet is never empty, 'A' is unreachable
    symbols().choose(rng).copied().unwrap_or('A')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_symbol_alphabet() {
        let symbols = symbols();
        assert_eq!(symbols.len(), 64);
        assert_eq!(symbols[0], 'A');
        assert_eq!(symbols[26], 'a');
        assert_eq!(symbols[52], '0');
        assert_eq!(symbols[62], '+');
        assert_eq!(symbols[63], '/');
        assert!(is_symbol('Z'));
        assert!(!is_symbol('='));
        assert!(!is_symbol('-'));
    }

    #[test]
    fn test_phase_kind_alternates() {
        assert_eq!(PhaseKind::for_index(0), PhaseKind::Active);
        assert_eq!(PhaseKind::for_index(1), PhaseKind::Idle);
        assert_eq!(PhaseKind::for_index(2), PhaseKind::Active);
        assert_eq!(PhaseKind::for_index(7), PhaseKind::Idle);
    }

    #[test]
    fn test_schedule_from_minutes() {
        let schedule = Schedule::from_minutes(&[30, 10, 20]);
        assert_eq!(schedule.len(), 3);

        let phases = schedule.phases();
        assert_eq!(phases[0].kind, PhaseKind::Active);
        assert_eq!(phases[0].length, Duration::from_secs(1800));
        assert_eq!(phases[1].kind, PhaseKind::Idle);
        assert_eq!(phases[1].length, Duration::from_secs(600));
        assert_eq!(phases[2].kind, PhaseKind::Active);
        assert_eq!(schedule.nominal_length(), Duration::from_secs(3600));
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::from_minutes(&[]);
        assert!(schedule.is_empty());
        assert_eq!(schedule.nominal_length(), Duration::ZERO);
    }

    #[test]
    fn test_offset_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let offset = Offset::random(&mut rng, 50);
            assert!((-50..=50).contains(&offset.dx));
            assert!((-50..=50).contains(&offset.dy));
        }
    }

    #[test]
    fn test_zero_offset_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Offset::random(&mut rng, 0), Offset { dx: 0, dy: 0 });
    }

    #[test]
    fn test_offset_apply() {
        let offset = Offset { dx: -5, dy: 12 };
        assert_eq!(offset.apply((100, 100)), (95, 112));
        assert_eq!(offset.apply((i32::MIN, i32::MAX)), (i32::MIN, i32::MAX));
    }

    #[test]
    fn test_random_symbol_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(is_symbol(random_symbol(&mut rng)));
        }
    }
}
