//! The goal-projection engine.
//!
//! Pure functions over calendar dates and one-decimal readings. Every entry
//! point takes `today` explicitly so callers (and tests) control the clock;
//! nothing in this module reads wall-clock time or touches storage.
//!
//! Canonical trajectory convention: month 0 is the current snapshot and is
//! never stored as a checkpoint; stored monthly checkpoints run from month 1
//! to the month containing the target date.

mod achievement;
mod body_composition;
mod interpolator;
mod progress;

pub use achievement::is_achieved;
pub use body_composition::{
    compute_body_composition_trajectory, monthly_goals_from_projection, BodyCompositionParams,
    BodyProjection,
};
pub use interpolator::{compute_linear_trajectory, Trajectory};
pub use progress::apply_progress_update;

/// Rounds to one decimal place, the precision every stored projection value
/// carries.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round1;

    #[test]
    fn round1_rounds_half_away_from_zero() {
        assert_eq!(round1(29.387755), 29.4);
        assert_eq!(round1(80.0), 80.0);
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
    }
}
