//! Distance, speed and calorie formulas for each workout kind.
//!
//! Every coefficient here is empirical and fixed.

use crate::error::{Result, TrainingError};
use crate::types::{Session, WorkoutRecord};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Meters covered by one step.
pub const LEN_STEP: f64 = 0.65;
/// Meters covered by one swimming stroke.
pub const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Length of one action unit in meters.
pub const fn step_length(record: &WorkoutRecord) -> f64 {
    match record {
        WorkoutRecord::Running(_) | WorkoutRecord::Walking { .. } => LEN_STEP,
        WorkoutRecord::Swimming { .. } => LEN_STROKE,
    }
}

/// Distance in km derived from the action count.
pub fn distance(record: &WorkoutRecord) -> f64 {
    f64::from(record.session().action) * step_length(record) / M_IN_KM
}

/// Mean speed in km/h.
///
/// Swimming speed comes from the pool geometry and ignores the stroke count.
pub fn mean_speed(record: &WorkoutRecord) -> Result<f64> {
    let duration = nonzero(record.session().duration, "duration")?;
    let speed = match record {
        WorkoutRecord::Running(_) | WorkoutRecord::Walking { .. } => distance(record) / duration,
        WorkoutRecord::Swimming {
            length_pool,
            count_pool,
            ..
        } => length_pool * f64::from(*count_pool) / M_IN_KM / duration,
    };
    Ok(speed)
}

/// Calories burned over the whole session.
pub fn spent_calories(record: &WorkoutRecord) -> Result<f64> {
    let speed = mean_speed(record)?;
    let calories = match record {
        WorkoutRecord::Running(Session {
            duration, weight, ..
        }) => {
            (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight / M_IN_KM
                * (duration * MIN_IN_H)
        }
        WorkoutRecord::Walking {
            session: Session {
                duration, weight, ..
            },
            height,
        } => {
            // Floor division of speed² by height is deliberate; it zeroes the
            // term for any realistic walking speed.
            let ratio = floor_div(speed.powi(2), nonzero(*height, "height")?);
            (WLK_WEIGHT_MULTIPLIER * weight + ratio * WLK_SPEED_HEIGHT_MULTIPLIER * weight)
                * duration
                * MIN_IN_H
        }
        WorkoutRecord::Swimming {
            session: Session { weight, .. },
            ..
        } => (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * weight,
    };
    Ok(calories)
}

/// Floor division of two floats.
///
/// Goes through `fmod` first, so results match the usual `a // b` on
/// doubles even where `(a / b).floor()` would round differently.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}

fn nonzero(value: f64, field: &'static str) -> Result<f64> {
    if value == 0.0 {
        Err(TrainingError::DivisionByZero(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_running_calories_formula() {
        for (action, duration, weight) in [(15000, 1.0, 75.0), (8000, 0.75, 62.5), (500, 2.0, 90.0)]
        {
            let rec = WorkoutRecord::running(action, duration, weight).unwrap();
            let v = mean_speed(&rec).unwrap();
            let expected = ((18.0 * v - 20.0) * weight / 1000.0) * (duration * 60.0);
            assert!(approx(spent_calories(&rec).unwrap(), expected));
        }
    }

    #[test]
    fn test_swimming_uses_stroke_length() {
        let swim = WorkoutRecord::swimming(1000, 1.0, 80.0, 25.0, 40).unwrap();
        let run = WorkoutRecord::running(1000, 1.0, 80.0).unwrap();
        assert!(approx(distance(&swim), 1.38));
        assert!(approx(distance(&run), 0.65));
    }

    #[test]
    fn test_swimming_speed_ignores_action_count() {
        let few = WorkoutRecord::swimming(10, 1.0, 80.0, 25.0, 40).unwrap();
        let many = WorkoutRecord::swimming(10_000, 1.0, 80.0, 25.0, 40).unwrap();
        assert!(approx(mean_speed(&few).unwrap(), 1.0));
        assert!(approx(mean_speed(&many).unwrap(), 1.0));

        let no_laps = WorkoutRecord::swimming(720, 0.5, 80.0, 50.0, 0).unwrap();
        assert!(approx(mean_speed(&no_laps).unwrap(), 0.0));
    }

    #[test]
    fn test_walking_uses_floor_division() {
        // 2.5 km/h: 6.25 // 180 == 0, so only the weight term remains.
        let action = 2500.0 / LEN_STEP;
        let rec = WorkoutRecord::walking(action.round() as u32, 1.0, 75.0, 180.0).unwrap();
        let expected = 0.035 * 75.0 * 60.0;
        assert!(approx(spent_calories(&rec).unwrap(), expected));
    }

    #[test]
    fn test_walking_fast_enough_to_count_height_term() {
        // 20 km/h over 1 h: 400 // 180 == 2.
        let rec = WorkoutRecord::walking(20_000, 0.65, 70.0, 180.0).unwrap();
        let v = mean_speed(&rec).unwrap();
        assert!(approx(v, 20.0));
        let expected = (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 0.65 * 60.0;
        assert!(approx(spent_calories(&rec).unwrap(), expected));
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(6.25, 180.0), 0.0);
        assert_eq!(floor_div(400.0, 180.0), 2.0);
        assert_eq!(floor_div(7.5, 2.5), 3.0);
        assert_eq!(floor_div(-1.0, 3.0), -1.0);
        assert_eq!(floor_div(1.0, 0.1), 9.0);
    }

    #[test]
    fn test_zero_duration_surfaces_error() {
        let rec = WorkoutRecord::Running(Session {
            action: 100,
            duration: 0.0,
            weight: 70.0,
        });
        assert_eq!(mean_speed(&rec), Err(TrainingError::DivisionByZero("duration")));
        assert_eq!(
            spent_calories(&rec),
            Err(TrainingError::DivisionByZero("duration"))
        );
    }
}
