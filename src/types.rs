use crate::error::{Result, TrainingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Short tag used by the sensor packages (`RUN`, `WLK`, `SWM`).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Name printed in the report line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional parameters a package of this kind carries.
    pub const fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| TrainingError::UnsupportedWorkoutType(s.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fields shared by every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes reported by the sensor.
    pub action: u32,
    /// Hours, strictly positive.
    pub duration: f64,
    /// Kilograms, strictly positive.
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutRecord {
    Running(Session),
    Walking {
        session: Session,
        /// Centimeters.
        height: f64,
    },
    Swimming {
        session: Session,
        /// Meters.
        length_pool: f64,
        count_pool: u32,
    },
}

impl WorkoutRecord {
    pub fn running(action: u32, duration: f64, weight: f64) -> Result<Self> {
        let session = Session::new(WorkoutKind::Running, action, duration, weight)?;
        Ok(Self::Running(session))
    }

    pub fn walking(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        let session = Session::new(WorkoutKind::Walking, action, duration, weight)?;
        check_divisor(WorkoutKind::Walking, "height", height)?;
        Ok(Self::Walking { session, height })
    }

    pub fn swimming(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self> {
        let session = Session::new(WorkoutKind::Swimming, action, duration, weight)?;
        check_positive(WorkoutKind::Swimming, "pool length", length_pool)?;
        Ok(Self::Swimming {
            session,
            length_pool,
            count_pool,
        })
    }

    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Walking { .. } => WorkoutKind::Walking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub const fn session(&self) -> &Session {
        match self {
            Self::Running(session)
            | Self::Walking { session, .. }
            | Self::Swimming { session, .. } => session,
        }
    }
}

impl Session {
    fn new(kind: WorkoutKind, action: u32, duration: f64, weight: f64) -> Result<Self> {
        check_divisor(kind, "duration", duration)?;
        check_positive(kind, "weight", weight)?;
        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

/// Zero is reported as a division by zero, anything else non-positive as invalid.
fn check_divisor(kind: WorkoutKind, field: &'static str, value: f64) -> Result<()> {
    if value == 0.0 {
        return Err(TrainingError::DivisionByZero(field));
    }
    check_positive(kind, field, value)
}

fn check_positive(kind: WorkoutKind, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TrainingError::invalid(
            kind.tag(),
            format!("{field} must be a positive number, got {value}"),
        ));
    }
    Ok(())
}

/// Computed report for one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub training_type: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

/// Raw sensor package: a workout tag followed by positional readings.
///
/// Deserializes from `["RUN", [15000, 1, 75]]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(String, Vec<f64>)")]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}

impl From<(String, Vec<f64>)> for Package {
    fn from((workout_type, data): (String, Vec<f64>)) -> Self {
        Self { workout_type, data }
    }
}
