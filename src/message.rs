use crate::error::Result;
use crate::training::{distance, mean_speed, spent_calories};
use crate::types::{Summary, WorkoutRecord};
use std::fmt;

impl Summary {
    /// Run every formula for `record` once and collect the results.
    pub fn from_record(record: &WorkoutRecord) -> Result<Self> {
        Ok(Self {
            training_type: record.kind().label(),
            duration: record.session().duration,
            distance: distance(record),
            speed: mean_speed(record)?,
            calories: spent_calories(record)?,
        })
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_layout() {
        let s = Summary {
            training_type: "Running",
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        };
        assert_eq!(
            s.message(),
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories: 699.750."
        );
    }

    #[test]
    fn test_message_never_uses_exponent() {
        let s = Summary {
            training_type: "Swimming",
            duration: 1e-7,
            distance: 1.5e7,
            speed: 0.0,
            calories: 12_345_678.9,
        };
        let msg = s.message();
        assert!(msg.contains("Duration: 0.000 h"));
        assert!(msg.contains("Distance: 15000000.000 km"));
        assert!(msg.contains("Calories: 12345678.900."));
    }

    #[test]
    fn test_swimming_summary_from_record() {
        let rec = WorkoutRecord::swimming(720, 1.0, 80.0, 25.0, 40).unwrap();
        let s = Summary::from_record(&rec).unwrap();
        assert_eq!(s.training_type, "Swimming");
        assert_eq!(
            s.message(),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories: 336.000."
        );
    }
}
