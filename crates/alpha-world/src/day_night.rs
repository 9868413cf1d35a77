//! Day/night clock and sun intensity interpolation

use tracing::debug;

use crate::error::WorldError;

/// Hour clock that wraps once per day.
///
/// Only built through [`TimeOfDay::new`], so the day always has at least one
/// hour and a positive cycle length.
#[derive(Clone, Debug)]
pub struct TimeOfDay {
    /// Current time in hours (0.0 up to `hours_per_day`)
    time_hours: f32,
    hours_per_day: u32,
    /// Duration of a full day cycle in real seconds
    cycle_duration: f32,
    /// Whether the cycle is paused
    pub paused: bool,
}

impl TimeOfDay {
    /// Create with a specific day length and starting time
    pub fn new(hours_per_day: u32, cycle_duration: f32, start_time: f32) -> Result<Self, WorldError> {
        if hours_per_day == 0 {
            return Err(WorldError::NoHours);
        }
        if !(cycle_duration > 0.0) {
            return Err(WorldError::NonPositiveCycle(cycle_duration));
        }

        let mut tod = Self {
            time_hours: 0.0,
            hours_per_day,
            cycle_duration,
            paused: false,
        };
        tod.set_time(start_time);
        Ok(tod)
    }

    pub fn hours_per_day(&self) -> u32 {
        self.hours_per_day
    }

    pub fn time_hours(&self) -> f32 {
        self.time_hours
    }

    fn day_length(&self) -> f32 {
        self.hours_per_day as f32
    }

    /// Update the time of day based on delta time
    pub fn update(&mut self, delta_seconds: f32) {
        if self.paused {
            return;
        }

        let before = self.current_hour();

        // Convert real seconds to game hours
        let hours_per_second = self.day_length() / self.cycle_duration;
        self.time_hours += delta_seconds * hours_per_second;
        self.time_hours = self.time_hours.rem_euclid(self.day_length());

        if self.current_hour() != before {
            debug!(hour = self.current_hour(), "Hour changed");
        }
    }

    /// Set the time directly
    pub fn set_time(&mut self, hours: f32) {
        self.time_hours = hours.rem_euclid(self.day_length());
    }

    /// Index of the hour in progress
    pub fn current_hour(&self) -> usize {
        // rem_euclid can round up to exactly the day length
        (self.time_hours.floor() as usize) % self.hours_per_day as usize
    }

    /// Index of the following hour, wrapping at midnight
    pub fn next_hour(&self) -> usize {
        (self.current_hour() + 1) % self.hours_per_day as usize
    }

    /// Progress through the current hour in [0, 1)
    pub fn hour_fraction(&self) -> f32 {
        self.time_hours.fract()
    }

    /// Get formatted time string (HH:MM)
    pub fn formatted_time(&self) -> String {
        let hours = self.current_hour();
        let minutes = (self.hour_fraction() * 60.0) as u32;
        format!("{:02}:{:02}", hours, minutes)
    }
}

/// Sun light whose intensity is keyed per hour
#[derive(Clone, Debug)]
pub struct SunLight {
    intensities: Vec<f32>,
}

impl SunLight {
    /// The table needs exactly one entry per hour of the day
    pub fn new(intensities: Vec<f32>, hours_per_day: u32) -> Result<Self, WorldError> {
        if intensities.len() != hours_per_day as usize {
            return Err(WorldError::IntensityCountMismatch {
                expected: hours_per_day as usize,
                found: intensities.len(),
            });
        }
        if intensities.is_empty() {
            return Err(WorldError::NoHours);
        }
        Ok(Self { intensities })
    }

    /// Intensity blended between the current and next hour
    pub fn intensity(&self, time: &TimeOfDay) -> f32 {
        let len = self.intensities.len();
        let current = self.intensities[time.current_hour() % len];
        let target = self.intensities[time.next_hour() % len];
        lerp(current, target, time.hour_fraction())
    }

}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
