//! Run timing, distance, and score

use strider_core::Vec3;

/// Accumulates the presentation-facing numbers for one run attempt:
/// elapsed time, distance from the start position, and a score that
/// rewards both surviving and going fast.
#[derive(Debug, Clone)]
pub struct RunScore {
    start_position: Vec3,
    game_time: f64,
    distance: f32,
    score: i64,
}

impl RunScore {
    pub fn new(start_position: Vec3) -> Self {
        Self {
            start_position,
            game_time: 0.0,
            distance: 0.0,
            score: 0,
        }
    }

    /// Advance by `dt` at the given position and speed.
    pub fn update(&mut self, dt: f64, position: &Vec3, current_speed: f32, start_speed: f32) {
        self.game_time += dt;
        self.distance = self.start_position.distance(position);
        self.score = (self.game_time * 15.0 + ((current_speed - start_speed) * 8.0) as f64)
            .round() as i64;
    }

    pub fn game_time(&self) -> f64 {
        self.game_time
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Start over for a fresh run from `start_position`.
    pub fn reset(&mut self, start_position: Vec3) {
        *self = Self::new(start_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_accumulates() {
        let mut score = RunScore::new(Vec3::ZERO);
        for _ in 0..60 {
            score.update(1.0 / 60.0, &Vec3::ZERO, 8.0, 8.0);
        }
        assert!((score.game_time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_measured_from_start() {
        let mut score = RunScore::new(Vec3::new(0.0, 0.0, 10.0));
        score.update(0.1, &Vec3::new(0.0, 0.0, 133.4), 8.0, 8.0);
        assert!((score.distance() - 123.4).abs() < 1e-3);
    }

    #[test]
    fn test_score_formula() {
        let mut score = RunScore::new(Vec3::ZERO);
        // 10 seconds at 4 over start speed: 10*15 + 4*8 = 182
        score.update(10.0, &Vec3::ZERO, 12.0, 8.0);
        assert_eq!(score.score(), 182);
    }

    #[test]
    fn test_reset() {
        let mut score = RunScore::new(Vec3::ZERO);
        score.update(5.0, &Vec3::new(0.0, 0.0, 40.0), 12.0, 8.0);
        score.reset(Vec3::new(0.0, 0.0, 40.0));

        assert_eq!(score.game_time(), 0.0);
        assert_eq!(score.distance(), 0.0);
        assert_eq!(score.score(), 0);
    }
}
