//! Endless road built from a fixed pool of recycled segments
//!
//! Rather than spawning geometry forever, a small window of segments
//! leapfrogs ahead of the player: once a segment's far end falls behind,
//! it jumps forward by the whole window length.

use serde::{Deserialize, Serialize};

/// Road layout tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadConfig {
    /// How many segments stay live at once
    pub segment_count: usize,
    /// Length of one segment along the run direction, meters
    pub segment_length: f32,
    /// Road width, meters
    pub road_width: f32,
    /// Distance between lane stripes along a segment, meters
    pub stripe_spacing: f32,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            segment_count: 3,
            segment_length: 50.0,
            road_width: 6.0,
            stripe_spacing: 5.0,
        }
    }
}

/// One live road segment, positioned by the z of its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadSegment {
    /// Stable pool index, useful for mapping to scene objects
    pub index: usize,
    /// Segment center along the run direction
    pub z: f32,
}

impl RoadSegment {
    pub fn start_z(&self, config: &RoadConfig) -> f32 {
        self.z - config.segment_length * 0.5
    }

    pub fn end_z(&self, config: &RoadConfig) -> f32 {
        self.z + config.segment_length * 0.5
    }
}

/// The segment pool and its leapfrog rule.
#[derive(Debug, Clone)]
pub struct RoadRecycler {
    config: RoadConfig,
    segments: Vec<RoadSegment>,
}

impl RoadRecycler {
    /// Lay out the pool starting at `origin_z` (the player's spawn).
    pub fn new(config: RoadConfig, origin_z: f32) -> Self {
        let segments = (0..config.segment_count)
            .map(|i| RoadSegment {
                index: i,
                z: origin_z + i as f32 * config.segment_length,
            })
            .collect();
        Self { config, segments }
    }

    pub fn config(&self) -> &RoadConfig {
        &self.config
    }

    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    /// Recycle segments the player has passed; returns how many moved.
    pub fn update(&mut self, player_z: f32) -> usize {
        let length = self.config.segment_length;
        let window = self.config.segment_count as f32 * length;
        let mut moved = 0;

        for segment in &mut self.segments {
            // a segment is spent once its far end is a half-length behind
            if segment.z + length * 0.5 < player_z - length * 0.5 {
                segment.z += window;
                moved += 1;
            }
        }
        moved
    }

    /// Local z offsets of lane stripes along one segment, from its start.
    pub fn stripe_offsets(&self) -> Vec<f32> {
        let length = self.config.segment_length;
        let count = (length / self.config.stripe_spacing).ceil() as usize;
        (0..count)
            .map(|i| -length * 0.5 + i as f32 * self.config.stripe_spacing)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let road = RoadRecycler::new(RoadConfig::default(), 0.0);
        let zs: Vec<f32> = road.segments().iter().map(|s| s.z).collect();
        assert_eq!(zs, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_no_recycle_while_player_is_inside_window() {
        let mut road = RoadRecycler::new(RoadConfig::default(), 0.0);
        assert_eq!(road.update(10.0), 0);
        assert_eq!(road.update(40.0), 0);
    }

    #[test]
    fn test_passed_segment_leapfrogs_forward() {
        let mut road = RoadRecycler::new(RoadConfig::default(), 0.0);

        // far end of segment 0 is at 25; it recycles once the player
        // passes 50
        assert_eq!(road.update(51.0), 1);
        assert_eq!(road.segments()[0].z, 150.0);
        // pool indices are stable
        assert_eq!(road.segments()[0].index, 0);
    }

    #[test]
    fn test_count_is_preserved_over_a_long_run() {
        let config = RoadConfig::default();
        let mut road = RoadRecycler::new(config.clone(), 0.0);

        let mut player_z = 0.0;
        for _ in 0..1000 {
            player_z += 7.0;
            road.update(player_z);
            assert_eq!(road.segments().len(), config.segment_count);

            // every segment stays within a window around the player
            for segment in road.segments() {
                assert!(segment.end_z(&config) >= player_z - config.segment_length);
                assert!(segment.start_z(&config) <= player_z + 3.0 * config.segment_length);
            }
        }
    }

    #[test]
    fn test_stripe_offsets_cover_the_segment() {
        let road = RoadRecycler::new(RoadConfig::default(), 0.0);
        let offsets = road.stripe_offsets();
        assert_eq!(offsets.len(), 10);
        assert_eq!(offsets[0], -25.0);
        assert_eq!(offsets[9], 20.0);
    }
}
