//! HUD text formatting

/// Format elapsed seconds as `mm:ss.cc`, growing to `hh:mm:ss.cc` once
/// hours are on the clock.
pub fn format_timer(seconds: f64) -> String {
    let total_centis = (seconds.max(0.0) * 100.0).round() as u64;
    let centis = total_centis % 100;
    let secs = (total_centis / 100) % 60;
    let mins = (total_centis / 6_000) % 60;
    let hours = total_centis / 360_000;

    if hours > 0 {
        format!("{hours:02}:{mins:02}:{secs:02}.{centis:02}")
    } else {
        format!("{mins:02}:{secs:02}.{centis:02}")
    }
}

/// Format a distance with one decimal and a unit suffix: `123.4 m`.
pub fn format_distance(meters: f32) -> String {
    format!("{meters:.1} m")
}
