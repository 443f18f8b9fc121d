//! Frame timing helpers.

use std::time::Duration;

/// Turn a raw clock delta into the elapsed time fed to the simulation.
///
/// A negative delta (clock wrap or a backwards jump) is replaced by one
/// target frame.
pub fn sanitize_elapsed(raw_ms: i64, frame_ms: u32) -> u32 {
    if raw_ms < 0 {
        return frame_ms;
    }
    u32::try_from(raw_ms).unwrap_or(u32::MAX)
}

/// Time left to sleep in a tick: `max(0, frame - spent)`.
pub fn frame_sleep(frame: Duration, spent: Duration) -> Duration {
    frame.saturating_sub(spent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_delta_uses_frame_duration() {
        assert_eq!(sanitize_elapsed(-5, 33), 33);
        assert_eq!(sanitize_elapsed(i64::MIN, 16), 16);
    }

    #[test]
    fn positive_delta_passes_through() {
        assert_eq!(sanitize_elapsed(0, 33), 0);
        assert_eq!(sanitize_elapsed(41, 33), 41);
        assert_eq!(sanitize_elapsed(i64::MAX, 33), u32::MAX);
    }

    #[test]
    fn sleep_never_negative() {
        let frame = Duration::from_millis(33);
        assert_eq!(
            frame_sleep(frame, Duration::from_millis(10)),
            Duration::from_millis(23)
        );
        assert_eq!(frame_sleep(frame, Duration::from_millis(50)), Duration::ZERO);
    }
}
