//! Stroke-reveal animation for the main ring.

/// One-shot timed interpolation over the fraction of the arc path drawn.
///
/// Once started, the reveal owns the visible fraction for its duration and
/// stays pinned at 1.0 afterwards; it is never reset or removed. The
/// fraction is relative to the arc's own length, so it reaches 1.0 at the
/// graph's target percentage, not at a full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeReveal {
    start_time: f64,
    duration: f64,
}

impl StrokeReveal {
    pub fn new(start_time: f64, duration: f64) -> Self {
        Self {
            start_time,
            duration,
        }
    }

    /// Fraction of the path drawn at `now`, eased, in [0.0, 1.0].
    pub fn fraction_at(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let progress = ((now - self.start_time) / self.duration).clamp(0.0, 1.0);
        ease_out(progress as f32)
    }
}

/// Cubic ease-out mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0], fast early and decelerating.
fn ease_out(progress: f32) -> f32 {
    let remaining = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - remaining * remaining * remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
    }

    #[test]
    fn test_ease_out_is_front_loaded() {
        // Faster than linear early on, decelerating toward the end.
        assert!(ease_out(0.25) > 0.25);
        assert_eq!(ease_out(0.5), 0.875);
        assert!(ease_out(0.875) - ease_out(0.75) < ease_out(0.25) - ease_out(0.0));
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=20 {
            let eased = ease_out(step as f32 / 20.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn test_fraction_over_lifetime() {
        let reveal = StrokeReveal::new(10.0, 1.5);

        assert_eq!(reveal.fraction_at(10.0), 0.0);
        assert_eq!(reveal.fraction_at(11.5), 1.0);

        // The end state persists indefinitely.
        assert_eq!(reveal.fraction_at(12.0), 1.0);
        assert_eq!(reveal.fraction_at(1000.0), 1.0);
    }

    #[test]
    fn test_fraction_before_start_is_zero() {
        let reveal = StrokeReveal::new(10.0, 1.5);
        assert_eq!(reveal.fraction_at(9.0), 0.0);
    }
}
