//! Heart burst shown after a correct PIN.
//!
//! A fixed number of hearts float up from random horizontal positions with
//! randomized size, start offset and duration. Each heart is removed once
//! its own animation ends; the whole overlay is removed after a fixed total
//! lifetime.

use std::time::Duration;

use crate::random::RandomSource;

const HEART_GLYPHS: &[&str] = &["💚", "💖", "💕", "💗"];

const SIZE_PX: (f64, f64) = (16.0, 40.0);
const DELAY_MS: (f64, f64) = (0.0, 600.0);
const DURATION_MS: (f64, f64) = (1500.0, 2500.0);

/// One animated heart.
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub id: u32,
    pub glyph: &'static str,
    /// Horizontal position, percent of viewport width.
    pub left_pct: f64,
    pub size_px: f64,
    pub delay: Duration,
    pub duration: Duration,
}

impl Heart {
    /// Time from spawn until the heart removes itself.
    pub fn lifetime(&self) -> Duration {
        self.delay + self.duration
    }

    /// Inline CSS for the heart element.
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; font-size: {:.0}px; animation-delay: {}ms; animation-duration: {}ms;",
            self.left_pct,
            self.size_px,
            self.delay.as_millis(),
            self.duration.as_millis()
        )
    }
}

/// The celebration overlay and its live hearts.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartBurst {
    hearts: Vec<Heart>,
}

impl HeartBurst {
    pub fn spawn(count: u32, random: &dyn RandomSource) -> Self {
        let hearts = (0..count)
            .map(|id| Heart {
                id,
                glyph: HEART_GLYPHS[random.index(HEART_GLYPHS.len())],
                left_pct: random.between(0.0, 100.0),
                size_px: random.between(SIZE_PX.0, SIZE_PX.1),
                delay: Duration::from_millis(random.between(DELAY_MS.0, DELAY_MS.1) as u64),
                duration: Duration::from_millis(
                    random.between(DURATION_MS.0, DURATION_MS.1) as u64,
                ),
            })
            .collect();

        Self { hearts }
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.hearts.len();
        self.hearts.retain(|heart| heart.id != id);
        self.hearts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, ThreadRandom};

    #[test]
    fn test_spawn_count_and_ranges() {
        let burst = HeartBurst::spawn(24, &ThreadRandom);
        assert_eq!(burst.hearts().len(), 24);

        for heart in burst.hearts() {
            assert!((0.0..100.0).contains(&heart.left_pct));
            assert!((16.0..40.0).contains(&heart.size_px));
            assert!(heart.delay <= Duration::from_millis(600));
            assert!(heart.duration >= Duration::from_millis(1500));
            assert!(heart.lifetime() <= Duration::from_millis(3100));
        }
    }

    #[test]
    fn test_scripted_heart_style() {
        let random = ScriptedRandom::with_indices([1]);
        random.push_units([0.5, 0.0, 0.5, 0.9999]);

        let burst = HeartBurst::spawn(1, &random);
        let heart = &burst.hearts()[0];
        assert_eq!(heart.glyph, "💖");
        assert_eq!(heart.delay, Duration::from_millis(300));
        assert_eq!(
            heart.style(),
            "left: 50.0%; font-size: 16px; animation-delay: 300ms; animation-duration: 2499ms;"
        );
    }

    #[test]
    fn test_remove_hearts() {
        let mut burst = HeartBurst::spawn(2, &ThreadRandom);
        assert!(burst.remove(0));
        assert!(!burst.remove(0));
        assert!(burst.remove(1));
        assert!(burst.is_empty());
    }
}
