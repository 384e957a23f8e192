//! Particle Layout
//!
//! Randomized placement and timing for hearts, sparkles and game targets.
//! Everything is in percentages and seconds, so layout never depends on the
//! container size at call time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Particle, ParticleSpec, Placement, SecondsRange};

/// Generator seeded from the browser's `Math.random`
pub fn browser_rng() -> StdRng {
    let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    StdRng::seed_from_u64((hi << 32) | lo)
}

fn sample_secs<R: Rng + ?Sized>(rng: &mut R, range: SecondsRange) -> f64 {
    if range.start >= range.end {
        return range.start;
    }
    rng.random_range(range.start..range.end)
}

/// Lay out one batch of decorative particles
pub fn generate_particles<R: Rng + ?Sized>(spec: &ParticleSpec, rng: &mut R) -> Vec<Particle> {
    (0..spec.count)
        .map(|_| Particle {
            left: rng.random_range(0.0..=100.0),
            top: rng.random_range(0.0..=100.0),
            delay: sample_secs(&mut *rng, spec.delay_secs),
            duration: sample_secs(&mut *rng, spec.duration_secs),
        })
        .collect()
}

/// Place game targets inside `[margin, 100 - margin)` on both axes
pub fn place_targets<R: Rng + ?Sized>(count: usize, margin_pct: f64, rng: &mut R) -> Vec<Placement> {
    let low = margin_pct.clamp(0.0, 50.0);
    let high = 100.0 - low;
    let coord = |rng: &mut R| if low < high { rng.random_range(low..high) } else { 50.0 };
    (0..count)
        .map(|_| Placement {
            left: coord(&mut *rng),
            top: coord(&mut *rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn in_percent(v: f64) -> bool {
        !v.is_nan() && (0.0..=100.0).contains(&v)
    }

    #[test]
    fn test_hearts_within_ranges() {
        let spec = ParticleSpec::HEARTS;
        let hearts = generate_particles(&spec, &mut seeded(7));
        assert_eq!(hearts.len(), 15);
        for p in &hearts {
            assert!(in_percent(p.left) && in_percent(p.top));
            assert!(spec.delay_secs.contains(p.delay), "delay {}", p.delay);
            assert!((3.0..7.0).contains(&p.duration), "duration {}", p.duration);
        }
    }

    #[test]
    fn test_sparkles_within_ranges() {
        let sparkles = generate_particles(&ParticleSpec::SPARKLES, &mut seeded(42));
        assert_eq!(sparkles.len(), 30);
        for p in &sparkles {
            assert!(in_percent(p.left) && in_percent(p.top));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((2.0..5.0).contains(&p.duration));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = generate_particles(&ParticleSpec::HEARTS, &mut seeded(3));
        let b = generate_particles(&ParticleSpec::HEARTS, &mut seeded(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_range_yields_start() {
        let spec = ParticleSpec {
            count: 4,
            delay_secs: SecondsRange::new(1.5, 1.5),
            duration_secs: SecondsRange::new(2.0, 2.0),
        };
        for p in generate_particles(&spec, &mut seeded(1)) {
            assert_eq!(p.delay, 1.5);
            assert_eq!(p.duration, 2.0);
        }
    }

    #[test]
    fn test_targets_keep_margin() {
        let targets = place_targets(26, 5.0, &mut seeded(11));
        assert_eq!(targets.len(), 26);
        for t in &targets {
            assert!(t.left >= 5.0 && t.left < 95.0);
            assert!(t.top >= 5.0 && t.top < 95.0);
        }
    }

    #[test]
    fn test_style_uses_units() {
        let p = Particle { left: 12.5, top: 50.0, delay: 1.0, duration: 3.25 };
        assert_eq!(
            p.style(),
            "left: 12.5%; top: 50%; animation-delay: 1s; animation-duration: 3.25s;"
        );
    }
}
