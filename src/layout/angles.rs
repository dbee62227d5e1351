//! Electron-domain angle allocation and slot matching.
//!
//! Angles are in radians in screen orientation (y grows downward), so
//! `-π/2` points straight up. [`AngleSlots`] is the single matcher used both
//! when reserving bond directions during placement and when choosing where
//! lone pairs go while drawing, so the two always agree.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Distances closer than this are treated as equal when matching slots.
const TIE_EPSILON: f64 = 1e-9;

/// Returns `n` angles evenly spaced by `2π/n`, starting straight up at `-π/2`.
pub fn domain_angles(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = TAU / n as f64;
    (0..n).map(|i| -FRAC_PI_2 + i as f64 * step).collect()
}

/// Smallest absolute difference between two angles, in `[0, π]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % TAU;
    if d > PI { TAU - d } else { d }
}

/// Direction from `from` to `to` in screen orientation.
#[inline]
pub fn direction(from: [f64; 2], to: [f64; 2]) -> f64 {
    (to[1] - from[1]).atan2(to[0] - from[0])
}

/// A set of candidate domain angles, each of which can be claimed once.
#[derive(Debug, Clone)]
pub struct AngleSlots {
    angles: Vec<f64>,
    used: Vec<bool>,
}

impl AngleSlots {
    pub fn new(domains: usize) -> Self {
        let angles = domain_angles(domains);
        let used = vec![false; angles.len()];
        Self { angles, used }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Claims the unused slot closest to `target`.
    ///
    /// With a `tolerance`, slots farther than it are not considered. Ties, up to
    /// [`TIE_EPSILON`], go to the earlier slot. Returns the claimed slot index.
    pub fn claim_closest(&mut self, target: f64, tolerance: Option<f64>) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (slot, &angle) in self.angles.iter().enumerate() {
            if self.used[slot] {
                continue;
            }
            let d = angular_distance(angle, target);
            if tolerance.is_some_and(|tol| d > tol) {
                continue;
            }
            if best.is_none_or(|(_, best_d)| d < best_d - TIE_EPSILON) {
                best = Some((slot, d));
            }
        }

        let (slot, _) = best?;
        self.used[slot] = true;
        Some(slot)
    }

    /// Claims the first unused slot in allocation order and returns its angle.
    pub fn claim_next(&mut self) -> Option<f64> {
        let slot = self.used.iter().position(|used| !used)?;
        self.used[slot] = true;
        Some(self.angles[slot])
    }

    /// Angles of the slots nobody has claimed, in allocation order.
    pub fn unused(&self) -> impl Iterator<Item = f64> + '_ {
        self.angles
            .iter()
            .zip(&self.used)
            .filter(|&(_, used)| !used)
            .map(|(&angle, _)| angle)
    }
}
