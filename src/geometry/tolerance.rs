// Centralized tolerances and iteration budgets for robust geometry

pub const EPS_LEN: f32 = 1e-6; // zero-length vector threshold
pub const EPS_T: f32 = 1e-6; // convergence tolerance on curve parameter t

// Uniform sampling resolution for cubic arc length (chord sum)
pub const CUBIC_LENGTH_SAMPLES: u32 = 64;

// Coarse scan resolution for cubic closest-point (endpoints included)
pub const CUBIC_SCAN_SAMPLES: u32 = 32;

// Golden-section refinement cap after the coarse scan
pub const GOLDEN_MAX_ITERS: u32 = 40;

// (sqrt(5) - 1) / 2, the golden-section bracket shrink ratio
pub const INV_PHI: f32 = 0.618_034;

#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.max(0.0).min(1.0)
}
