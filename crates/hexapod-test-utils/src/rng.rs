//! Deterministic pose generation for reproducible tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hexapod_core::types::PoseCommand;

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw a valid pose command: each rotation in `[-max_rotation,
/// max_rotation]` degrees, each offset in `[-max_offset, max_offset]`.
pub fn random_pose_command(rng: &mut impl Rng, max_rotation: f64, max_offset: f64) -> PoseCommand {
    let rotation = [
        rng.gen_range(-max_rotation..=max_rotation),
        rng.gen_range(-max_rotation..=max_rotation),
        rng.gen_range(-max_rotation..=max_rotation),
    ];
    let offset = [
        rng.gen_range(-max_offset..=max_offset),
        rng.gen_range(-max_offset..=max_offset),
        rng.gen_range(-max_offset..=max_offset),
    ];
    PoseCommand { rotation, offset }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
