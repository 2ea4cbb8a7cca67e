use solana_sha256_hasher::hashv;

use crate::{
    constants::{BEACON_LEN, BEACON_SEED_DOMAIN},
    state::{BallConfig, PickSet},
};

pub type Seed = [u8; 32];

/// First seed of a draw, bound to the verified beacon value.
pub fn initial_seed(beacon: &[u8; BEACON_LEN]) -> Seed {
    hashv(&[BEACON_SEED_DOMAIN, beacon.as_ref()]).to_bytes()
}

pub fn derive(seed: &Seed) -> Seed {
    hashv(&[seed.as_ref()]).to_bytes()
}

/// Maps a seed to `[0, bound)` using 128 bits of it, so the modulo bias stays
/// below 2^-64 for any `bound` that fits in a u64.
pub fn select_bounded(seed: &Seed, bound: u64) -> u64 {
    debug_assert!(bound > 0);
    let mut wide = [0u8; 16];
    wide.copy_from_slice(&seed[..16]);
    (u128::from_le_bytes(wide) % bound as u128) as u64
}

/// Draws the winning combination for a round.
///
/// Normal numbers are drawn without replacement (a duplicate is discarded and
/// redrawn); the special number comes from its own range afterwards. The
/// result depends only on the beacon and the ball configuration, so every
/// settlement page of a round sees the same draw.
pub fn draw_winning_picks(beacon: &[u8; BEACON_LEN], balls: &BallConfig) -> PickSet {
    let wanted = balls.normal_ball_count as usize;
    let normal_bound = balls.max_normal_ball as u64 + 1;

    let mut seed = initial_seed(beacon);
    let mut numbers: Vec<u8> = Vec::with_capacity(wanted);
    while numbers.len() < wanted {
        seed = derive(&seed);
        let n = select_bounded(&seed, normal_bound) as u8;
        if !numbers.contains(&n) {
            numbers.push(n);
        }
    }

    seed = derive(&seed);
    let special = select_bounded(&seed, balls.max_special_ball as u64 + 1) as u8;

    PickSet::from_drawn(numbers, special)
}
