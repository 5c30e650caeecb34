//! Subtractive lagged-Fibonacci state.
//!
//! `SubtractiveState` is plain data: seeding and sampling mutate it in place
//! and all locking lives in the engine that owns it. The arithmetic wraps in
//! two's complement throughout so that sequences match 32-bit signed
//! implementations bit for bit.

/// Number of slots in the state ring.
pub const STATE_LEN: usize = 55;

/// Mixing constant subtracted from the seed magnitude.
pub const SEED_CONSTANT: i32 = 0x00BA_DDAD;

/// Starting offset of the trailing index.
const LAG_START: usize = 42;

/// Distance between a slot and the slot it is mixed with while seeding.
const MIX_DISTANCE: usize = 30;

/// Number of mixing passes over the whole ring.
const MIX_PASSES: usize = 4;

/// Ring of 55 values plus the two rotating read indices.
#[derive(Clone, PartialEq, Eq)]
pub struct SubtractiveState {
    ring: [i32; STATE_LEN],
    next: usize,
    next_p: usize,
}

impl SubtractiveState {
    /// Builds a freshly seeded state.
    #[must_use]
    pub fn seeded(seed: i32) -> Self {
        let mut state = Self {
            ring: [0; STATE_LEN],
            next: 0,
            next_p: LAG_START,
        };
        state.reseed(seed);
        state
    }

    /// Re-runs initialization from `seed` and rewinds both indices.
    pub fn reseed(&mut self, seed: i32) {
        let subtraction = if seed == i32::MIN {
            i32::MAX
        } else {
            seed.abs()
        };

        let mut mj = SEED_CONSTANT.wrapping_sub(subtraction);
        self.ring[STATE_LEN - 1] = mj;
        let mut mk: i32 = 1;

        for i in 0..STATE_LEN - 1 {
            let ii = (LAG_START * (i + 1) % STATE_LEN) - 1;
            self.ring[ii] = mk;
            mk = wrap_negative(mj.wrapping_sub(mk));
            mj = self.ring[ii];
        }

        for _ in 0..MIX_PASSES {
            for i in 0..STATE_LEN {
                let mixed = self.ring[i].wrapping_sub(self.ring[(i + MIX_DISTANCE) % STATE_LEN]);
                self.ring[i] = wrap_negative(mixed);
            }
        }

        self.next = 0;
        self.next_p = LAG_START;
    }

    /// Produces one raw sample in `[0, i32::MAX)` and advances both indices.
    pub fn next_sample(&mut self) -> i32 {
        let mut sample = self.ring[self.next].wrapping_sub(self.ring[self.next_p]);

        if sample == i32::MAX {
            sample -= 1;
        }
        sample = wrap_negative(sample);

        self.ring[self.next] = sample;
        self.next = (self.next + 1) % STATE_LEN;
        self.next_p = (self.next_p + 1) % STATE_LEN;

        sample
    }

    /// Current `(next, next_p)` read indices.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.next, self.next_p)
    }

    /// The state ring.
    #[must_use]
    pub fn ring(&self) -> &[i32; STATE_LEN] {
        &self.ring
    }
}

impl std::fmt::Debug for SubtractiveState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubtractiveState")
            .field("next", &self.next)
            .field("next_p", &self.next_p)
            .finish_non_exhaustive()
    }
}

fn wrap_negative(value: i32) -> i32 {
    if value < 0 {
        value.wrapping_add(i32::MAX)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(seed: i32, n: usize) -> Vec<i32> {
        let mut state = SubtractiveState::seeded(seed);
        (0..n).map(|_| state.next_sample()).collect()
    }

    #[test]
    fn test_seed_one_ring_matches_reference() {
        let state = SubtractiveState::seeded(1);
        assert_eq!(
            &state.ring()[..5],
            &[209_278_121, 47_614_592, 601_269_448, 1_869_103_857, 2_075_432_991]
        );
        assert_eq!(state.ring()[54], 333_086_019);
        assert_eq!(state.cursor(), (0, 42));
    }

    #[test]
    fn test_seed_one_samples_match_reference() {
        assert_eq!(
            samples(1, 5),
            vec![283_238_236, 1_409_347_341, 262_308_339, 2_032_470_478, 1_800_789_454]
        );
    }

    #[test]
    fn test_seed_forty_two_samples_match_reference() {
        assert_eq!(samples(42, 3), vec![2_003_880_209, 2_007_985_311, 464_975_642]);
    }

    #[test]
    fn test_min_seed_maps_to_max_magnitude() {
        assert_eq!(samples(i32::MIN, 3), vec![1_393_579_657, 609_081_666, 1_723_939_402]);
        assert_eq!(samples(i32::MIN, 3), samples(i32::MAX, 3));
    }

    #[test]
    fn test_negative_seed_uses_magnitude() {
        assert_eq!(samples(-7, 20), samples(7, 20));
    }

    #[test]
    fn test_indices_wrap_after_full_ring() {
        let mut state = SubtractiveState::seeded(9);
        for _ in 0..STATE_LEN - LAG_START {
            state.next_sample();
        }
        assert_eq!(state.cursor(), (13, 0));

        for _ in 0..LAG_START {
            state.next_sample();
        }
        assert_eq!(state.cursor(), (0, 42));
    }

    #[test]
    fn test_samples_stay_below_max() {
        let mut state = SubtractiveState::seeded(123);
        for _ in 0..100_000 {
            let sample = state.next_sample();
            assert!((0..i32::MAX).contains(&sample));
        }
        assert!(state.ring().iter().all(|v| (0..=i32::MAX).contains(v)));
    }

    #[test]
    fn test_reseed_rewinds_sequence() {
        let mut state = SubtractiveState::seeded(5);
        let first: Vec<i32> = (0..10).map(|_| state.next_sample()).collect();
        state.reseed(5);
        let second: Vec<i32> = (0..10).map(|_| state.next_sample()).collect();
        assert_eq!(first, second);
    }
}
