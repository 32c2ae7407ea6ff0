//! Key types and the AES-128 key schedule.

use tracing::trace;

use crate::block::{column, set_column, Block};
use crate::cipher::ROUNDS;
use crate::tables::init;

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

/// Incremental key schedule holding a single round key at a time.
///
/// A schedule is seeded from the cipher key (round key 0) and moves forward
/// one round key per [`KeySchedule::advance`]. Round key `r + 1` is derived
/// from round key `r`, so the keys can only be visited in order. Each
/// encryption owns its own schedule; nothing carries over between calls.
#[derive(Clone, Debug)]
pub struct KeySchedule {
    round_key: Block,
    round: usize,
}

impl KeySchedule {
    /// Seeds the schedule with round key 0, which is the key itself.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_key: key.0,
            round: 0,
        }
    }

    /// Returns the round key currently held.
    #[inline]
    pub fn current(&self) -> &Block {
        &self.round_key
    }

    /// Index (0..=10) of the round key currently held.
    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Replaces the held round key with the next one.
    ///
    /// Once round key 10 is reached the schedule is exhausted and further
    /// calls leave it unchanged.
    pub fn advance(&mut self) {
        if self.round == ROUNDS {
            return;
        }
        let tables = init();

        let [b0, b1, b2, b3] = column(&self.round_key, 3);
        let mut word = [
            tables.sbox[b1 as usize],
            tables.sbox[b2 as usize],
            tables.sbox[b3 as usize],
            tables.sbox[b0 as usize],
        ];
        // The round counter is 1-based: round key r uses rcon[r - 1].
        word[0] ^= tables.rcon[self.round];
        self.round += 1;

        for col in 0..4 {
            let old = column(&self.round_key, col);
            let new = [
                word[0] ^ old[0],
                word[1] ^ old[1],
                word[2] ^ old[2],
                word[3] ^ old[3],
            ];
            set_column(&mut self.round_key, col, new);
            word = new;
        }

        trace!(round = self.round, "advanced key schedule");
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

/// Expands a 128-bit key into all 11 round keys.
///
/// Encryption does not need this; it is provided for inspecting the schedule.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut schedule = KeySchedule::new(key);
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round, slot) in round_keys.iter_mut().enumerate() {
        if round > 0 {
            schedule.advance();
        }
        *slot = *schedule.current();
    }
    RoundKeys(round_keys)
}
