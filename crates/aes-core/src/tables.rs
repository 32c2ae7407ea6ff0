//! Generated lookup tables: the forward S-box and the round constants.
//!
//! Both tables are derived from GF(2^8) arithmetic rather than embedded as
//! literals. They are built once per process by [`init`] and are read-only
//! afterwards, so any number of threads may share them.

use std::sync::OnceLock;

use tracing::debug;

use crate::cipher::ROUNDS;
use crate::gf::double;

/// Affine constant of the S-box, also the image of 0.
const AFFINE_CONSTANT: u8 = 0x63;

/// Lookup tables shared by every encryption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tables {
    /// Forward substitution box.
    pub sbox: [u8; 256],
    /// Round constants `rcon[i]` for rounds `i + 1`.
    pub rcon: [u8; ROUNDS],
}

impl Tables {
    /// Builds both tables from scratch.
    pub fn build() -> Self {
        Self {
            sbox: build_sbox(),
            rcon: build_rcon(),
        }
    }
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Builds the shared tables if needed and returns them.
///
/// Idempotent and thread-safe; the encryption entry points call it
/// themselves, so explicit initialization is optional.
pub fn init() -> &'static Tables {
    TABLES.get_or_init(|| {
        let tables = Tables::build();
        debug!(rounds = ROUNDS, "built S-box and round constants");
        tables
    })
}

/// Looks up `byte` in the forward S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    init().sbox[byte as usize]
}

/// Walks GF(2^8)* with `p` stepping by ×3 and `q` by ÷3, so that `p · q = 1`
/// holds throughout and `q` is the inverse fed to the affine transform.
fn build_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut p: u8 = 1;
    let mut q: u8 = 1;

    loop {
        // p *= 3
        p ^= double(p);

        // q /= 3, i.e. q *= 0xf6
        q ^= q << 1;
        q ^= q << 2;
        q ^= q << 4;
        if q & 0x80 != 0 {
            q ^= 0x09;
        }

        sbox[p as usize] = q
            ^ q.rotate_left(1)
            ^ q.rotate_left(2)
            ^ q.rotate_left(3)
            ^ q.rotate_left(4)
            ^ AFFINE_CONSTANT;

        if p == 1 {
            break;
        }
    }

    // 0 has no inverse.
    sbox[0] = AFFINE_CONSTANT;
    sbox
}

fn build_rcon() -> [u8; ROUNDS] {
    let mut rcon = [0u8; ROUNDS];
    rcon[0] = 1;
    for i in 1..ROUNDS {
        rcon[i] = double(rcon[i - 1]);
    }
    rcon
}
