//! The formula engine: one pure closed-form function per piece archetype.
//!
//! Each function is total over non-negative `d` and `l`: degenerate boards
//! (`d = 0`, `l = 0`, `l = 1`) fall into explicit branches that yield zero,
//! and all results are exact `BigUint`s, so no dimension is large enough to
//! overflow. Small side lengths truncate the infinite-board move count; the
//! piecewise branches below carry those finite-board corrections.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::combinatorics::binomial;
use crate::config::{DiagonalMode, KnightMode};

/// Rook: \(d(l-1)\) — along each of the `d` axes, every other cell of the
/// rank is attacked.
pub fn rook_attacks(d: u32, l: u32) -> BigUint {
    BigUint::from(u64::from(d)) * u64::from(l).saturating_sub(1)
}

/// Bishop attack count under the given diagonal generalization.
///
/// Classic mode moves through exactly one 2-axis plane at a time; the board
/// contributes \(\binom{d}{2}\) planes, each worth `2l-2` cells on an
/// odd-length side and `2l-3` on an even one (no true center cell, so one
/// diagonal ray is a step short).
///
/// Hyper mode sums over every r-subset of axes, \(r \ge 2\): each subset has
/// \(2^{r-1}\) diagonal rays of length `l-1`, and on an even-length side
/// every ray again loses exactly one step.
pub fn bishop_attacks(d: u32, mode: DiagonalMode, l: u32) -> BigUint {
    if l < 2 {
        return BigUint::zero();
    }
    let d = u64::from(d);
    let l = u64::from(l);
    match mode {
        DiagonalMode::Classic => {
            let per_plane = if l == 2 {
                1
            } else if l % 2 == 1 {
                2 * l - 2
            } else {
                2 * l - 3
            };
            binomial(d, 2) * per_plane
        }
        DiagonalMode::Hyper => {
            let mut total = BigUint::zero();
            for r in 2..=d {
                let rays = BigUint::one() << (r - 1);
                let mut reach = &rays * (l - 1);
                if l % 2 == 0 {
                    reach -= &rays - 1u32;
                }
                total += binomial(d, r) * reach;
            }
            total
        }
    }
}

/// Knight attack count under the given displacement generalization.
///
/// Standard mode keeps the (2,1) vector: `d(d-1)` ordered axis pairs, four
/// sign combinations each once `l >= 5` leaves room on both sides of a
/// central cell; on `3 <= l < 5` only a corner placement fits, which pins
/// one sign per axis. A 2-step never fits when `l < 3`.
///
/// Alternative mode allows any Manhattan-length-3 displacement touching at
/// least two axes: a (2,1) move for each ordered pair plus a (1,1,1) move
/// for each axis triple, with 8 sign/order variants apiece on a roomy board
/// and correspondingly fewer from a corner.
pub fn knight_attacks(d: u32, mode: KnightMode, l: u32) -> BigUint {
    let d = u64::from(d);
    match mode {
        KnightMode::Standard => {
            if l < 3 {
                return BigUint::zero();
            }
            let pairs = BigUint::from(d) * d.saturating_sub(1);
            if l < 5 {
                pairs
            } else {
                pairs * 4u32
            }
        }
        KnightMode::Alternative => {
            if l < 2 {
                BigUint::zero()
            } else if l == 2 {
                // Only the three-axis unit-step displacement fits; zero for
                // d < 3 since binomial already vanishes there.
                binomial(d, 3)
            } else if l < 5 {
                binomial(d, 2) * 2u32 + binomial(d, 3)
            } else {
                (binomial(d, 2) + binomial(d, 3)) * 8u32
            }
        }
    }
}

/// Queen: the rook and bishop move sets are disjoint, so the count is their
/// sum. No independent derivation.
pub fn queen_attacks(d: u32, mode: DiagonalMode, l: u32) -> BigUint {
    rook_attacks(d, l) + bishop_attacks(d, mode, l)
}

/// King: \(\min(l,3)^d - 1\) — each axis offers up to three offsets
/// (-1, 0, +1), fewer on a narrow board, minus the all-zero stay-in-place
/// vector.
pub fn king_attacks(d: u32, l: u32) -> BigUint {
    if l == 0 {
        return BigUint::zero();
    }
    BigUint::from(u64::from(l.min(3))).pow(d) - 1u32
}

/// Pawn attack count under the given diagonal generalization.
///
/// One axis is the forward axis. Classic mode attacks diagonally through
/// exactly one of the other `d-1` axes, two directions each, capped by board
/// narrowness: \((d-1)\min(l-1,2)\). Hyper mode attacks any forward-diagonal
/// combination over the non-forward axes, the king combinatorics one
/// dimension down: \(\min(l,3)^{d-1} - 1\).
pub fn pawn_attacks(d: u32, mode: DiagonalMode, l: u32) -> BigUint {
    // No forward axis exists on a 0-dimensional board.
    if d == 0 || l == 0 {
        return BigUint::zero();
    }
    match mode {
        DiagonalMode::Classic => {
            BigUint::from(u64::from(d - 1)) * u64::from((l - 1).min(2))
        }
        DiagonalMode::Hyper => BigUint::from(u64::from(l.min(3))).pow(d - 1) - 1u32,
    }
}
