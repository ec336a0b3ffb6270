//! Closed-form attack counts for chess pieces on a d-dimensional hypercubic
//! board of side length `l`.
//!
//! Every count is an exact piecewise formula (no move generation, no board
//! enumeration), accounting for finite-board truncation at small side lengths
//! and for two movement-rule generalizations: how diagonals extend beyond two
//! axes, and how the knight's displacement generalizes.

pub mod combinatorics;
pub mod config;
pub mod attacks;
pub mod pieces;

pub use config::{BoardConfig, DiagonalMode, KnightMode};
pub use pieces::{piece_info, PieceInfo, PieceKind};
