use num_bigint::BigUint;

use crate::attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use crate::config::{BoardConfig, DiagonalMode, KnightMode};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum PieceKind {
    Pawn,
    Knight,
    Rook,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Case-insensitive name lookup. An unrecognized name is a normal miss,
    /// never a fault.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pawn" => Some(PieceKind::Pawn),
            "knight" => Some(PieceKind::Knight),
            "rook" => Some(PieceKind::Rook),
            "bishop" => Some(PieceKind::Bishop),
            "queen" => Some(PieceKind::Queen),
            "king" => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A piece kind bound to a board configuration.
///
/// `calculate` evaluates the closed-form attack count for a dimension;
/// `formula` is a LaTeX rendering of that closed form for display. The
/// string is descriptive metadata only and carries no weight for the
/// numeric contract.
#[derive(Copy, Clone, Debug)]
pub struct PieceInfo {
    kind: PieceKind,
    config: BoardConfig,
}

impl PieceInfo {
    pub fn new(kind: PieceKind, config: BoardConfig) -> Self {
        Self { kind, config }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Attack count for a `d`-dimensional board under the bound
    /// configuration.
    pub fn calculate(&self, d: u32) -> BigUint {
        let l = self.config.side_length;
        match self.kind {
            PieceKind::Pawn => pawn_attacks(d, self.config.diagonal_mode, l),
            PieceKind::Knight => knight_attacks(d, self.config.knight_mode, l),
            PieceKind::Rook => rook_attacks(d, l),
            PieceKind::Bishop => bishop_attacks(d, self.config.diagonal_mode, l),
            PieceKind::Queen => queen_attacks(d, self.config.diagonal_mode, l),
            PieceKind::King => king_attacks(d, l),
        }
    }

    /// LaTeX description of the general-case (`l >= 5`) formula for the
    /// active mode.
    pub fn formula(&self) -> String {
        match self.kind {
            PieceKind::Pawn => match self.config.diagonal_mode {
                DiagonalMode::Classic => r"(d-1)\min(l-1,2)".to_string(),
                DiagonalMode::Hyper => r"\min(l,3)^{d-1} - 1".to_string(),
            },
            PieceKind::Knight => match self.config.knight_mode {
                KnightMode::Standard => r"4d(d-1)".to_string(),
                KnightMode::Alternative => {
                    r"8\left(\binom{d}{2} + \binom{d}{3}\right)".to_string()
                }
            },
            PieceKind::Rook => r"d(l-1)".to_string(),
            PieceKind::Bishop => bishop_formula(self.config.diagonal_mode),
            PieceKind::Queen => {
                format!(r"d(l-1) + {}", bishop_formula(self.config.diagonal_mode))
            }
            PieceKind::King => r"\min(l,3)^d - 1".to_string(),
        }
    }
}

fn bishop_formula(mode: DiagonalMode) -> String {
    match mode {
        DiagonalMode::Classic => {
            r"\binom{d}{2}\left(2l - 2 - [l \text{ even}]\right)".to_string()
        }
        DiagonalMode::Hyper => {
            r"\sum_{r=2}^{d} \binom{d}{r}\left(2^{r-1}(l-1) - [l \text{ even}]\left(2^{r-1}-1\right)\right)"
                .to_string()
        }
    }
}

/// Look up a piece by name and bind it to `config`.
pub fn piece_info(name: &str, config: BoardConfig) -> Option<PieceInfo> {
    PieceKind::from_name(name).map(|kind| PieceInfo::new(kind, config))
}
