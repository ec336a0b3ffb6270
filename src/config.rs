/// How diagonal motion generalizes beyond two dimensions.
///
/// Governs the Bishop (and through it the Queen) and the Pawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DiagonalMode {
    /// Diagonal motion uses exactly two axes at a time.
    Classic,
    /// Uniform diagonal motion across any subset of \(r \ge 2\) axes.
    Hyper,
}

/// How the knight's displacement generalizes beyond two dimensions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KnightMode {
    /// The classic (2,1) vector: two steps on one axis, one step on another.
    Standard,
    /// Any displacement of Manhattan length 3 touching at least two axes.
    Alternative,
}

/// Board and movement configuration, threaded by value through every
/// evaluation so that concurrent evaluations under different settings never
/// interfere.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoardConfig {
    /// Cells per axis, uniform across axes.
    pub side_length: u32,
    pub diagonal_mode: DiagonalMode,
    pub knight_mode: KnightMode,
}

impl BoardConfig {
    /// The default display configuration: an 8-cell side with the fully
    /// generalized movement rules.
    pub fn new() -> Self {
        Self {
            side_length: 8,
            diagonal_mode: DiagonalMode::Hyper,
            knight_mode: KnightMode::Alternative,
        }
    }

    pub fn with_side_length(mut self, l: u32) -> Self {
        self.side_length = l;
        self
    }

    pub fn with_diagonal_mode(mut self, mode: DiagonalMode) -> Self {
        self.diagonal_mode = mode;
        self
    }

    pub fn with_knight_mode(mut self, mode: KnightMode) -> Self {
        self.knight_mode = mode;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}
