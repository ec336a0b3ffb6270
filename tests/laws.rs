use hypercube_chess::attacks::{bishop_attacks, queen_attacks, rook_attacks};
use hypercube_chess::config::{BoardConfig, DiagonalMode, KnightMode};
use hypercube_chess::pieces::{PieceInfo, PieceKind};
use num_traits::Zero;

fn all_configs(l: u32) -> Vec<BoardConfig> {
    let mut configs = Vec::new();
    for diag in [DiagonalMode::Classic, DiagonalMode::Hyper] {
        for knight in [KnightMode::Standard, KnightMode::Alternative] {
            configs.push(
                BoardConfig::new()
                    .with_side_length(l)
                    .with_diagonal_mode(diag)
                    .with_knight_mode(knight),
            );
        }
    }
    configs
}

#[test]
fn every_piece_is_total_and_deterministic_over_the_grid() {
    // No panic, no underflow, and identical results on repeated calls for
    // every piece, dimension, side length and mode combination.
    for l in 1..=12 {
        for config in all_configs(l) {
            for kind in PieceKind::ALL {
                let info = PieceInfo::new(kind, config);
                for d in 0..=10 {
                    assert_eq!(info.calculate(d), info.calculate(d));
                }
            }
        }
    }
}

#[test]
fn degenerate_boards_attack_nothing() {
    // d = 0 (no axes) and l = 1 (one cell per axis) leave no cell to attack.
    for config in all_configs(1) {
        for kind in PieceKind::ALL {
            let info = PieceInfo::new(kind, config);
            for d in 0..=10 {
                assert!(info.calculate(d).is_zero());
            }
        }
    }
    for l in 1..=12 {
        for config in all_configs(l) {
            for kind in PieceKind::ALL {
                assert!(PieceInfo::new(kind, config).calculate(0).is_zero());
            }
        }
    }
}

#[test]
fn attack_counts_grow_strictly_with_dimension() {
    for config in all_configs(8) {
        for kind in PieceKind::ALL {
            let info = PieceInfo::new(kind, config);
            for d in 2..=9 {
                assert!(
                    info.calculate(d + 1) > info.calculate(d),
                    "{} not strictly increasing at d = {d}",
                    kind.name()
                );
            }
        }
    }
}

#[test]
fn queen_dominates_both_of_its_components() {
    for l in 1..=12 {
        for diag in [DiagonalMode::Classic, DiagonalMode::Hyper] {
            for d in 0..=10 {
                let queen = queen_attacks(d, diag, l);
                assert!(queen >= rook_attacks(d, l));
                assert!(queen >= bishop_attacks(d, diag, l));
            }
        }
    }
}

#[test]
fn queen_is_exactly_rook_plus_bishop() {
    for l in 1..=12 {
        for diag in [DiagonalMode::Classic, DiagonalMode::Hyper] {
            for d in 0..=10 {
                assert_eq!(
                    queen_attacks(d, diag, l),
                    rook_attacks(d, l) + bishop_attacks(d, diag, l)
                );
            }
        }
    }
}
