use hypercube_chess::config::{BoardConfig, DiagonalMode, KnightMode};
use hypercube_chess::pieces::{PieceInfo, PieceKind};

fn print_table(label: &str, config: BoardConfig) {
    println!("{label}, l = {} (d = 1..8)", config.side_length);
    for kind in PieceKind::ALL {
        let info = PieceInfo::new(kind, config);
        let row = (1..=8)
            .map(|d| info.calculate(d).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {:>6}: {}", kind.name(), row);
        println!("          {}", info.formula());
    }
}

fn main() {
    print_table("hyper diagonals / alternative knight", BoardConfig::new());
    println!();
    print_table(
        "classic diagonals / standard knight",
        BoardConfig::new()
            .with_diagonal_mode(DiagonalMode::Classic)
            .with_knight_mode(KnightMode::Standard),
    );
}
