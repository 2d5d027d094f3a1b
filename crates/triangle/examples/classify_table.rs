//! Prints the classification of a few hand-picked and sampled triples.
//!
//! Run with `cargo run -p triangle --example classify_table`.

use triangle::prelude::*;

fn main() {
    let fixed: [(f64, f64, f64); 6] = [
        (2.0, 2.0, 2.0),
        (2.0, 2.0, 3.0),
        (3.0, 4.0, 5.0),
        (2.0, 2.0, 4.0),
        (0.0, 1.0, 1.0),
        (0.1 + 0.2, 0.3, 0.3),
    ];
    for (a, b, c) in fixed {
        print_row(Sides::new(a, b, c));
    }

    let sampled = draw_many(SampleCfg::default(), 7, 5).expect("default bounds are valid");
    for sides in sampled {
        print_row(sides);
    }
}

fn print_row(sides: Sides<f64>) {
    let shown = format!("{:?}", sides.as_array());
    match sides.classify() {
        Ok(kind) => println!("{shown:>64} -> {kind}"),
        Err(err) => println!("{shown:>64} -> {err}"),
    }
}
