//! Prints tuning tables for a few typical deployments.
//!
//! Run with: cargo run --example tuning_table

use lshtune::{sweep_dataset_size, sweep_ratio, Rounding};

fn main() -> lshtune::Result<()> {
    println!("K/L vs dataset size (C = 1.2, t = 3000)");
    println!("{:>12} {:>6} {:>4} {:>8}", "n", "K", "L", "rho");
    let sizes = [10_000.0, 100_000.0, 1_000_000.0, 10_000_000.0];
    for point in sweep_dataset_size(&sizes, 1.2, 3000.0, Rounding::Ceil)? {
        let p = point.params;
        println!("{:>12} {:>6} {:>4} {:>8.4}", point.input, p.k, p.l, p.rho);
    }

    println!();
    println!("K/L vs approximation ratio (n = 1M, t = 1000)");
    println!("{:>6} {:>8} {:>6} {:>4} {:>8}", "C", "w0", "K", "L", "rho");
    let ratios = [1.1, 1.2, 1.4, 1.6, 1.8, 2.0];
    for point in sweep_ratio(1_000_000.0, &ratios, 1000.0, Rounding::Ceil)? {
        let p = point.params;
        println!(
            "{:>6} {:>8.2} {:>6} {:>4} {:>8.4}",
            point.input, p.w0, p.k, p.l, p.rho
        );
    }

    Ok(())
}
