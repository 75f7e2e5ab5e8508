//! End-to-end quickstart example.
//!
//! Demonstrates: explore a region → solve the exact hitting time →
//! advance a walker population step by step → compare estimate and
//! exact value → run the configured driver.

use forage_core::Point;
use forage_engine::{Simulation, SimulationConfig, StepInfo, Viewport, WalkerPopulation};
use forage_space::{ClosestBoundaryIndex, Ellipse, Region, Shape};

fn main() {
    println!("=== Forage Quickstart ===\n");

    // --- Part 1: manual pipeline on an ellipse ---
    let shape = Shape::Ellipse(Ellipse::default());
    let region = Region::explore(&shape, [Point::ORIGIN], 1_000).unwrap();
    println!(
        "Ellipse region: {} interior, {} boundary points ({} expansions)",
        region.interior().len(),
        region.boundary().len(),
        region.iterations()
    );

    let exact = forage_solver::solve(&region, Point::ORIGIN).unwrap();
    println!("Exact expected hitting time from origin: {exact:.4}\n");

    let index = ClosestBoundaryIndex::build(&region).unwrap();
    let mut walkers = WalkerPopulation::builder()
        .walkers(5_000)
        .seed(42)
        .boundary_index(index)
        .build()
        .unwrap();

    println!("{}", StepInfo::header());
    while !walkers.is_absorbed() {
        walkers.advance(&shape).unwrap();
        let step = walkers.step();
        if step % 5 == 0 || walkers.is_absorbed() {
            println!("{}", walkers.info(step, 3).unwrap());
        }
        if step == 10 {
            print_heatmap(&walkers, &shape);
        }
    }

    let est = walkers.estimate();
    println!(
        "\nEstimate: mu={:.3} ± {:.3} (exact {exact:.3}, error {:+.3})",
        est.mu,
        est.sigma,
        est.mu - exact
    );

    // --- Part 2: configured driver on the default square ---
    println!("\nRunning default configuration...");
    let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    let summary = sim.run().unwrap();
    println!(
        "  {} steps, {} absorbed, exact={:?}, mu={}",
        summary.steps, summary.absorbed, summary.exact, summary.final_info.mu
    );
    println!("Done.");
}

/// Print walker counts inside the region, `#` outside it.
fn print_heatmap(walkers: &WalkerPopulation, shape: &Shape) {
    let view = Viewport::new(11, 11).unwrap();
    let mask = view.mask(shape);
    let counts = view.counts(&walkers.occupancy());
    println!("\n  occupancy at step {}:", walkers.step());
    for r in 0..view.height() {
        let row: String = (0..view.width())
            .map(|c| {
                let i = r * view.width() + c;
                match (mask[i], counts[i]) {
                    (true, _) => "   #".to_string(),
                    (false, Some(n)) => format!("{n:>4}"),
                    (false, None) => "   .".to_string(),
                }
            })
            .collect();
        println!("  {row}");
    }
    println!();
}
