//! Orbit listing for one grid configuration.
//!
//! Purpose
//! - Print every emitted polygon grouped by rotation orbit, with the canonical
//!   keys that placed it, so orderings can be eyeballed against hand drawings.
//!
//! Usage
//! - `cargo run -p gridpoly --example orbit_listing -- 3 1 3` (size, depth, vertices).
//!   Missing arguments fall back to the library defaults.

use std::time::Instant;

use gridpoly::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1).map(|a| a.parse::<usize>());
    let mut next = |default: usize| match args.next() {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            eprintln!("ignoring bad argument ({e}); using {default}");
            default
        }
        None => default,
    };
    let cfg = EnumerationCfg::new(
        next(EnumerationCfg::DEFAULT_SIZE),
        next(EnumerationCfg::DEFAULT_DEPTH),
        next(EnumerationCfg::DEFAULT_VERTICES),
    );

    let t0 = Instant::now();
    let (seq, stats) = match try_enumerate_polygons(cfg) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let elapsed = t0.elapsed();

    println!("config: {cfg:?}");
    println!("stats:  {stats:?}");
    println!("time:   {:.3} ms", elapsed.as_secs_f64() * 1e3);
    let mut index = 0;
    for (k, orbit) in seq.orbits().enumerate() {
        println!("orbit {k} ({} members)", orbit.len());
        for p in orbit {
            println!(
                "  {index:>4}  {p}  area={:.2} right={} lengths={}",
                p.area(),
                p.right_angles(),
                p.distinct_sides()
            );
            index += 1;
        }
    }
}
