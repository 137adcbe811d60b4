//! Fits `x·sin(x)` over one period with both CMAC variants.
//!
//! Samples 100 points of `x·sin(x)` on `[0, 2π)`, trains on 70 of them, and
//! prints the sorted predictions for the remaining 30 as `x y` lines.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --example x_sin_x
//! RUST_LOG=info cargo run --example x_sin_x -- continuous
//! ```
//!
//! # Modes
//!
//! - **both** (default) — discrete first, then continuous.
//! - **discrete** — block-quantized windows.
//! - **continuous** — two-window interpolation on a grid spanning one period.

use std::{error::Error, f64::consts::TAU, time::Instant};

use cmac::{Approximator, Config, Continuous, Discrete, Domain, Sample, predict, train};
use cmac_core::Observer;
use cmac_observers::{History, LogObserver};
use log::info;

const POINTS: u32 = 100;
const GENERALIZATION: usize = 2;
const NUM_WEIGHTS: usize = 35;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "both".into());
    match mode.as_str() {
        "both" => {
            run_discrete()?;
            run_continuous()
        }
        "discrete" => run_discrete(),
        "continuous" => run_continuous(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: x_sin_x [both|discrete|continuous]");
            std::process::exit(1);
        }
    }
}

fn run_discrete() -> Result<(), Box<dyn Error>> {
    run("DiscreteCMAC", Discrete::new(GENERALIZATION, NUM_WEIGHTS)?)
}

fn run_continuous() -> Result<(), Box<dyn Error>> {
    run(
        "ContinuousCMAC",
        Continuous::new(GENERALIZATION, NUM_WEIGHTS)?,
    )
}

fn run<A: Approximator>(label: &str, mut model: A) -> Result<(), Box<dyn Error>> {
    let domain = Domain::new(0.0, TAU)?;
    let (train_data, test_data) = samples();

    let mut logger = LogObserver::new(label);
    let mut history = History::new();
    let mut record = history.record();

    let started = Instant::now();
    let outcome = train(
        &mut model,
        &train_data,
        domain,
        &Config::default(),
        |event: &cmac::Event| {
            logger.observe(event);
            record(event)
        },
    )?;
    info!(
        "{label}: generalization={GENERALIZATION} status={:?} passes={} elapsed={:?}",
        outcome.status,
        outcome.passes,
        started.elapsed()
    );
    drop(record);
    if let Some(best) = history.best_accuracy() {
        info!("{label}: best training accuracy {:.4}%", best * 100.0);
    }

    let mut prediction = predict(&model, &test_data, domain)?;
    info!("{label}: test accuracy {:.4}%", prediction.accuracy * 100.0);

    prediction.samples.sort_by(|a, b| a.x.total_cmp(&b.x));
    for sample in &prediction.samples {
        println!("{sample}");
    }

    Ok(())
}

/// Evenly spaced `x·sin(x)` samples, split 70/30 by position.
fn samples() -> (Vec<Sample>, Vec<Sample>) {
    let step = TAU / f64::from(POINTS);

    (0..POINTS)
        .map(|i| {
            let x = f64::from(i) * step;
            Sample::new(x, x * x.sin())
        })
        .enumerate()
        .fold((Vec::new(), Vec::new()), |(mut train, mut test), (i, sample)| {
            if i % 10 < 7 {
                train.push(sample);
            } else {
                test.push(sample);
            }
            (train, test)
        })
}
