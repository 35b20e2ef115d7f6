use std::time::Instant;

use crate::simulation::detection::SweepDetector;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;

/// Time one simulation step for growing populations.
///
/// Builds each population from a fixed seed so runs are comparable, does
/// a warm-up step, then averages a handful of steps per size.
/// Paste the output directly into a spreadsheet to graph.
pub fn bench_step() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 10; // steps averaged per size

    println!("N,step_ms");

    for n in ns {
        let params = Parameters {
            decay_constant: 0.1,
            target_x: n / 2,
            target_y: n / 2,
            ..Parameters::default()
        };

        let mut sim = Simulation::new(params, Some(42));
        sim.setup();
        sim.set_running(true);

        let detector = SweepDetector;

        // Warm up
        sim.step(&detector);

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step(&detector);
        }
        let ms_per_step = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms_per_step);
    }
}
