use steadystate::{bench_step, run_2d, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "steady_state.yaml")]
    file_name: String,

    /// Run the core for N ticks without a window and print final counts
    #[arg(long)]
    headless: Option<u64>,

    /// Run the step benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, ticks: u64) {
    let Scenario { sim, detector } = &mut scenario;
    sim.set_running(true);
    for _ in 0..ticks {
        sim.step(detector);
    }
    let counts = sim.counts();
    println!(
        "after {} ticks (t = {:.2} s): X = {}, Y = {}, complexes = {}",
        ticks, sim.t, counts.x, counts.y, counts.complexes
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    match args.headless {
        Some(ticks) => run_headless(scenario, ticks),
        None => run_2d(scenario),
    }

    Ok(())
}
