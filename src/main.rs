use swingby::{Scenario, ScenarioConfig, Vector2D, World, Viewport, DEFAULT_DT};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless Newtonian gravity for a few bodies")]
struct Args {
    /// Scenario YAML, relative paths are looked up in scenarios/
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Built-in scenario used when no file is given
    #[arg(long, default_value = "earth-moon-spacecraft")]
    preset: String,

    /// Generate this many random bodies instead
    #[arg(long)]
    random: Option<usize>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Ticks to run, overrides the scenario
    #[arg(long)]
    steps: Option<u64>,

    /// Report body states every N ticks
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let scenario = if let Some(file) = &args.file {
        let path = if file.is_absolute() {
            file.clone()
        } else {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
        };
        Scenario::build_scenario(ScenarioConfig::from_path(&path)?)?
    } else if let Some(count) = args.random {
        Scenario::random(count, args.seed, DEFAULT_DT)?
    } else {
        Scenario::preset(&args.preset)?
    };
    Ok(scenario)
}

fn report(world: &World, viewport: &Viewport) {
    info!("t = {:.0} s", world.time());
    for body in world.bodies() {
        let screen = viewport.to_screen(body.x);
        info!(
            "{}: position ({:.3e}, {:.3e}) m, screen ({:.2}, {:.2}), velocity ({:.2}, {:.2}) m/s",
            body.name(),
            body.x.x,
            body.x.y,
            screen.x,
            screen.y,
            body.v.x,
            body.v.y
        );
    }
    if let Some(first) = world.bodies().first() {
        info!("{} speed: {:.2} m/s", first.name(), first.v.length());
    }
}

fn main() -> Result<()> {
    let _logger = swingby::logging::setup()?;
    let args = Args::parse();

    let Scenario {
        mut world,
        steps,
        viewport,
    } = load_scenario(&args)?;
    let steps = args.steps.unwrap_or(steps);
    let every = args.report_every.max(1);

    info!(
        "running {} bodies for {} steps of {} s",
        world.bodies().len(),
        steps,
        world.dt()
    );
    let p0 = world.total_momentum();
    let e0 = world.total_energy();
    report(&world, &viewport);

    for i in 1..=steps {
        world.step();
        if i % every == 0 {
            report(&world, &viewport);
        }
    }

    let p1 = world.total_momentum();
    let e1 = world.total_energy();
    info!(
        "momentum drift ({:.3e}, {:.3e}) kg m/s, energy {:.6e} -> {:.6e} J",
        p1.x - p0.x,
        p1.y - p0.y,
        e0,
        e1
    );

    Ok(())
}
