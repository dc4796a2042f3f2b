use argh::FromArgs;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use shapematch::algebra::Vec2;
use shapematch::align::{self, io::PointSets, MatchParams};

#[derive(FromArgs)]
/// Find which target point corresponds to which template point
struct Args {
    /// path to a JSON file with `template` and `target` point lists
    #[argh(option)]
    input: Option<PathBuf>,

    /// path to write the match result as JSON
    #[argh(option)]
    output: Option<PathBuf>,

    /// shuffle the target points before matching
    #[argh(switch)]
    scramble: bool,

    /// seed used by --scramble
    #[argh(option, default = "42")]
    seed: u64,
}

/// A 5x5 square and the same square turned a quarter turn and shifted by (3, 4).
fn square_scenario() -> PointSets {
    let template = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(5.0, 0.0),
        Vec2::new(0.0, 5.0),
        Vec2::new(5.0, 5.0),
    ];
    let shift = Vec2::new(3.0, 4.0);
    let moved = template
        .iter()
        .map(|p| p.rotated(std::f64::consts::FRAC_PI_2) + shift)
        .collect::<Vec<_>>();

    // listed as [c, a, b, d]
    let target = vec![moved[2], moved[0], moved[1], moved[3]];

    PointSets { template, target }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut sets = match &args.input {
        Some(path) => align::io::read_point_sets(path)?,
        None => square_scenario(),
    };

    if args.scramble {
        let mut rng = StdRng::seed_from_u64(args.seed);
        sets.target.shuffle(&mut rng);
    }

    println!("Template: {:?}", sets.template);
    println!("Target:   {:?}", sets.target);

    // create a cancel token to stop the search
    let cancel_token = Arc::new(AtomicBool::new(false));

    ctrlc::set_handler({
        let cancel_token = cancel_token.clone();
        move || {
            println!("Received Ctrl-C signal. Sending cancel signal !!");
            cancel_token.store(true, Ordering::SeqCst);
        }
    })?;

    let params = MatchParams::default().with_cancel(cancel_token);

    let now = std::time::Instant::now();
    let result = align::match_points_with(&sets.template, &sets.target, &params)?;
    log::info!("Matching took {:?}", now.elapsed());

    println!("Error: {}", result.error);
    for (i, (expected, &j)) in result
        .expectations
        .iter()
        .zip(&result.correspondence)
        .enumerate()
    {
        println!(
            "template[{i}] -> target[{j}] {:?}, expected at {:?}",
            sets.target[j], expected
        );
    }
    println!("Similarity: {}", serde_json::to_string(&result.similarity)?);

    if let Some(path) = &args.output {
        align::io::write_match_result(path, &result)?;
        println!("Wrote result to {}", path.display());
    }

    Ok(())
}
