use std::{env, path::Path};

use anyhow::{Context, Result};
use log::{info, warn};
use regression_lab::{simulation::ConvergenceProfile, AppConfig, Playback, TrainingProgressSimulator};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config from '{path}'"))?,
        None => AppConfig::default(),
    };

    let run_config = config.run_config();
    let dataset = run_config.dataset().dataset();
    info!(
        "building '{}' model over {} samples: lr={:.3}, iterations={}",
        dataset.name,
        dataset.points.len(),
        run_config.learning_rate(),
        run_config.total_iterations()
    );

    let profile = ConvergenceProfile::for_learning_rate(run_config.learning_rate());
    if !profile.suits(run_config.total_iterations()) {
        warn!(
            "{}: {:?} iterations recommended",
            profile.effect(),
            profile.recommended_iterations()
        );
    }

    let mut simulator = TrainingProgressSimulator::new(config.seed);
    simulator.configure_with(run_config);

    let mut playback = Playback::new(simulator, config.tick_period())?;
    let mut updates = playback.subscribe();
    playback.start();
    playback.play();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let Some(snapshot) = updates.borrow_and_update().clone() else {
                    break;
                };
                println!("{}", serde_json::to_string(&snapshot)?);
                info!("progress {}", snapshot.progress_label());
                if snapshot.is_complete() {
                    break;
                }
            }
            _ = signal::ctrl_c() => {
                info!("interrupted, stopping playback");
                break;
            }
        }
    }

    playback.shutdown().await;
    Ok(())
}
