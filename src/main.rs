//! Flappy Pixel entry point
//!
//! The native build drives the simulation headless at its fixed rate, with
//! every layer on its placeholder, and prints a summary of the final state.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use serde_json::json;

    use flappy_pixel::assets::AssetId;
    use flappy_pixel::consts::SIM_DT;
    use flappy_pixel::sim::DifficultyId;
    use flappy_pixel::{Game, Settings};

    /// Headless runner for the Flappy Pixel simulation
    #[derive(Parser)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Difficulty preset (easy, normal, hard)
        #[arg(short, long)]
        difficulty: Option<DifficultyId>,
        /// Seed for obstacle placement
        #[arg(short, long)]
        seed: Option<u64>,
        /// Number of 60 Hz frames to simulate
        #[arg(short, long, default_value_t = 3600)]
        ticks: u64,
        /// JSON settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Let the autopilot play
        #[arg(short, long)]
        autopilot: bool,
        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    }

    fn init_logging(verbose: bool) {
        let level = if verbose { "debug" } else { "info" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        init_logging(args.verbose);
        log::info!("Flappy Pixel (native) starting...");

        let mut settings = match &args.config {
            Some(path) => Settings::load_file(path)?,
            None => Settings::default(),
        };
        if let Some(difficulty) = args.difficulty {
            settings.difficulty = difficulty;
        }
        if args.seed.is_some() {
            settings.seed = args.seed;
        }
        settings.autopilot |= args.autopilot;

        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut game = Game::new(&settings, seed).context("invalid game configuration")?;

        // No image decoding here; every layer renders its placeholder
        for id in AssetId::ALL {
            game.assets_mut().mark_failed(id, "headless build");
        }

        let mut vertices = 0;
        for _ in 0..args.ticks {
            vertices = game.frame(SIM_DT).vertices().len();
        }

        let snapshot = game.snapshot();
        log::info!(
            "Finished {} frames: phase {:?}, score {}, high score {}",
            args.ticks,
            snapshot.phase,
            snapshot.score,
            snapshot.high_score
        );

        let summary = json!({
            "seed": snapshot.seed,
            "difficulty": snapshot.difficulty,
            "frames": args.ticks,
            "phase": snapshot.phase,
            "score": snapshot.score,
            "high_score": snapshot.high_score,
            "live_obstacles": snapshot.obstacles.len(),
            "last_frame_vertices": vertices,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser driver yet; the library is the deliverable on wasm
}
