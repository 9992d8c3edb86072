use std::io::{stdin, stdout};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_recommender::{cli::Session, config::Config, services::Recommender};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the prompt
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let recommender = Recommender::from_csv(&config.movies_path)
        .with_context(|| format!("Failed to load movies from {}", config.movies_path))?;

    let session = Session {
        num_recommendations: config.num_recommendations,
        sample_size: config.sample_size,
    };

    session.run(&recommender, stdin().lock(), &mut stdout().lock())?;
    Ok(())
}
