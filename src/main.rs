//! gallery-gen - static photo-archive gallery generator
//!
//! Scans timestamp-named images under the posts and stories media roots,
//! clusters temporally-adjacent shots into series, and writes one static
//! HTML page with tabbed POSTS/STORIES sections.
//!
//! Module structure:
//! - `domain/` - Core entities (ImageFile, Group, Section)
//! - `io/` - Filesystem edges (scanner, page writer)
//! - `services/` - Pipeline logic (grouper, renderer, page, builder)
//! - `infra/` - Infrastructure (config, run stats)

use clap::Parser;
use gallery_gen::infra::Config;
use gallery_gen::io::PageWriter;
use gallery_gen::services::GalleryBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Static photo-archive gallery generator
#[derive(Parser, Debug)]
#[command(name = "gallery-gen", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging with configurable level via RUST_LOG env var
    // Default: INFO, use RUST_LOG=debug to see per-group clustering events
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), git = env!("GIT_HASH"), "gallery-gen starting");

    let args = Args::parse();
    let config = Config::load_from_path(&args.config);

    info!(
        config_file = %config.config_file(),
        posts_dir = %config.posts_dir().display(),
        stories_dir = %config.stories_dir().display(),
        max_items = %config.max_items(),
        threshold_ms = %config.threshold_ms(),
        output_dir = %config.output_dir().display(),
        "config_loaded"
    );

    let writer = PageWriter::new(config.output_dir(), config.output_file_name());

    let mut builder = GalleryBuilder::new(config);
    let html = builder.build();
    let path = writer.write(&html)?;

    builder.summary().log();
    info!(path = %path.display(), "gallery-gen done");
    Ok(())
}
