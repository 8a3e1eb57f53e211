use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mosaic_gal::clock::{self, FixedClock, SystemClock};
use mosaic_gal::config::{self, GalleryConfig};
use mosaic_gal::gallery::{self, LayoutRequest};
use mosaic_gal::layout::{LayoutEngine, Mode};
use mosaic_gal::manifest::{FileManifestSource, ManifestSource};
use mosaic_gal::{output, scan};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Shared flags for commands that plan a layout.
#[derive(clap::Args, Clone)]
struct LayoutArgs {
    /// Viewport width in CSS pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Presentation mode (defaults to layout.mode from gallery.toml)
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Shuffle as on this day (YYYY-MM-DD, UTC) instead of today
    #[arg(long, conflicts_with = "seed")]
    date: Option<NaiveDate>,

    /// Explicit shuffle seed (day number since the Unix epoch)
    #[arg(long)]
    seed: Option<i64>,
}

impl LayoutArgs {
    fn request(&self, config: &GalleryConfig) -> LayoutRequest {
        let seed = match (self.seed, self.date) {
            (Some(seed), _) => seed,
            (None, Some(date)) => clock::seed_from_clock(&FixedClock::at_date(date)),
            (None, None) => clock::seed_from_clock(&SystemClock),
        };
        LayoutRequest {
            mode: self.mode.unwrap_or(config.layout.mode),
            viewport_width: self.width,
            seed,
        }
    }
}

#[derive(Parser)]
#[command(name = "mosaic-gal")]
#[command(about = "Photo gallery renderer with a daily-shuffled mosaic and a lightbox")]
#[command(long_about = "\
Photo gallery renderer with a daily-shuffled mosaic and a lightbox

The gallery is driven by a manifest mapping categories to photos:

  site/
  ├── gallery.toml                 # Optional config (see gen-config)
  ├── index.html                   # Written by `render`
  └── photos/
      ├── manifest.json            # {\"Birds\": [\"a.jpg\", \"b.jpg\"], \"Coins\": [\"c.jpg\"]}
      ├── Birds/
      │   ├── a.jpg
      │   └── b.jpg
      └── Coins/
          └── c.jpg

Layouts:
  column   All photos shuffled once per day, split across 2-5 columns by width
  row      One horizontally scrolling row per category, manifest order

Run 'mosaic-gal scan' to write manifest.json from the photo directories.")]
#[command(version)]
struct Cli {
    /// Site root (holds gallery.toml and the photos directory)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the layout plan for a viewport width
    Plan {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the gallery page as HTML
    Render {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Output file (default: <root>/index.html)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Build manifest.json from the photos directory
    Scan,
    /// Validate config and manifest, then summarize the plan
    Check {
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Plan { layout, json } => {
            let config = config::load_config(&cli.root)?;
            let manifest = manifest_source(&cli.root, &config).fetch_manifest().await?;
            let request = layout.request(&config);
            let engine = LayoutEngine::new(&config.layout, config.shuffle.hash);
            let plan = engine.plan(
                &manifest,
                request.viewport_width,
                request.mode,
                request.seed,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output::print_plan(&plan, &config.photos_dir, request.seed);
            }
        }
        Command::Render { layout, output } => {
            let config = config::load_config(&cli.root)?;
            let source = manifest_source(&cli.root, &config);
            let request = layout.request(&config);
            let (page, plan) = gallery::build_page(&source, &config, request).await;

            let output_path = output.unwrap_or_else(|| cli.root.join("index.html"));
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output_path, page.into_string())?;

            match plan {
                Some(plan) => println!(
                    "Rendered {} photos ({:?} mode) → {}",
                    plan.photo_count(),
                    request.mode,
                    output_path.display()
                ),
                None => println!(
                    "Rendered page without gallery → {}",
                    output_path.display()
                ),
            }
        }
        Command::Scan => {
            let config = config::load_config(&cli.root)?;
            let photos_dir = cli.root.join(&config.photos_dir);
            println!("==> Scanning {}", photos_dir.display());
            let manifest = scan::scan(&photos_dir)?;
            let manifest_path = cli.root.join(&config.manifest);
            if let Some(parent) = manifest_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&manifest_path, manifest.to_json_pretty()?)?;
            output::print_manifest_summary(&manifest);
            println!("==> Wrote {}", manifest_path.display());
        }
        Command::Check { layout } => {
            let config = config::load_config(&cli.root)?;
            let source = manifest_source(&cli.root, &config);
            println!("==> Checking {}", source.path().display());
            let manifest = source.fetch_manifest().await?;
            output::print_manifest_summary(&manifest);

            let request = layout.request(&config);
            let engine = LayoutEngine::new(&config.layout, config.shuffle.hash);
            let plan = engine.plan(
                &manifest,
                request.viewport_width,
                request.mode,
                request.seed,
            );
            if let Some(header) = output::format_plan(&plan, &config.photos_dir, request.seed)
                .into_iter()
                .next()
            {
                println!("{header}");
            }
            println!("==> Manifest is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so plan and scan output on stdout stay clean.
///
/// Defaults to `warn`; override with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn manifest_source(root: &Path, config: &GalleryConfig) -> FileManifestSource {
    FileManifestSource::new(root.join(&config.manifest))
}
