use clap::{Parser, Subcommand};
use mdmodels::{config, loader, output, pipeline, routes};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Called once at startup; the leaked string lives for the process.
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "mdmodels")]
#[command(about = "Markdown content pipeline for static sites")]
#[command(long_about = "\
Markdown content pipeline for static sites

Your filesystem is the data source. Each subdirectory of the content root
is a collection of markdown documents; a build pass renders every body to
HTML and writes the JSON artifacts a static site generator consumes.

Content structure:

  models/
  ├── posts/                       # Collection = subdirectory
  │   ├── images/                  # Assets, copied to the output tree
  │   ├── first-post.md            # Front-matter + markdown body
  │   └── second-post.md
  └── pages/
      └── about.md

Artifacts, per collection, under {output_dir}/{input_dir}/{collection}/:

  {id}.json                        # Full rendered document record
  authors.json                     # Author index, first-seen order
  categories.json                  # Category index, first-seen order
  tags.json                        # Tag index, first-seen order
  {view}.json / {view}-{n}.json    # Sorted (optionally paginated) lists
  images/                          # Copied assets

Run 'mdmodels gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project root (contains config.toml and the content directory)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file path (default: {root}/config.toml, falling back to defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: load → render → index → list → persist
    Build,
    /// Load and report collections without writing anything
    Check,
    /// Print every derived route, one per line
    Routes,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = load_config(&cli)?;
            let summary = pipeline::run(&config, &cli.root)?;
            output::print_build_output(&summary);
        }
        Command::Check => {
            let config = load_config(&cli)?;
            let collections = loader::load_collections(&cli.root.join(&config.input_dir))?;
            output::print_check_output(&collections);
            println!();
            println!("Content is valid");
        }
        Command::Routes => {
            let config = load_config(&cli)?;
            let collections = loader::load_collections(&cli.root.join(&config.input_dir))?;
            for route in routes::derive_routes(&collections) {
                println!("{}", route.route);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<config::PipelineConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => config::load_config_file(path),
        None => config::load_config(&cli.root),
    }
}
