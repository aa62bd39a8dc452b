use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static site from Markdown files")]
struct Cli {
    /// Log every copied file and generated page
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the whole site
    Build {
        /// Site config file
        #[arg(short, long, default_value = "site.toml")]
        config: PathBuf,

        /// Override the configured base path
        #[arg(long)]
        base_path: Option<String>,
    },
    /// Render a single Markdown file into a page
    Page {
        /// Input Markdown file
        input: PathBuf,

        /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
        #[arg(short, long, default_value = "template.html")]
        template: PathBuf,

        /// Output HTML file (defaults to input name with .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = "/")]
        base_path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Command::Build { config, base_path } => {
            let root = config
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default();
            let mut site = mdsite::Config::load(&config)?.relative_to(&root);
            if let Some(base_path) = base_path {
                site.site.base_path = base_path;
            }

            let report = mdsite::build_site(&site).context("site build failed")?;
            if report.skipped > 0 {
                bail!("{} of {} pages failed", report.skipped, report.generated + report.skipped);
            }
            println!(
                "Built {} pages into {}",
                report.generated,
                site.paths.output.display()
            );
        }
        Command::Page {
            input,
            template,
            output,
            base_path,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension("html"));
            mdsite::generate_page(&input, &template, &output, &base_path)?;
            println!("Created {}", output.display());
        }
    }

    Ok(())
}
