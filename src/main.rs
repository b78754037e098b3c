use std::fs;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use env_logger::Env;
use log::info;

use surge2clash::utils::{upload_gist, web_get};
use surge2clash::{surge_to_clash_with, Settings};

/// Convert a Surge subscription profile into a Clash configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "input"])))]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Subscription URL to download the profile from
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Local profile file to convert
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Output file path; the document is printed when neither this nor a gist is given
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,

    /// Gist to upload the generated document to; overrides `GIST_ID`
    #[arg(long, value_name = "ID")]
    gist_id: Option<String>,

    /// File name inside the gist; overrides `FILE_NAME`
    #[arg(long, value_name = "NAME")]
    filename: Option<String>,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match args.config.as_deref() {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => Settings::default(),
    };
    settings.apply_env();
    settings.override_gist(args.gist_id.as_deref(), args.filename.as_deref());
    Ok(settings)
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let settings = load_settings(&args)?;

    let profile = match (&args.url, &args.input) {
        (Some(url), _) => {
            info!("Downloading subscription from {}", url);
            web_get(url, &settings.http).context("Failed to download subscription")?
        }
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        (None, None) => bail!("Either --url or --input must be provided"),
    };

    let document =
        surge_to_clash_with(&profile, &settings.convert).context("Failed to convert profile")?;

    if let Some(output) = args.output.as_deref() {
        fs::write(output, &document).with_context(|| format!("Failed to write {}", output))?;
        info!("Successfully wrote configuration to {}", output);
    }

    if settings.gist.id.is_some() {
        let token = std::env::var("GITHUB_TOKEN").unwrap_or_default();
        upload_gist(&settings.gist, &token, &document, &settings.http)
            .context("Failed to upload gist")?;
    } else if args.output.is_none() {
        print!("{}", document);
    }

    Ok(())
}
