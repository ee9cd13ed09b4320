// UI layer: command-line arguments, the optional interactive prompt and
// result printing. Everything network-related is delegated to `api`.

use crate::api::ShortenerClient;
use crate::config::{ConfigLayer, ShortenerConfig};
use anyhow::{bail, Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Shorten a URL using TinyURL.
#[derive(Debug, Parser)]
#[command(name = "tinyurl", version, about)]
pub struct Cli {
    /// The URL to shorten. Prompted for when omitted on a terminal.
    #[arg(value_name = "URL", value_parser = NonEmptyStringValueParser::new(), conflicts_with = "url_flag")]
    pub url: Option<String>,

    /// The URL to shorten, as a flag.
    #[arg(long = "url", value_name = "URL", value_parser = NonEmptyStringValueParser::new())]
    pub url_flag: Option<String>,

    /// Trim whitespace around the service response (the default). Overrides
    /// `"trim": false` in the config file.
    #[arg(long, overrides_with = "no_trim")]
    pub trim: bool,

    /// Print the service response as-is, without trimming whitespace.
    #[arg(long, overrides_with = "trim")]
    pub no_trim: bool,

    /// Shortening endpoint [default: http://tinyurl.com/api-create.php]
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds [default: 10]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Config file to read instead of the per-user one.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON object with the original and shortened URL.
    #[arg(long)]
    pub json: bool,

    /// Log request details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// URL from either the positional argument or `--url`.
    pub fn target_url(&self) -> Option<&str> {
        self.url.as_deref().or(self.url_flag.as_deref())
    }

    /// The configuration overrides given on the command line.
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout,
            trim: match (self.trim, self.no_trim) {
                (_, true) => Some(false),
                (true, false) => Some(true),
                (false, false) => None,
            },
        }
    }

    /// File layer: the `--config` path must exist, the per-user one may not.
    fn file_layer(&self) -> Result<ConfigLayer> {
        match &self.config {
            Some(path) => {
                if !path.exists() {
                    bail!("config file {} does not exist", path.display());
                }
                ConfigLayer::from_file(path)
            }
            None => match ConfigLayer::default_path() {
                Some(path) => ConfigLayer::from_file(&path),
                None => Ok(ConfigLayer::default()),
            },
        }
    }

    /// Merge defaults, config file, environment and flags.
    pub fn resolve_config(&self) -> Result<ShortenerConfig> {
        let layers = [self.file_layer()?, ConfigLayer::from_env()?, self.layer()];
        ShortenerConfig::resolve(&layers).context("Invalid configuration")
    }
}

/// JSON shape printed with `--json`.
#[derive(Serialize, Debug)]
pub struct ShortenOutput<'a> {
    pub url: &'a str,
    pub short_url: &'a str,
}

/// Run one shortening from parsed arguments and print the result.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    tracing::debug!(?config, "resolved configuration");

    let url = match cli.target_url() {
        Some(url) => url.to_string(),
        None => prompt_url()?,
    };

    let client = ShortenerClient::new(config).context("Failed to build HTTP client")?;

    // The spinner hides itself when stderr is not a terminal.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Shortening...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = client.shorten(&url);
    spinner.finish_and_clear();

    let short = result?;
    let stdout = std::io::stdout();
    write_output(&mut stdout.lock(), &url, &short, cli.json)
}

/// One-line message for a failed run: the error and its causes joined by
/// `": "`. A cause whose text is already part of the message is skipped,
/// since hyper and reqwest errors repeat their inner errors in `Display`.
pub fn error_message(err: &anyhow::Error) -> String {
    let mut msg = String::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if msg.contains(&text) {
            continue;
        }
        if !msg.is_empty() {
            msg.push_str(": ");
        }
        msg.push_str(&text);
    }
    msg
}

/// Write the result line: the bare short URL, or the JSON object.
pub fn write_output(out: &mut impl Write, url: &str, short: &str, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&ShortenOutput {
            url,
            short_url: short,
        })?;
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "{short}")?;
    }
    out.flush()?;
    Ok(())
}

/// Ask for the URL on the terminal. Refuses to block on piped stdin.
fn prompt_url() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        bail!("no URL given; pass it as an argument or with --url");
    }
    let url: String = Input::new()
        .with_prompt("URL to shorten")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("URL must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(url.trim().to_string())
}
