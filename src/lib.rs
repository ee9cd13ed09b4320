// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the `tinyurl` command.
//
// Module responsibilities:
// - `api`: Encapsulates the HTTP call to the shortening service.
// - `config`: Endpoint, timeout and trim settings, layered from defaults,
//   a JSON file, environment variables and CLI flags.
// - `error`: The error type returned by `api`.
// - `logging`: tracing subscriber setup for the binary.
// - `ui`: Command-line flows (argument parsing, prompt, output) that
//   delegate requests to `api`.
//
// The library can be used without the CLI:
//
//     let config = tinyurl_cli::config::ShortenerConfig::default();
//     let short = tinyurl_cli::api::shorten_url("https://example.com", &config)?;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use api::{shorten_url, ShortenerClient};
pub use config::ShortenerConfig;
pub use error::ShortenError;
