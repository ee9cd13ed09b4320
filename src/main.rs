// Entrypoint for the `tinyurl` command.
// - Keeps `main` small: parse arguments, set up logging, hand off to `ui::run`.
// - Errors are printed on one line with their causes and turn into exit status 1.

use clap::Parser;
use tinyurl_cli::{logging, ui};

fn main() {
    let cli = ui::Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = ui::run(&cli) {
        eprintln!("tinyurl: {}", ui::error_message(&err));
        std::process::exit(1);
    }
}
