use std::io::{self, IsTerminal};

use clap::Parser;

use minierp_cli::{App, Cli, Settings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(cli, io::stdout().is_terminal());

    minierp_observability::init(settings.log_format, &settings.log_level);
    tracing::debug!(?settings, "starting interactive session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(settings.formatter(), stdin.lock(), stdout.lock());
    app.run()
}
