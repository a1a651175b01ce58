use clap::Parser;

use invopt_cli::Cli;

fn main() -> anyhow::Result<()> {
    invopt_observability::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    invopt_cli::run(cli, &mut stdout.lock())
}
