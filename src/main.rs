use clap::Parser;

use sidemenu::{actions, cli, logging};

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init()?;
    actions::handle(args)
}
