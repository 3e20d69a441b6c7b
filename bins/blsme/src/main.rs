use blsme::{cmd::MainCmd, logger};
use clap::Parser;
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cmd = MainCmd::parse();
    let _guard = logger::init(cmd.log_level)?;

    cmd.run()?;

    Ok(())
}
