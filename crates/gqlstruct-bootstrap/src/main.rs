use gqlstruct_bootstrap::cli::Cli;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    gqlstruct_core::logging::default_logging()?;

    let args = std::env::args();
    let args = args.collect::<Vec<String>>();
    let args = args.iter().map(|s| s.as_str()).collect::<Vec<&str>>();

    Cli::new()?.execute(args.as_slice())?;

    Ok(())
}
