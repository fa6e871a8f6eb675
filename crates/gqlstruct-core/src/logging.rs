use tracing::Level;

pub fn default_logging() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre::eyre!(e))?;
    Ok(())
}
