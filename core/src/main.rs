fn main() -> anyhow::Result<()> {
    nightingale_core::logging::init_logging()?;
    nightingale_core::announce();
    Ok(())
}
