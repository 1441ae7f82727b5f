fn main() -> anyhow::Result<()> {
    nightswitch::run()?;
    Ok(())
}
