#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = skilltrack_records::run().await {
        eprintln!("skilltrack-records fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
