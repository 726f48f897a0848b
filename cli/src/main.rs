use anyhow::{Context, Result};
use pet_gallery::{logging, Config, Session, Transport};
use pet_gallery_core::PetClient;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(config.log_format);

    let mut session = Session::new(
        Transport::new(),
        PetClient::new(&config.endpoint),
        config.output_dir.clone(),
    );
    let summary = session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("Terminal I/O failed")?;

    if summary.failed > 0 {
        eprintln!("{} download(s) failed, see log for details", summary.failed);
    }
    Ok(())
}
