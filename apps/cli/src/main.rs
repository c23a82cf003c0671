use marketcap_cli::{config::Config, handle_bytes, init_tracing};
use marketcap_core::LookupResponse;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let mut input = Vec::new();
    let response = match tokio::io::stdin().read_to_end(&mut input).await {
        Ok(_) => handle_bytes(&input, &config).await,
        Err(e) => {
            tracing::error!("Failed to read stdin: {}", e);
            LookupResponse::invalid_input()
        }
    };

    let mut line = response.to_json()?;
    line.push('\n');
    let mut stdout = tokio::io::stdout();
    stdout.write_all(line.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
