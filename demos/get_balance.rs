use std::io;

use mobizon::MobizonClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("MOBIZON_API_KEY")?;
    let api_server = required_env("MOBIZON_API_SERVER")?;

    let client = MobizonClient::new(api_key, api_server)?;
    let response = client.get_balance().await?;

    let envelope = response.envelope()?;
    println!("code: {}, data: {}", envelope.code, envelope.data.get());

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
