use std::io;

use mobizon::{MobizonClient, ResponseFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("MOBIZON_API_KEY")?;
    let api_server = required_env("MOBIZON_API_SERVER")?;
    let ids_raw = required_env("MOBIZON_MESSAGE_IDS")?;

    let ids = ids_raw
        .split(',')
        .map(|id| id.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()?;

    let client = MobizonClient::builder(api_key, api_server)
        .format(ResponseFormat::Xml)
        .timeout_secs(10)
        .build()?;
    let response = client.get_message_status(&ids).await?;
    println!("{}", response.as_str());

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
