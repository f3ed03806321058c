use std::io;

use mobizon::{Alphaname, MessageText, MobizonClient, Recipient, SendOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("MOBIZON_API_KEY")?;
    let api_server = required_env("MOBIZON_API_SERVER")?;
    let phone = required_env("MOBIZON_PHONE")?;
    let message = std::env::var("MOBIZON_MESSAGE")
        .unwrap_or_else(|_| "Hello from the mobizon example.".to_owned());

    let options = SendOptions {
        from: std::env::var("MOBIZON_ALPHANAME")
            .ok()
            .map(Alphaname::new)
            .transpose()?,
        ..Default::default()
    };

    let client = MobizonClient::new(api_key, api_server)?;
    let response = client
        .send_message(MessageText::new(message)?, Recipient::new(phone)?, options)
        .await?;
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
