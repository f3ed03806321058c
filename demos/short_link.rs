use std::io;

use chrono::{Duration, Local};
use mobizon::{CreateLink, FullLink, MobizonClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("MOBIZON_API_KEY")?;
    let api_server = required_env("MOBIZON_API_SERVER")?;
    let target = required_env("MOBIZON_LINK")?;

    let client = MobizonClient::new(api_key, api_server)?;

    let request = CreateLink {
        expiration_date: Some(Local::now().date_naive() + Duration::days(30)),
        comment: Some("created by the mobizon example".to_owned()),
        ..CreateLink::new(FullLink::new(target)?)
    };
    let response = client.create_link(request).await?;
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
