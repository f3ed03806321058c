use std::io;

use mobizon::{CampaignName, CreateCampaign, MessageText, MobizonClient, Recipient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("MOBIZON_API_KEY")?;
    let api_server = required_env("MOBIZON_API_SERVER")?;
    let phones = required_env("MOBIZON_PHONES")?;

    let recipients = phones
        .split(',')
        .map(Recipient::new)
        .collect::<Result<Vec<_>, _>>()?;

    let client = MobizonClient::new(api_key, api_server)?;

    let request = CreateCampaign {
        rate_limit: Some(10),
        rate_period: Some(60),
        ..CreateCampaign::new(
            CampaignName::new("demo campaign")?,
            MessageText::new("Hello from the mobizon campaign example.")?,
        )
    };
    let created = client.create_campaign(request).await?.envelope()?;
    // `data` is the new campaign id, sent either as a number or as a string.
    let campaign_id = created.data.get().trim_matches('"').parse::<u64>()?;
    println!("created campaign {campaign_id}");

    client.add_campaign_recipients(campaign_id, recipients).await?;
    let started = client.start_campaign(campaign_id).await?;
    println!("{}", started.as_str());

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
