use std::io;

use geezsms::GeezSmsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("GEEZSMS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GEEZSMS_TOKEN environment variable is required",
        )
    })?;
    let phones_raw = std::env::var("GEEZSMS_PHONES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GEEZSMS_PHONES environment variable is required (comma-separated)",
        )
    })?;
    let message = std::env::var("GEEZSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the geezsms bulk example.".to_owned());
    let notify_url = std::env::var("GEEZSMS_NOTIFY_URL").unwrap_or_default();

    let mut builder = GeezSmsClient::builder(token);
    if let Ok(group_id) = std::env::var("GEEZSMS_GROUP_ID") {
        builder = builder.group_id(group_id);
    }
    let client = builder.build()?;

    let phones = phones_raw
        .split(',')
        .map(str::trim)
        .filter(|phone| !phone.is_empty())
        .collect::<Vec<_>>();

    let response = client.send_bulk(phones, message, notify_url).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
