use std::io;

use geezsms::{ApiResponse, GeezSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("GEEZSMS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GEEZSMS_TOKEN environment variable is required",
        )
    })?;
    let phone = std::env::var("GEEZSMS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GEEZSMS_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("GEEZSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the geezsms example.".to_owned());

    let mut builder = GeezSmsClient::builder(token);
    if let Ok(shortcode_id) = std::env::var("GEEZSMS_SHORTCODE_ID") {
        builder = builder.shortcode_id(shortcode_id);
    }
    let client = builder.build()?;

    match client.send_sms(phone, message).await? {
        ApiResponse::Data(data) => println!("{}", serde_json::to_string_pretty(&data)?),
        ApiResponse::Failed(failure) => {
            eprintln!("{}: {}", failure.message, failure.error_details)
        }
    }

    Ok(())
}
