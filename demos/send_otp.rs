use std::io;

use geezsms::{GeezSmsClient, HttpMethod};

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
    // GEEZSMS_METHOD=POST switches the OTP call away from the default GET.
    let method = match std::env::var("GEEZSMS_METHOD") {
        Ok(value) => value.parse::<HttpMethod>()?,
        Err(_) => HttpMethod::Get,
    };

    let client = GeezSmsClient::new(token)?;
    let response = client.send_otp_with_method(phone, method).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
