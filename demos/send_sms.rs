use std::io;

use smsdesk::{ApiClient, FormField, Notice, SendForm};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = required_env("SMSDESK_SERVER_URL")?;
    let account_id = required_env("SMSDESK_ACCOUNT_ID")?;
    let phone = required_env("SMSDESK_PHONE")?;
    let message = std::env::var("SMSDESK_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsdesk demo.".to_owned());

    let client = ApiClient::new(base_url)?;

    let mut form = SendForm::new();
    form.update_field(FormField::AccountId, account_id);
    form.update_field(FormField::PhoneNumber, phone);
    form.update_field(FormField::Message, message);

    let Some(request) = form.submit() else {
        for field in FormField::ALL {
            if let Some(err) = form.field_error(field) {
                eprintln!("{}: {err}", field.label());
            }
        }
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "invalid send form input").into());
    };

    let outcome = client.send_sms(&request).await;
    form.resolve(outcome);

    match form.take_notice() {
        Some(Notice::Sent) => println!("Sent SMS"),
        Some(Notice::SendFailed(reason)) => {
            eprintln!("send failed: {reason}");
            return Err(io::Error::other(reason).into());
        }
        None => {}
    }

    Ok(())
}
