use std::io;

use smsdesk::{ApiClient, Column, HistoryView, StatusIndicator, poll_once};

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
    let client = ApiClient::new(base_url)?;

    let mut view = HistoryView::new();
    match std::env::var("SMSDESK_SORT") {
        Ok(sort) => {
            for id in sort.split(',').filter(|id| !id.trim().is_empty()) {
                match Column::from_id(id.trim()) {
                    Some(column) if Column::SORT_OPTIONS.contains(&column) => {
                        view.toggle_sort(column);
                    }
                    _ => eprintln!("ignoring unknown sort column: {id}"),
                }
            }
        }
        Err(_) => view.toggle_sort(Column::Date),
    }
    if let Ok(filter) = std::env::var("SMSDESK_FILTER_ACCOUNT") {
        view.set_text_filter(Column::AccountId, filter);
    }

    let mut ticker = tokio::time::interval(HistoryView::POLL_INTERVAL);
    loop {
        ticker.tick().await;
        poll_once(&client, &mut view).await;
        render(&view);
    }
}

fn render(view: &HistoryView) {
    // Redraw in place, like watch(1).
    print!("\x1b[2J\x1b[H");
    if view.is_stale() {
        println!("(stale: last refresh failed, showing previous rows)");
    }
    println!(
        "{:<26} {:<20} {:<12} {:<32} {}",
        Column::Date.label(),
        Column::AccountId.label(),
        Column::PhoneNumber.label(),
        Column::Message.label(),
        Column::Status.label(),
    );
    for row in view.visible_rows() {
        println!(
            "{:<26} {:<20} {:<12} {:<32} {}",
            row.date.display(),
            row.account_id,
            row.phone_number,
            row.message,
            StatusIndicator::from(&row.status).label(),
        );
    }
}
