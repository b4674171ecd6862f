use gsheets::{Credentials, SheetsClient};
use serde_json::json;
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let credentials = Credentials::from_env()?;
    let spreadsheet_id = env::var("GSHEETS_SPREADSHEET_ID")?;
    let sheet_title = env::var("GSHEETS_SHEET").unwrap_or_else(|_| "シート1".to_string());

    let client = SheetsClient::new(credentials, spreadsheet_id);

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let before = client.row_count(&sheet_title).await?;
    println!("{} currently has {} rows", sheet_title, before);

    let response = client
        .append_rows(
            &sheet_title,
            vec![vec![
                json!(today),
                json!("テスト"),
                json!("ジーテクト"),
                json!("新規"),
                json!("51A111"),
                json!(1.5),
            ]],
        )
        .await?;

    println!(
        "appended {} row(s) into {}",
        response.updates.updated_rows.unwrap_or(0),
        response.updates.updated_range,
    );

    Ok(())
}
