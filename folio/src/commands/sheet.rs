use folio_config::Config;
use folio_extern_contracts::sheets::SheetsApiService;
use tracing::info;

use super::serve::sheets_service;

/// One-time setup: writes the column titles into the first worksheet row.
pub async fn init_sheet(config: Config) -> anyhow::Result<()> {
    let sheets = sheets_service(&config)?;
    sheets.write_header().await?;
    info!("Header row written");
    Ok(())
}
