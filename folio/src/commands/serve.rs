use folio_api_rest::RestServer;
use folio_config::Config;
use folio_core_contact_impl::ContactServiceImpl;
use folio_extern_impl::{
    http::HttpClient,
    sheets::{SheetsApiServiceConfig, SheetsApiServiceImpl},
};
use folio_shared_impl::time::TimeServiceImpl;
use tracing::info;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let sheets = sheets_service(&config)?;
    let contact = ContactServiceImpl::new(TimeServiceImpl, sheets);
    let server = RestServer::new(contact);

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

pub(crate) fn sheets_service(
    config: &Config,
) -> anyhow::Result<SheetsApiServiceImpl<TimeServiceImpl>> {
    let sheets_config = SheetsApiServiceConfig::new(
        config.sheets.client_email.clone(),
        &config.sheets.private_key,
        config.sheets.spreadsheet_id.clone(),
        config.sheets.worksheet_range.clone(),
        config.sheets.token_endpoint_override.clone(),
        config.sheets.api_base_override.clone(),
    )?;
    Ok(SheetsApiServiceImpl::new(
        sheets_config,
        TimeServiceImpl,
        HttpClient::default(),
    ))
}
