use folio_core_contact_contracts::{ContactService, ContactSubmitError};
use folio_extern_contracts::sheets::SheetsApiService;
use folio_models::contact::{ContactSubmission, SheetRow};
use folio_shared_contracts::time::TimeService;

mod timestamp;

pub use timestamp::sheet_timestamp;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Time, Sheets> {
    time: Time,
    sheets: Sheets,
}

impl<Time, Sheets> ContactServiceImpl<Time, Sheets> {
    pub fn new(time: Time, sheets: Sheets) -> Self {
        Self { time, sheets }
    }
}

impl<Time, Sheets> ContactService for ContactServiceImpl<Time, Sheets>
where
    Time: TimeService,
    Sheets: SheetsApiService,
{
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        let row = SheetRow::new(sheet_timestamp(self.time.now()), submission);

        self.sheets.append_row(row).await.map_err(|err| {
            // The caller only ever sees the opaque error; full detail stays in
            // the server log.
            tracing::error!("Failed to append contact submission: {err:#}");
            ContactSubmitError::Append
        })
    }
}
