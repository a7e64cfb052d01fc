use std::future::Future;

use folio_models::contact::SheetRow;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SheetsApiService: Send + Sync + 'static {
    /// Appends one row to the end of the configured worksheet range.
    fn append_row(&self, row: SheetRow) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Writes the column titles into the first row of the worksheet.
    fn write_header(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockSheetsApiService {
    pub fn with_append_row(mut self, row: SheetRow, result: anyhow::Result<()>) -> Self {
        self.expect_append_row()
            .once()
            .with(mockall::predicate::eq(row))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
