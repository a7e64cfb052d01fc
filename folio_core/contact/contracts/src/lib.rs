use std::future::Future;

use folio_models::contact::ContactSubmission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Appends the submission as a timestamped row to the contact worksheet.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    /// The remote spreadsheet service rejected or failed the append. The cause
    /// has already been logged and is deliberately not carried here.
    #[error("Failed to save submission.")]
    Append,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
