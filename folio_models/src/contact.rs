use serde::Serialize;

/// A contact form submission. Field-level validation happens at the REST
/// boundary, so a value of this type has already passed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Column titles of the contact worksheet, in the same order as [`SheetRow`].
pub const SHEET_HEADER: [&str; 5] = ["Date", "Full Name", "Phone", "Email", "Message"];

/// One worksheet row in the fixed column order the spreadsheet consumer
/// expects. Rows are only ever appended, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetRow(pub [String; 5]);

impl SheetRow {
    pub fn new(timestamp: String, submission: ContactSubmission) -> Self {
        Self([
            timestamp,
            submission.full_name,
            submission.phone,
            submission.email,
            submission.message,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_row_column_order() {
        let row = SheetRow::new(
            "09-03-2024 2:05pm".into(),
            ContactSubmission {
                full_name: "Jane Doe".into(),
                phone: "+1234567890".into(),
                email: "jane@example.com".into(),
                message: "Hi".into(),
            },
        );

        assert_eq!(
            row.0,
            [
                "09-03-2024 2:05pm",
                "Jane Doe",
                "+1234567890",
                "jane@example.com",
                "Hi"
            ]
            .map(String::from)
        );
    }
}
