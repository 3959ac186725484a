//! Downloadable starting template for roster uploads.

/// Columns every roster upload must provide, in template order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "email", "position", "department"];

/// File name offered when the template is downloaded.
pub const TEMPLATE_FILE_NAME: &str = "employee_template.csv";

const TEMPLATE: &str = "name,email,position,department\n\
                        John Doe,john.doe@example.com,Developer,Engineering";

/// Header line plus one example row.
pub fn csv_template() -> &'static str {
    TEMPLATE
}
