use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported file format: '{0}'")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Spreadsheet(#[from] calamine::Error),
    #[error("Workbook does not contain any sheet")]
    EmptyWorkbook,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Template(#[from] askama::Error),
}
