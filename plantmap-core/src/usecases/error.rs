use thiserror::Error;

use crate::columns::ColumnRole;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing {0} column")]
    MissingColumn(ColumnRole),
    #[error("The table contains no records")]
    EmptyTable,
}
