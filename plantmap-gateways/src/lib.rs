//! Adapters between plantmap and the outside world:
//! tabular input files (CSV and Excel) and the HTML map page.

mod error;

pub mod map_page;
pub mod tabular;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
