mod error;
mod import_plants;
mod summarize_plants;

pub use self::{error::Error, import_plants::*, summarize_plants::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{columns::*, coordinates::*};
    pub use plantmap_entities::{
        address::*, category::*, country::*, geo::*, plant::*, table::*,
    };
}
