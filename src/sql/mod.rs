//! Safe SQL construction: identifiers only from closed enumerations, values
//! always bound as parameters.

mod listing;
pub use listing::{ArticleListing, QueryBuf, SortColumn, SortOrder};
