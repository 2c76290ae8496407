pub mod declaration;
pub mod listing;
pub mod operations;

pub use declaration::{ApiDeclaration, DEFAULT_API_VERSION, Model};
pub use listing::{Info, ResourceListing, ResourceListingApi};
pub use operations::*;
