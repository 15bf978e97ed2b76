mod errors;
mod remote;
mod traits;

pub use errors::CatalogError;
pub use remote::RemoteCatalog;
pub use traits::ProductCatalog;
