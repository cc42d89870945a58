mod driver;
mod error;
mod executor;
mod folder;

pub use driver::Driver;
pub use error::Error;
pub use executor::Executor;
pub use folder::Folder;
