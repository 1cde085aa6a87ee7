pub mod error;
pub mod ports;
pub mod product;
pub mod quality_level;
pub mod release;

pub use error::{
    CoreError,
    CoreResult,
};
pub use ports::{
    ProductDirectory,
    SnapshotStore,
};
pub use product::Product;
pub use release::ReleaseSnapshot;
