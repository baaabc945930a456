#![doc = include_str!("../README.md")]
pub mod amount;
pub mod catalogue;
pub mod error;
pub mod loader;
pub mod logger;
pub mod report;
pub mod sales;

pub use amount::Amount;
pub use catalogue::{index, CatalogueSkip, Prices};
pub use error::{Error, Input};
pub use loader::{into_list, load};
pub use report::{format, save, Report};
pub use sales::{aggregate, Quantity, Sale, SaleSkip};

/// The file each run writes its report to, in the current directory.
pub const RESULT_FILE: &str = "SalesResults.txt";
