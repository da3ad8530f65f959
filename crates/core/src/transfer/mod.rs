//! Transfer module - bulk JSON import/export of the full application state.

mod model;
mod service;

pub use model::{ExportDocument, ImportSummary};
pub use service::{TransferService, TransferServiceTrait};
