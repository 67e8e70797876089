//! Custom widget components

mod confirm_dialog;
mod filter_bar;
mod header;
mod key_hints;
pub mod modal_overlay;
mod notice;
mod vehicle_detail;
mod vehicle_form;
mod vehicle_table;

pub use confirm_dialog::ConfirmDialog;
pub use filter_bar::FilterBar;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use notice::NoticeDialog;
pub use vehicle_detail::VehicleDetail;
pub use vehicle_form::VehicleFormView;
pub use vehicle_table::VehicleTable;
