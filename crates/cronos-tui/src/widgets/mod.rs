//! Widget components for the TUI

mod alert;
mod constraints;
mod header;
pub mod modal_overlay;
mod mode_select;
mod result_panel;
mod status_bar;
mod text_area;

pub use alert::AlertDialog;
pub use constraints::ConstraintsPanel;
pub use header::MainHeader;
pub use mode_select::ModeSelect;
pub use result_panel::{report_lines, ResultPanelView};
pub use status_bar::StatusBar;
pub use text_area::TextAreaView;
