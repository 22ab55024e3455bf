// Reusable UI components

pub mod button;
pub mod confirm;
pub mod dialog_helpers;
pub mod form_field;
pub mod status_bar;

pub use button::Button;
pub use confirm::open_confirm_dialog;
pub use dialog_helpers::cancel_button;
pub use form_field::FormField;
pub use status_bar::StatusBar;
