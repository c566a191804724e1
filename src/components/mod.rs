// UI Components
// This module contains all reusable UI components

pub mod copy_button;
pub mod filter_bar;
pub mod navbar;
pub mod register_modal;
pub mod toast_host;

pub use copy_button::CopyButton;
pub use filter_bar::FilterBar;
pub use navbar::NavBar;
pub use register_modal::RegisterModal;
pub use toast_host::ToastHost;
