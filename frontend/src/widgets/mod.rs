//! Adapters owning the third-party input widgets of one form instance.

mod phone;
mod select;

pub use phone::PhoneWidget;
pub use select::SelectWidgets;
