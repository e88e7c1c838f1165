mod form;
mod list;

pub use form::ResidentFormPage;
pub use list::ResidentListPage;
