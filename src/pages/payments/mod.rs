mod form;
mod list;

pub use form::PaymentFormPage;
pub use list::PaymentListPage;
