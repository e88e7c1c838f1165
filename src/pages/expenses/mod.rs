mod form;
mod list;

pub use form::ExpenseFormPage;
pub use list::ExpenseListPage;
