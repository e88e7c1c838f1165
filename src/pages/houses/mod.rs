mod detail;
mod form;
mod list;

pub use detail::HouseDetailPage;
pub use form::HouseFormPage;
pub use list::HouseListPage;
