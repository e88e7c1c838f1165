mod monthly_detail;
mod payment_summary;

pub use monthly_detail::MonthlyDetailPage;
pub use payment_summary::PaymentSummaryPage;

use yew::prelude::*;

/// Green for a surplus, red for a deficit.
fn balance_class(value: f64) -> Classes {
    if value >= 0.0 {
        classes!("text-green-700")
    } else {
        classes!("text-red-600")
    }
}
