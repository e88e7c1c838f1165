use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, RequestScope};
use crate::app::Route;
use crate::components::chart::BarChartView;
use crate::components::filters::YearPicker;
use crate::components::icons::{
    icon_bar_chart, icon_calendar, icon_credit_card, icon_home, icon_plus, icon_users, icon_wallet,
};
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;
use crate::components::toast::use_toaster;
use crate::dues::today;
use crate::error::ApiError;
use crate::format::format_rupiah;
use crate::hooks::{use_api, use_config, use_navigator};
use crate::models::{DashboardStats, PaymentSummary};
use crate::reports::dashboard_chart;

#[derive(Clone, Debug, Default, PartialEq)]
struct Overview {
    summary: PaymentSummary,
    stats: DashboardStats,
}

async fn fetch_overview(client: &ApiClient, year: i32) -> Result<Overview, ApiError> {
    Ok(Overview {
        summary: client.payment_summary(year).await?,
        stats: client.dashboard_statistics(year).await?,
    })
}

/// Figures to show once a fetch settles. A failure clears the previously selected year.
fn settle(result: Result<Overview, ApiError>) -> (Overview, Option<ApiError>) {
    match result {
        Ok(data) => (data, None),
        Err(err) => (Overview::default(), Some(err)),
    }
}

fn quick_link(label: &'static str, icon: Html, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button type="button" class="w-full flex items-center gap-3 px-3 py-2 rounded-[10px] text-[13px] font-semibold text-[#173E63] hover:bg-[#D8E1E8] transition-colors" {onclick}>
            { icon }
            <span>{ label }</span>
        </button>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_api();
    let config = use_config();
    let navigator = use_navigator();
    let toaster = use_toaster();

    let year = use_state(|| today().year());
    let overview = use_state(Overview::default);
    let loading = use_state(|| true);

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let overview = overview.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |year: &i32| {
                let year = *year;
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                loading.set(true);
                spawn_local(async move {
                    let result = fetch_overview(&client, year).await;
                    if matches!(&result, Err(err) if err.is_aborted()) {
                        return;
                    }
                    let (data, failure) = settle(result);
                    if let Some(err) = failure {
                        tracing::error!(error = %err, year, "failed to fetch dashboard data");
                        toaster.error("Gagal mengambil data dashboard");
                    }
                    overview.set(data);
                    loading.set(false);
                });
                move || drop(scope)
            },
            *year,
        );
    }

    let on_year = {
        let year = year.clone();
        Callback::from(move |next: i32| year.set(next))
    };

    let stats = &overview.stats;
    let balance_class = if stats.yearly_balance < 0.0 { classes!("text-red-600") } else { classes!() };

    html! {
        <>
            <PageHeader
                title="Dashboard"
                action={html! { <YearPicker year={*year} years={config.year_options()} on_change={on_year} /> }}
            />
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6 mb-6">
                <StatCard
                    title="Penghuni"
                    value={stats.residents.to_string()}
                    icon={icon_users()}
                    caption="Total penghuni"
                />
                <StatCard
                    title="Rumah"
                    value={format!("{}/{}", stats.occupied_houses, stats.houses)}
                    icon={icon_home()}
                    caption={format!("{} rumah berpenghuni", stats.occupied_houses)}
                />
                <StatCard
                    title="Belum Dibayar"
                    value={stats.pending_payments.to_string()}
                    icon={icon_credit_card()}
                    caption="Rumah terisi yang belum bayar"
                />
                <StatCard
                    title="Saldo Tahunan"
                    value={format_rupiah(stats.yearly_balance)}
                    icon={icon_wallet()}
                    caption="Saldo bersih tahunan"
                    value_class={balance_class}
                />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-card rounded-[10px] p-6 border border-border">
                    <h3 class="font-bold text-[#173E63] text-lg mb-4">{"Ringkasan Finansial Bulanan"}</h3>
                    if *loading {
                        <Loading message="Memuat data ringkasan finansial tahunan..." />
                    } else {
                        <BarChartView chart={dashboard_chart(&overview.summary.monthly_data)} />
                    }
                </div>
                <div class="space-y-6">
                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-[#173E63] text-lg mb-3">{"Manajemen Data"}</h3>
                        { quick_link("Tambah penghuni", icon_plus(), navigator.to(Route::ResidentCreate)) }
                        { quick_link("Tambah rumah", icon_plus(), navigator.to(Route::HouseCreate)) }
                        { quick_link("Catat pembayaran", icon_plus(), navigator.to(Route::PaymentCreate)) }
                        { quick_link("Catat pengeluaran", icon_plus(), navigator.to(Route::ExpenseCreate)) }
                    </div>
                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-[#173E63] text-lg mb-3">{"Laporan"}</h3>
                        { quick_link("Ringkasan Pembayaran", icon_bar_chart(), navigator.to(Route::PaymentSummary)) }
                        { quick_link("Detail Pembayaran Bulanan", icon_calendar(), navigator.to(Route::MonthlyDetail)) }
                    </div>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> Overview {
        Overview {
            stats: DashboardStats {
                residents: 12,
                houses: 20,
                occupied_houses: 9,
                pending_payments: 3,
                yearly_balance: 450_000.0,
            },
            ..Overview::default()
        }
    }

    #[test]
    fn loaded_figures_are_shown() {
        let (data, failure) = settle(Ok(loaded()));
        assert_eq!(data, loaded());
        assert!(failure.is_none());
    }

    #[test]
    fn failed_fetch_clears_the_previous_year() {
        let (data, failure) = settle(Err(ApiError::Server(500)));
        assert_eq!(data, Overview::default());
        assert_eq!(failure, Some(ApiError::Server(500)));
    }
}
