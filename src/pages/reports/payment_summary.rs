use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::balance_class;
use crate::api::RequestScope;
use crate::components::chart::BarChartView;
use crate::components::empty_state::EmptyState;
use crate::components::filters::YearPicker;
use crate::components::icons::{icon_bar_chart, icon_trending_up, icon_wallet};
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;
use crate::components::toast::use_toaster;
use crate::dues::today;
use crate::format::format_rupiah;
use crate::hooks::{use_api, use_config};
use crate::models::PaymentSummary;
use crate::pages::{table, CARD};
use crate::reports::{summary_chart, summary_totals};

#[function_component(PaymentSummaryPage)]
pub fn payment_summary_page() -> Html {
    let api = use_api();
    let config = use_config();
    let toaster = use_toaster();

    let year = use_state(|| today().year());
    let summary = use_state(PaymentSummary::default);
    let loading = use_state(|| true);

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |year: &i32| {
                let year = *year;
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                loading.set(true);
                spawn_local(async move {
                    match client.payment_summary(year).await {
                        Ok(data) => summary.set(data),
                        Err(err) if err.is_aborted() => return,
                        Err(err) => {
                            tracing::error!(error = %err, year, "failed to fetch payment summary");
                            toaster.error("Gagal mengambil ringkasan laporan");
                            summary.set(PaymentSummary::default());
                        }
                    }
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

    let months = &summary.monthly_data;
    let body = if *loading {
        html! { <Loading /> }
    } else if months.is_empty() {
        html! { <EmptyState message={format!("Belum ada data keuangan untuk tahun {}", *year)} /> }
    } else {
        let totals = summary_totals(months);
        let rows = html! {
            <>
                { for months.iter().map(|m| html! {
                    <tr key={m.month.clone()} class="text-sm">
                        <td class="px-6 py-4 font-semibold">{ m.month.clone() }</td>
                        <td class="px-6 py-4 text-right">{ format_rupiah(m.security_income) }</td>
                        <td class="px-6 py-4 text-right">{ format_rupiah(m.cleaning_income) }</td>
                        <td class="px-6 py-4 text-right">{ format_rupiah(m.total_income) }</td>
                        <td class="px-6 py-4 text-right">{ format_rupiah(m.total_expenses) }</td>
                        <td class={classes!("px-6", "py-4", "text-right", "font-bold", balance_class(m.balance))}>
                            { format_rupiah(m.balance) }
                        </td>
                    </tr>
                }) }
            </>
        };
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
                    <StatCard
                        title="Total Pemasukan"
                        value={format_rupiah(totals.income)}
                        icon={icon_trending_up()}
                        value_class={classes!("text-green-700")}
                    />
                    <StatCard
                        title="Total Pengeluaran"
                        value={format_rupiah(totals.expenses)}
                        icon={icon_wallet()}
                        value_class={classes!("text-red-600")}
                    />
                    <StatCard
                        title="Total Saldo"
                        value={format_rupiah(totals.balance)}
                        icon={icon_bar_chart()}
                        value_class={balance_class(totals.balance)}
                    />
                </div>
                <div class={classes!(CARD, "p-6", "mb-6")}>
                    <h3 class="text-base font-bold text-[#173E63] mb-4">{"Ringkasan Bulanan"}</h3>
                    <BarChartView chart={summary_chart(months)} />
                </div>
                <div class={CARD}>
                    { table(
                        &["Bulan", "Pemasukan Keamanan", "Pemasukan Kebersihan", "Total Pemasukan", "Pengeluaran", "Saldo"],
                        rows,
                    ) }
                </div>
            </>
        }
    };

    html! {
        <>
            <PageHeader
                title="Ringkasan Laporan Keuangan"
                action={html! { <YearPicker year={*year} years={config.year_options()} on_change={on_year} /> }}
            />
            { body }
        </>
    }
}
