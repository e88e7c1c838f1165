use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api::PeriodFilter;
use crate::format::month_name;

const SELECT_CLASS: &str = "bg-white rounded-[10px] px-3 py-2 text-[13px] text-[#173E63] border border-border";

fn selected_number<T: std::str::FromStr>(e: &Event) -> Option<T> {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value().parse().ok()
}

fn year_select(years: &[i32], current: i32, onchange: Callback<Event>) -> Html {
    html! {
        <select class={SELECT_CLASS} aria-label="Tahun" {onchange}>
            { for years.iter().map(|year| html! {
                <option value={year.to_string()} selected={*year == current}>{ year }</option>
            }) }
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct YearPickerProps {
    pub year: i32,
    pub years: Vec<i32>,
    pub on_change: Callback<i32>,
}

#[function_component(YearPicker)]
pub fn year_picker(props: &YearPickerProps) -> Html {
    let on_change = props.on_change.clone();
    let onchange = Callback::from(move |e: Event| {
        if let Some(year) = selected_number::<i32>(&e) {
            on_change.emit(year);
        }
    });
    year_select(&props.years, props.year, onchange)
}

#[derive(Properties, PartialEq)]
pub struct PeriodPickerProps {
    pub filter: PeriodFilter,
    pub years: Vec<i32>,
    pub on_change: Callback<PeriodFilter>,
}

/// Month and year selects of the filtered lists and the monthly report.
#[function_component(PeriodPicker)]
pub fn period_picker(props: &PeriodPickerProps) -> Html {
    let filter = props.filter;
    let on_month = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(month) = selected_number::<u32>(&e) {
                on_change.emit(PeriodFilter { month, ..filter });
            }
        })
    };
    let on_year = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(year) = selected_number::<i32>(&e) {
                on_change.emit(PeriodFilter { year, ..filter });
            }
        })
    };

    html! {
        <div class="flex items-center gap-3">
            <select class={SELECT_CLASS} aria-label="Bulan" onchange={on_month}>
                { for (1..=12u32).map(|month| html! {
                    <option value={month.to_string()} selected={month == filter.month}>{ month_name(month) }</option>
                }) }
            </select>
            { year_select(&props.years, filter.year, on_year) }
        </div>
    }
}
