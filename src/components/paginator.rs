use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::list::Pagination;

#[derive(Properties, PartialEq)]
pub struct PaginatorProps {
    pub total: usize,
    pub pagination: Pagination,
    pub options: Vec<usize>,
    pub on_change: Callback<Pagination>,
}

#[function_component(Paginator)]
pub fn paginator(props: &PaginatorProps) -> Html {
    let pagination = props.pagination;

    let on_rows = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(rows) = select.value().parse::<usize>() {
                on_change.emit(pagination.with_rows_per_page(rows));
            }
        })
    };
    let on_previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(pagination.with_page(pagination.page.saturating_sub(1))))
    };
    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(pagination.with_page(pagination.page + 1)))
    };

    html! {
        <div class="flex items-center justify-end gap-4 px-6 py-3 text-[12px] text-muted-foreground">
            <label class="flex items-center gap-2">
                <span>{"Baris per halaman"}</span>
                <select class="bg-[#f1f4f9] rounded-[8px] px-2 py-1" onchange={on_rows}>
                    { for props.options.iter().map(|rows| html! {
                        <option value={rows.to_string()} selected={*rows == pagination.rows_per_page}>{ rows }</option>
                    }) }
                </select>
            </label>
            <span>{ pagination.range_label(props.total) }</span>
            <button type="button" class="px-2 py-1 rounded-[8px] hover:bg-secondary disabled:opacity-40" disabled={!pagination.has_previous()} onclick={on_previous}>{"‹"}</button>
            <button type="button" class="px-2 py-1 rounded-[8px] hover:bg-secondary disabled:opacity-40" disabled={!pagination.has_next(props.total)} onclick={on_next}>{"›"}</button>
        </div>
    }
}
