use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub content: AttrValue,
    #[prop_or(AttrValue::Static("Hapus"))]
    pub confirm_label: AttrValue,
    #[prop_or(AttrValue::Static("Batal"))]
    pub cancel_label: AttrValue,
    /// Disables both buttons while the confirmed action runs.
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
            <div class="bg-white rounded-2xl shadow-lg w-full max-w-md p-6" role="dialog" aria-modal="true">
                <h3 class="text-lg font-bold text-[#173E63]">{ props.title.clone() }</h3>
                <p class="text-sm text-slate-600 mt-3">{ props.content.clone() }</p>
                <div class="flex justify-end gap-3 mt-6">
                    <button type="button" onclick={on_cancel} disabled={props.busy} class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-[10px] text-[12px] font-bold">{ props.cancel_label.clone() }</button>
                    <button type="button" onclick={on_confirm} disabled={props.busy} class="bg-red-600 text-white px-4 py-2 rounded-[10px] text-[12px] font-bold">
                        { if props.busy { AttrValue::Static("Memproses...") } else { props.confirm_label.clone() } }
                    </button>
                </div>
            </div>
        </div>
    }
}
