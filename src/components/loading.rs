use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-16 gap-3 text-muted-foreground">
            <div class="w-10 h-10 border-4 border-[#B2CBDE] border-t-[#173E63] rounded-full animate-spin"></div>
            <p class="text-sm">{ props.message.clone().unwrap_or(AttrValue::Static("Memuat...")) }</p>
        </div>
    }
}
