use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Buttons shown on the right, such as "Tambah".
    #[prop_or_default]
    pub action: Html,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 mb-6">
            <div>
                <h2 class="text-2xl font-bold text-[#173E63] tracking-tight">{ props.title.clone() }</h2>
                {
                    if let Some(subtitle) = &props.subtitle {
                        html! { <p class="text-sm text-muted-foreground mt-1">{ subtitle.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="flex items-center gap-3">{ props.action.clone() }</div>
        </div>
    }
}
