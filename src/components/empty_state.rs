use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub secondary: Option<AttrValue>,
    #[prop_or_default]
    pub action: Html,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center text-center py-12 px-6">
            <p class="text-base font-bold text-[#173E63]">{ props.message.clone() }</p>
            {
                if let Some(secondary) = &props.secondary {
                    html! { <p class="text-sm text-muted-foreground mt-2">{ secondary.clone() }</p> }
                } else {
                    html! {}
                }
            }
            <div class="mt-4">{ props.action.clone() }</div>
        </div>
    }
}
