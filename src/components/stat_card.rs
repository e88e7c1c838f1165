use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: Html,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    /// Extra classes for the value, e.g. a colour for negative balances.
    #[prop_or_default]
    pub value_class: Classes,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title.clone() }</p>
                <h3 class={classes!("text-2xl", "font-bold", "tracking-tight", "text-[#1D617A]", props.value_class.clone())}>{ props.value.clone() }</h3>
                {
                    if let Some(caption) = &props.caption {
                        html! { <p class="text-xs text-muted-foreground mt-1">{ caption.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px] text-[#173E63]">{ props.icon.clone() }</div>
        </div>
    }
}
