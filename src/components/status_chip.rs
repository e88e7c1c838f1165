use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipTone {
    Positive,
    Negative,
    Info,
    Neutral,
}

impl ChipTone {
    fn class(&self) -> &'static str {
        match self {
            Self::Positive => "bg-emerald-100 text-emerald-700",
            Self::Negative => "bg-red-100 text-red-700",
            Self::Info => "bg-sky-100 text-sky-700",
            Self::Neutral => "bg-secondary text-secondary-foreground",
        }
    }

    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusChipProps {
    pub label: AttrValue,
    #[prop_or(ChipTone::Neutral)]
    pub tone: ChipTone,
}

#[function_component(StatusChip)]
pub fn status_chip(props: &StatusChipProps) -> Html {
    html! {
        <span class={classes!("px-3", "py-1", "rounded-full", "text-[10px]", "font-bold", "whitespace-nowrap", props.tone.class())}>
            { props.label.clone() }
        </span>
    }
}
