//! Labelled inputs with an error line, shared by every form screen.

use web_sys::{File, HtmlInputElement, HtmlSelectElement, Url};
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[13px] text-[#173E63] border";

fn input_class(has_error: bool) -> Classes {
    let border = if has_error { "border-red-500" } else { "border-transparent" };
    classes!(INPUT_CLASS, border)
}

fn field_shell(
    label: &AttrValue,
    required: bool,
    error: &Option<String>,
    helper: &Option<AttrValue>,
    input: Html,
) -> Html {
    html! {
        <div class="space-y-1">
            <label class="text-[12px] font-bold text-muted-foreground">
                { label.clone() }
                { if required { html! { <span class="text-red-500">{" *"}</span> } } else { html! {} } }
            </label>
            { input }
            {
                match (error, helper) {
                    (Some(message), _) => html! { <p class="text-xs text-red-500">{ message.clone() }</p> },
                    (None, Some(helper)) => html! { <p class="text-xs text-muted-foreground">{ helper.clone() }</p> },
                    (None, None) => html! {},
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub readonly: bool,
}

fn render_input(props: &InputProps, input_type: &'static str) -> Html {
    let on_input = props.on_input.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_input.emit(input.value());
    });
    let input = html! {
        <input
            type={input_type}
            class={input_class(props.error.is_some())}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            disabled={props.disabled}
            readonly={props.readonly}
            {oninput}
        />
    };
    field_shell(&props.label, props.required, &props.error, &props.helper, input)
}

#[function_component(TextField)]
pub fn text_field(props: &InputProps) -> Html {
    render_input(props, "text")
}

#[function_component(NumberField)]
pub fn number_field(props: &InputProps) -> Html {
    render_input(props, "number")
}

#[function_component(DateField)]
pub fn date_field(props: &InputProps) -> Html {
    render_input(props, "date")
}

#[function_component(PhoneField)]
pub fn phone_field(props: &InputProps) -> Html {
    render_input(props, "tel")
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    /// Label of an empty first option; none when absent.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_change = props.on_change.clone();
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_change.emit(select.value());
    });
    let input = html! {
        <select class={input_class(props.error.is_some())} disabled={props.disabled} {onchange}>
            {
                if let Some(placeholder) = &props.placeholder {
                    html! { <option value="" selected={props.value.is_empty()}>{ placeholder.clone() }</option> }
                } else {
                    html! {}
                }
            }
            { for props.options.iter().map(|(value, label)| html! {
                <option value={value.clone()} selected={*value == *props.value}>{ label.clone() }</option>
            }) }
        </select>
    };
    field_shell(&props.label, props.required, &props.error, &props.helper, input)
}

#[derive(Properties, PartialEq)]
pub struct RadioGroupProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(RadioGroup)]
pub fn radio_group(props: &RadioGroupProps) -> Html {
    let input = html! {
        <div class="flex flex-wrap gap-4 py-1">
            { for props.options.iter().map(|(value, label)| {
                let on_change = props.on_change.clone();
                let option_value = value.clone();
                let onchange = Callback::from(move |_: Event| on_change.emit(option_value.clone()));
                html! {
                    <label class="flex items-center gap-2 text-[13px] text-[#173E63]">
                        <input type="radio" name={props.name.clone()} value={value.clone()} checked={*value == *props.value} {onchange} />
                        { label.clone() }
                    </label>
                }
            }) }
        </div>
    };
    field_shell(&props.label, props.required, &props.error, &None, input)
}

#[derive(Properties, PartialEq)]
pub struct SwitchFieldProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_change: Callback<bool>,
    /// Text next to the switch for the on and off states.
    #[prop_or_default]
    pub state_labels: Option<(AttrValue, AttrValue)>,
}

#[function_component(SwitchField)]
pub fn switch_field(props: &SwitchFieldProps) -> Html {
    let on_change = props.on_change.clone();
    let checked = props.checked;
    let onclick = Callback::from(move |_: MouseEvent| on_change.emit(!checked));
    let track = if checked { "bg-[#173E63]" } else { "bg-slate-300" };
    let knob = if checked { "translate-x-5" } else { "translate-x-0" };
    let state = props.state_labels.as_ref().map(|(on, off)| if checked { on.clone() } else { off.clone() });

    let input = html! {
        <div class="flex items-center gap-3 py-1">
            <button type="button" role="switch" aria-checked={checked.to_string()} {onclick}
                class={classes!("relative", "inline-flex", "h-6", "w-11", "rounded-full", "transition-colors", track)}>
                <span class={classes!("inline-block", "h-5", "w-5", "mt-0.5", "ml-0.5", "rounded-full", "bg-white", "shadow", "transition-transform", knob)}></span>
            </button>
            { state.map(|s| html! { <span class="text-[13px] text-[#173E63]">{ s }</span> }).unwrap_or_else(|| html! {}) }
        </div>
    };
    field_shell(&props.label, false, &None, &None, input)
}

#[derive(Properties, PartialEq)]
pub struct FileFieldProps {
    pub label: AttrValue,
    pub on_select: Callback<Option<File>>,
    #[prop_or(AttrValue::Static("image/*"))]
    pub accept: AttrValue,
    /// Image already stored for the record, shown until a new file is picked.
    #[prop_or_default]
    pub current_url: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
}

/// File input with an image preview of the picked file.
#[function_component(FileField)]
pub fn file_field(props: &FileFieldProps) -> Html {
    let preview = use_state(|| None::<String>);

    // Object URLs hold the file in memory until revoked.
    use_effect_with_deps(
        |url: &Option<String>| {
            let url = url.clone();
            move || {
                if let Some(url) = url {
                    let _ = Url::revoke_object_url(&url);
                }
            }
        },
        (*preview).clone(),
    );

    let onchange = {
        let preview = preview.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            let url = file
                .as_ref()
                .and_then(|file| match Url::create_object_url_with_blob(file) {
                    Ok(url) => Some(url),
                    Err(err) => {
                        tracing::warn!(?err, "could not preview the selected file");
                        None
                    }
                });
            preview.set(url);
            on_select.emit(file);
        })
    };

    let shown = (*preview)
        .clone()
        .map(AttrValue::from)
        .or_else(|| props.current_url.clone());

    let input = html! {
        <div class="space-y-2">
            <input type="file" accept={props.accept.clone()} class={input_class(props.error.is_some())} {onchange} />
            {
                if let Some(src) = shown {
                    html! { <img {src} alt={props.label.clone()} class="max-h-48 rounded-[10px] border border-border object-contain" /> }
                } else {
                    html! {}
                }
            }
        </div>
    };
    field_shell(&props.label, props.required, &props.error, &props.helper, input)
}
