//! Labelled inputs shared by the section forms.
//!
//! Each field reads a `Signal<String>` and reports edits through a
//! `Callback<String>`; the page decides which draft slot they map to.

use leptos::prelude::*;

fn label_text(label: &'static str, required: bool) -> String {
    if required { format!("{label} *") } else { label.to_owned() }
}

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label_text(label, required)}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field field--wide">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__textarea"
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `<select>` over `(value, label)` pairs with a leading empty option.
#[component]
pub fn SelectField(
    label: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(default = "Seleccionar...")] empty_label: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label_text(label, required)}</span>
            <select
                class="field__input"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{empty_label}</option>
                {options
                    .into_iter()
                    .map(|(raw, text)| {
                        view! {
                            <option value=raw selected=move || value.get() == raw>
                                {text}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// Submit and cancel buttons at the bottom of a section form.
#[component]
pub fn FormActions(
    busy: Signal<bool>,
    editing: Signal<bool>,
    create_label: &'static str,
    update_label: &'static str,
    on_cancel: Callback<()>,
    #[prop(default = "Guardando...")] busy_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button class="btn" type="button" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                "Cancelar"
            </button>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || {
                    if busy.get() {
                        busy_label
                    } else if editing.get() {
                        update_label
                    } else {
                        create_label
                    }
                }}
            </button>
        </div>
    }
}
