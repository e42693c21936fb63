//! Patient intake form
//!
//! Thin Leptos layer over [`IntakeForm`]: inputs feed `update_field`, the
//! form's change listener bumps a revision signal that the error and button
//! views track.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::intake::{Field, FieldKind, HandlerFailure, IntakeForm, PatientData};
use crate::predictor::AlertNotifier;

pub type PredictFuture = Pin<Box<dyn Future<Output = Result<(), HandlerFailure>>>>;

/// Asynchronous prediction handler injected by the hosting view
pub type PredictFn = Rc<dyn Fn(PatientData) -> PredictFuture>;

type SharedForm = StoredValue<Rc<IntakeForm>, LocalStorage>;

const INPUT_BASE: &str =
    "w-full px-4 py-2 rounded-lg border focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn PatientForm(on_predict: PredictFn) -> impl IntoView {
    let revision = RwSignal::new(0u64);
    let form: SharedForm = StoredValue::new_local(Rc::new(
        // Tolerates a disposed signal: a submission may settle after navigation
        IntakeForm::new().with_listener(move || {
            revision.try_update(|n| *n += 1);
        }),
    ));
    let on_predict = StoredValue::new_local(on_predict);

    let submitting = move || {
        revision.track();
        form.with_value(|f| f.is_submitting())
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = form.get_value();
        let on_predict = on_predict.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            form.submit(|payload| on_predict(payload), &AlertNotifier).await;
        });
    };

    view! {
        <div class="p-6 max-w-4xl mx-auto">
            <div class="mb-6">
                <h1 class="text-3xl font-bold text-gray-900">"New Patient Assessment"</h1>
                <p class="text-gray-600 mt-1">"Enter patient data for liver cirrhosis risk prediction"</p>
            </div>

            <form on:submit=on_submit class="space-y-6">
                <div class="bg-white rounded-lg p-6 shadow-sm border border-gray-100">
                    <h3 class="text-lg font-semibold text-gray-900 mb-4">"Patient Information"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <InputField field=Field::FirstName form=form revision=revision />
                        <InputField field=Field::LastName form=form revision=revision />
                        <InputField field=Field::Age form=form revision=revision />
                        <ChoiceField field=Field::Gender form=form />
                    </div>
                </div>

                <div class="bg-white rounded-lg p-6 shadow-sm border border-gray-100">
                    <h3 class="text-lg font-semibold text-gray-900 mb-4">"Laboratory Values"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {Field::lab_panel().into_iter().map(|field| view! {
                            <InputField field=field form=form revision=revision />
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="bg-white rounded-lg p-6 shadow-sm border border-gray-100">
                    <h3 class="text-lg font-semibold text-gray-900 mb-4">"Medical History"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {Field::history_flags().into_iter().map(|field| view! {
                            <FlagField field=field form=form />
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="pt-4">
                    <button
                        type="submit"
                        disabled=submitting
                        class="w-full flex justify-center py-2 px-4 rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:bg-gray-400"
                    >
                        {move || if submitting() { "Generating Prediction..." } else { "Generate Prediction" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Text or numeric input with its inline error
#[component]
fn InputField(field: Field, form: SharedForm, revision: RwSignal<u64>) -> impl IntoView {
    let input_type = match field.kind() {
        FieldKind::Numeric => "number",
        _ => "text",
    };
    let label = if field.is_required() && field.kind() == FieldKind::Numeric && field != Field::Age {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let initial = form.with_value(|f| f.text(field));

    let error = move || {
        revision.track();
        form.with_value(|f| f.error_message(field))
    };
    let border = move || {
        if error().is_some() {
            format!("{} border-red-500", INPUT_BASE)
        } else {
            format!("{} border-gray-300", INPUT_BASE)
        }
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        form.with_value(|f| {
            if let Err(e) = f.update_field(field, value) {
                log::warn!("Ignoring input for {}: {}", field, e);
            }
        });
    };

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                value=initial
                step=field.step()
                placeholder=field.placeholder()
                on:input=on_input
                class=border
            />
            {move || error().map(|message| view! {
                <div class="mt-1 text-sm text-red-600 flex items-center">{message}</div>
            })}
        </div>
    }
}

#[component]
fn ChoiceField(field: Field, form: SharedForm) -> impl IntoView {
    let options: &'static [&'static str] = match field.kind() {
        FieldKind::Choice(options) => options,
        _ => &[],
    };
    let selected = form.with_value(|f| f.text(field));

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        form.with_value(|f| {
            if let Err(e) = f.update_field(field, value) {
                log::warn!("Ignoring selection for {}: {}", field, e);
            }
        });
    };

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-gray-700 mb-1">
                {format!("{} *", field.label())}
            </label>
            <select
                id=field.name()
                name=field.name()
                on:change=on_change
                class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500"
            >
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected={selected == option}>
                            {capitalize(option)}
                        </option>
                    }
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}

#[component]
fn FlagField(field: Field, form: SharedForm) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        form.with_value(|f| {
            if let Err(e) = f.update_field(field, checked) {
                log::warn!("Ignoring checkbox for {}: {}", field, e);
            }
        });
    };

    view! {
        <div class="flex items-center">
            <input
                type="checkbox"
                id=field.name()
                name=field.name()
                on:change=on_change
                class="h-4 w-4 text-blue-600 focus:ring-blue-500 border-gray-300 rounded"
            />
            <label for=field.name() class="ml-2 block text-sm text-gray-700">{field.label()}</label>
        </div>
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("female"), "Female");
        assert_eq!(capitalize(""), "");
    }
}
