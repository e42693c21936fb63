use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

pub mod intake;
mod components;
mod predictor;
mod types;

use components::patient_form::{PatientForm, PredictFn, PredictFuture};
use components::prediction_results::PredictionResults;
use intake::PatientData;
use types::PredictionResult;

/// Latest result, shared between the form and results views
type LatestResult = RwSignal<Option<PredictionResult>>;

#[component]
pub fn App() -> impl IntoView {
    let latest: LatestResult = RwSignal::new(None);
    provide_context(latest);

    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                // Sidebar
                <div class="w-64 bg-gray-800 text-white p-4 flex flex-col">
                    <h1 class="text-2xl font-bold mb-8">"LiverCare"</h1>
                    <nav class="space-y-1 flex-1">
                        <NavLink href="/" label="New Assessment" />
                        <NavLink href="/results" label="Latest Result" />
                    </nav>
                    <div class="text-xs text-gray-500 mt-4">
                        "Cirrhosis Risk Dashboard"
                    </div>
                </div>

                // Main Content
                <div class="flex-1 overflow-y-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=Assessment/>
                        <Route path=path!("/results") view=Results/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

/// Intake form wired to the mock predictor
#[component]
fn Assessment() -> impl IntoView {
    let latest = expect_context::<LatestResult>();
    let navigate = use_navigate();

    let on_predict: PredictFn = Rc::new(move |data: PatientData| -> PredictFuture {
        let navigate = navigate.clone();
        Box::pin(async move {
            let result = predictor::mock_predict(&data).await?;
            latest.set(Some(result));
            navigate("/results", Default::default());
            Ok(())
        })
    });

    view! { <PatientForm on_predict=on_predict /> }
}

#[component]
fn Results() -> impl IntoView {
    let latest = expect_context::<LatestResult>();

    move || match latest.get() {
        Some(result) => view! { <PredictionResults result=result /> }.into_any(),
        None => view! {
            <div class="p-6">
                <div class="text-center py-12 bg-white rounded-lg shadow">
                    <p class="text-gray-500 mb-4">"No assessment has been run yet"</p>
                    <a href="/" class="text-blue-500 hover:underline">"Start a new assessment"</a>
                </div>
            </div>
        }.into_any(),
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="block p-2 hover:bg-gray-700 rounded transition-colors">
            {label}
        </A>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
