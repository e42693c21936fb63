use leptos::prelude::*;

use crate::types::PredictionResult;

/// Risk score, level and recommendations for one assessment
#[component]
pub fn PredictionResults(result: PredictionResult) -> impl IntoView {
    let level = result.risk_level;

    view! {
        <div class="p-6 max-w-4xl mx-auto">
            <div class="bg-white shadow-sm rounded-lg p-6">
                <div class="mb-6">
                    <h2 class="text-2xl font-bold text-gray-900">"Prediction Results"</h2>
                    <p class="text-sm text-gray-500">{format!("Generated on {}", result.timestamp)}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                    <div class="bg-gray-50 p-4 rounded-lg">
                        <h3 class="text-lg font-semibold mb-2">"Risk Score"</h3>
                        <div class="text-4xl font-bold">{format!("{}%", result.risk_score)}</div>
                    </div>
                    <div class=format!("p-4 rounded-lg border {}", level.badge_class())>
                        <h3 class="text-lg font-semibold mb-2">"Risk Level"</h3>
                        <div class=format!("text-4xl font-bold {}", level.text_class())>
                            {level.label()}
                        </div>
                    </div>
                </div>

                <div class="mb-6">
                    <h3 class="text-lg font-semibold mb-2">"Recommendations"</h3>
                    <ul class="list-disc pl-5 space-y-2">
                        {result.recommendations.into_iter().map(|item| view! {
                            <li class="text-gray-700">{item}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>

                <a
                    href="/"
                    class="inline-flex items-center px-4 py-2 text-sm font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700"
                >
                    "Back to Form"
                </a>
            </div>
        </div>
    }
}
