//! Summary Card Component
//!
//! Displays a single headline figure, optionally with a progress bar.

use leptos::*;

/// Summary card component
#[component]
pub fn SummaryCard(
    /// Card title
    label: &'static str,
    /// Headline value, preformatted
    #[prop(into)]
    value: String,
    /// Optional progress bar percent (0..=100)
    #[prop(optional)]
    progress: Option<u8>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <h4 class="text-gray-400 text-sm">{label}</h4>
            <div class="text-3xl font-bold mt-2">{value}</div>

            {progress.map(|pct| view! {
                <div class="w-full bg-gray-700 rounded-full h-2 mt-3">
                    <div
                        class="bg-sky-500 rounded-full h-2 transition-all"
                        style=format!("width: {}%", pct.min(100))
                    />
                </div>
            })}
        </div>
    }
}
