//! Alerts Page
//!
//! Fixed list of schedule/blocker alerts with severity dots.

use leptos::*;

use crate::data::{demo_alerts, Alert};
use crate::state::global::GlobalState;

/// Alerts page component
#[component]
pub fn Alerts() -> impl IntoView {
    view! {
        <div class="space-y-3">
            {demo_alerts()
                .into_iter()
                .map(|alert| view! { <AlertRow alert=alert /> })
                .collect_view()}
        </div>
    }
}

/// Single alert row with severity dot and notify action.
#[component]
fn AlertRow(alert: Alert) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let target = alert.target;
    let notify = move |_| {
        state.show_success(&format!("Notified the {} owner", target));
    };

    view! {
        <div class="flex items-center space-x-4 bg-gray-800 rounded-xl p-4 border border-gray-700">
            <span
                class="w-2.5 h-2.5 rounded-full shrink-0"
                style=format!("background-color: {}", alert.level.dot_color())
            />

            <div class="flex-1">
                <div class="font-semibold">{alert.text}</div>
                <div class="text-gray-400 text-xs mt-1">
                    {format!("Related: {}", alert.target)}
                </div>
            </div>

            <button
                on:click=notify
                class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg
                       text-sm font-medium transition-colors"
            >
                "Notify"
            </button>
        </div>
    }
}
