//! Board Page
//!
//! Status charts over a compact kanban board.

use leptos::*;

use crate::components::{BarChart, KanbanBoard, LineChart, PieChart};
use crate::data::demo_board;

/// Pie slice colors, one per status column.
const STATUS_COLORS: [&str; 4] = ["#e2e8f0", "#0ea5e9", "#fca5a5", "#86efac"];

/// Board page component
#[component]
pub fn Board() -> impl IntoView {
    let board = demo_board([2, 4, 1, 6], &mut || js_sys::Math::random());

    view! {
        <div class="space-y-6">
            // Chart row
            <div class="grid md:grid-cols-3 gap-4">
                <ChartCard title="Status distribution">
                    <PieChart
                        values=vec![4.0, 7.0, 2.0, 9.0]
                        colors=STATUS_COLORS.to_vec()
                    />
                </ChartCard>

                <ChartCard title="Tasks per column">
                    <BarChart values=vec![2.0, 4.0, 1.0, 6.0] />
                </ChartCard>

                <ChartCard title="Completions, last 7 days">
                    <LineChart values=vec![1.0, 2.0, 1.0, 3.0, 4.0, 2.0, 5.0] />
                </ChartCard>
            </div>

            // Kanban board
            <KanbanBoard columns=board />
        </div>
    }
}

/// Card wrapper around a single chart.
#[component]
fn ChartCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <h4 class="text-sm font-semibold text-gray-300 mb-3">{title}</h4>
            {children()}
        </section>
    }
}
