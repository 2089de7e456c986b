//! Kanban Board Component
//!
//! Renders a board of status columns with one card per task.

use leptos::*;

use crate::data::{BoardColumn, Task};

/// Kanban board: one column per status.
#[component]
pub fn KanbanBoard(columns: Vec<BoardColumn>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            {columns
                .into_iter()
                .map(|column| view! { <KanbanColumn column=column /> })
                .collect_view()}
        </div>
    }
}

/// Single status column.
#[component]
fn KanbanColumn(column: BoardColumn) -> impl IntoView {
    let count = column.tasks.len();

    view! {
        <div class="bg-gray-800 rounded-xl p-3 border border-gray-700">
            <div class="flex items-center justify-between px-1 mb-3">
                <h5 class="text-sm font-semibold text-gray-300">{column.status.label()}</h5>
                <span class="text-xs text-gray-500">{count}</span>
            </div>

            <div class="space-y-2">
                {if column.tasks.is_empty() {
                    view! {
                        <p class="text-xs text-gray-500 px-1 py-2">"No matching tasks"</p>
                    }
                    .into_view()
                } else {
                    column
                        .tasks
                        .into_iter()
                        .map(|task| view! { <TaskCard task=task /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Single task card.
#[component]
fn TaskCard(task: Task) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-3 hover:bg-gray-600 transition-colors">
            <div class="flex items-center justify-between">
                <div class="text-sm font-semibold">{task.title}</div>
                <span class="text-xs bg-gray-600 rounded-full px-2 py-0.5 text-gray-300">
                    {task.owner}
                </span>
            </div>
            <div class="flex items-center justify-between mt-2 text-xs">
                <span class="text-gray-400">
                    {format!("Progress {}%", task.progress)}
                </span>
                <span class=task.status.accent_class()>{task.status.label()}</span>
            </div>
        </div>
    }
}
