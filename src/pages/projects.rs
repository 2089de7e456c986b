//! Projects Page
//!
//! Summary cards, a filter toolbar, and the project kanban board.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::{KanbanBoard, SummaryCard};
use crate::data::{
    demo_board, filter_board, tasks_to_csv, Department, Summary, Task, TaskStatus,
};
use crate::state::global::GlobalState;

/// Projects page component
#[component]
pub fn Projects() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Demo data is regenerated per render and carries no identity.
    let board = demo_board([3, 5, 2, 14], &mut || js_sys::Math::random());
    let summary = Summary::from_board(&board);

    let (department, set_department) = create_signal(String::from("All"));
    let (status, set_status) = create_signal(String::from("All"));
    let (keyword, set_keyword) = create_signal(String::new());

    let board_for_filter = board.clone();
    let filtered = create_memo(move |_| {
        filter_board(
            &board_for_filter,
            &department.get(),
            &status.get(),
            &keyword.get(),
        )
    });

    let state_for_export = state;
    let export_csv = move |_| {
        let tasks: Vec<Task> = filtered
            .get()
            .into_iter()
            .flat_map(|col| col.tasks)
            .collect();
        let csv = tasks_to_csv(&tasks);

        match download_text("taskdeck-tasks.csv", &csv) {
            Ok(()) => state_for_export.show_success(&format!("Exported {} tasks", tasks.len())),
            Err(_) => state_for_export.show_error("CSV export failed"),
        }
    };

    view! {
        <div class="space-y-6">
            // Summary cards row
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <SummaryCard label="Projects" value=summary.projects.to_string() />
                <SummaryCard label="Tasks" value=summary.tasks.to_string() />
                <SummaryCard
                    label="Completion"
                    value=format!("{}%", summary.completion_pct)
                    progress=summary.completion_pct
                />
                <SummaryCard label="Blocked" value=summary.blocked.to_string() />
            </div>

            // Filter toolbar
            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                <div class="flex flex-wrap items-center gap-3">
                    <select
                        on:change=move |ev| set_department.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                               border border-gray-600 focus:border-sky-500 focus:outline-none"
                    >
                        <option value="All">"All departments"</option>
                        {Department::ALL
                            .into_iter()
                            .map(|d| view! { <option value=d.label()>{d.label()}</option> })
                            .collect_view()}
                    </select>

                    <select
                        on:change=move |ev| set_status.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                               border border-gray-600 focus:border-sky-500 focus:outline-none"
                    >
                        <option value="All">"All statuses"</option>
                        {TaskStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                            .collect_view()}
                    </select>

                    <input
                        type="text"
                        placeholder="Filter keyword"
                        prop:value=move || keyword.get()
                        on:input=move |ev| set_keyword.set(event_target_value(&ev))
                        class="flex-1 min-w-40 bg-gray-700 rounded-lg px-3 py-2 text-sm
                               border border-gray-600 focus:border-sky-500 focus:outline-none"
                    />

                    <button
                        on:click=export_csv
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Export CSV"
                    </button>
                </div>
            </div>

            // Kanban board, narrowed by the toolbar
            {move || view! { <KanbanBoard columns=filtered.get() /> }}
        </div>
    }
}

/// Trigger a browser download of a text file via a temporary object URL.
fn download_text(filename: &str, contents: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let blob = web_sys::Blob::new_with_str_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &url)?;
    anchor.set_attribute("download", filename)?;
    anchor
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or_else(|| JsValue::from_str("anchor is not an element"))?
        .click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
