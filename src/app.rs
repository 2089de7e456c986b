//! App Root Component
//!
//! Main application component with the page shell and routing.

use leptos::*;
use leptos_router::*;

use crate::components::nav::Section;
use crate::components::{Sidebar, Toast};
use crate::pages::{Alerts, Board, Projects, Timeline};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Header bar
                <Header />

                <div class="flex flex-1">
                    // Sidebar navigation
                    <Sidebar />

                    // Main content area
                    <main class="flex-1 px-6 py-8">
                        <Routes>
                            <Route path="/" view=Projects />
                            <Route path="/board" view=Board />
                            <Route path="/timeline" view=Timeline />
                            <Route path="/alerts" view=Alerts />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Header with brand, search box, and quick actions
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();

    // Current section derived from the path; unknown paths have no section.
    let section_label = move || {
        Section::from_path(&location.pathname.get())
            .map(Section::label)
            .unwrap_or("Not Found")
    };

    let on_import = move |_| {
        state.show_success("Import is a prototype stub");
    };

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="flex items-center justify-between h-16 px-6 gap-6">
                // Logo and brand
                <div class="flex items-center space-x-3">
                    <span class="w-3 h-3 rounded bg-sky-500" />
                    <span class="text-xl font-bold">"TaskDeck"</span>
                    <span class="text-sm text-gray-500">"/ " {section_label}</span>
                </div>

                // Search (presentational)
                <div class="flex-1 max-w-md flex items-center space-x-2
                            bg-gray-700 rounded-lg px-3 py-2 border border-gray-600">
                    <span class="text-sm">"🔎"</span>
                    <input
                        type="text"
                        placeholder="Search projects, tasks, people..."
                        class="flex-1 bg-transparent text-sm focus:outline-none"
                    />
                </div>

                // Quick actions
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400 hidden md:inline">
                        {chrono::Local::now().format("%b %d, %Y").to_string()}
                    </span>
                    <button
                        on:click=on_import
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Import"
                    </button>
                    <button class="px-4 py-2 bg-sky-600 hover:bg-sky-700 rounded-lg
                                   text-sm font-medium transition-colors">
                        "New Project"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-sky-600 hover:bg-sky-700 rounded-lg font-medium transition-colors"
            >
                "Back to Projects"
            </A>
        </div>
    }
}
