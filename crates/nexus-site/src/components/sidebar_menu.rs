//! Sidebar menu renderer.

use leptos::*;

use nexus_config::menu_entries;

/// Renders the documentation menu: one link per entry, in definition order,
/// each showing the entry's icon glyph and label.
#[component]
pub fn SidebarMenu() -> impl IntoView {
    view! {
        <div class="bg-gray-50 rounded-xl p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"NexusData API"</h3>
            <ul class="space-y-2">
                {menu_entries()
                    .iter()
                    .map(|entry| view! {
                        <li>
                            <a
                                href=entry.path
                                class="flex items-center px-3 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition"
                            >
                                <span class="mr-3">{entry.icon.glyph()}</span>
                                <span>{entry.label}</span>
                            </a>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
