//! Homepage feature grid.

use leptos::*;

use nexus_config::{feature_entries, FeatureEntry};

#[component]
pub fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 text-center">
            <div class="text-4xl mb-4">{entry.icon.glyph()}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{entry.title}</h3>
            <p class="text-gray-600">{entry.description}</p>
        </div>
    }
}

/// Renders the marketing feature cards in definition order.
#[component]
pub fn HomepageFeatures() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 text-center mb-16">
                    "Características Principales"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {feature_entries()
                        .iter()
                        .map(|entry| view! { <FeatureCard entry=*entry/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
