//! Top navigation bar, driven by the site configuration.

use leptos::*;

use nexus_config::{NavbarItem, NavbarPosition, SiteConfig};

fn navbar_link(item: &NavbarItem) -> impl IntoView {
    let class = match item.class_name {
        Some("navbar-signup-button button button--primary") => {
            "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition"
        }
        _ => "text-gray-600 hover:text-gray-900 transition",
    };
    let target = item.is_external().then_some("_blank");
    let rel = item.is_external().then_some("noopener noreferrer");
    view! {
        <a href=item.url() class=class target=target rel=rel>
            {item.label}
        </a>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let brand = site.theme_config.navbar.title;
    let left = site.navbar_items(NavbarPosition::Left);
    let right = site.navbar_items(NavbarPosition::Right);
    let mobile_items = site.theme_config.navbar.items.clone();

    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Brand
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"⚡"</span>
                            <span class="text-xl font-bold text-gray-900">{brand}</span>
                        </a>
                        <div class="hidden md:flex items-center space-x-8 ml-10">
                            {left.iter().map(navbar_link).collect::<Vec<_>>()}
                        </div>
                    </div>

                    // Desktop actions
                    <div class="hidden md:flex items-center space-x-4">
                        {right.iter().map(navbar_link).collect::<Vec<_>>()}
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        {mobile_items
                            .iter()
                            .map(|item| view! {
                                <a href=item.url() class="block text-gray-600 hover:text-gray-900">
                                    {item.label}
                                </a>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
