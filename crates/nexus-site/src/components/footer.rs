//! Site footer, driven by the configured link groups.

use leptos::*;

use nexus_config::SiteConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let groups = site.theme_config.footer.links.clone();
    let copyright = site.theme_config.footer.copyright.clone();

    view! {
        <footer class="bg-gray-900 text-white">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    {groups
                        .iter()
                        .map(|group| view! {
                            <div>
                                <h3 class="font-semibold text-white mb-4">{group.title}</h3>
                                <ul class="space-y-2">
                                    {group
                                        .items
                                        .iter()
                                        .map(|link| view! {
                                            <li>
                                                <a href=link.url() class="text-gray-400 hover:text-white transition">
                                                    {link.label}
                                                </a>
                                            </li>
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="border-t border-gray-800 mt-12 pt-8 text-center text-gray-400 text-sm">
                    {copyright}
                </div>
            </div>
        </footer>
    }
}
