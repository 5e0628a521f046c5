//! Home page

use leptos::*;
use leptos_meta::Title;

use nexus_config::SiteConfig;

use crate::components::{HomepageFeatures, SidebarMenu};

#[component]
fn HomepageHeader() -> impl IntoView {
    let site = expect_context::<SiteConfig>();

    view! {
        <header class="bg-gradient-to-br from-indigo-900 via-purple-900 to-indigo-800 text-white">
            <div class="container mx-auto px-4 py-24">
                <div class="max-w-4xl">
                    <h1 class="text-5xl md:text-6xl font-bold mb-6">{site.title}</h1>
                    <p class="text-xl md:text-2xl text-gray-300 mb-4">{site.tagline}</p>
                    <p class="text-lg text-gray-300 mb-8">
                        "NexusData API simplifica el desarrollo y operación de APIs modernas y federadas, "
                        "abordando desafíos clave en este proceso."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a href="/docs/quickstart" class="px-8 py-4 bg-cyan-500 hover:bg-cyan-400 text-white font-semibold rounded-lg transition">
                            "Inicio Rápido →"
                        </a>
                        <a href="/docs/intro" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                            "Documentación"
                        </a>
                        <a
                            href="https://github.com/mbescalante/nexusdata"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition"
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn ApiFeature() -> impl IntoView {
    view! {
        <section class="py-16">
            <h2 class="text-3xl font-bold text-gray-900 mb-6">
                "Crea una API en menos de un minuto con NexusData"
            </h2>
            <ul class="space-y-4">
                <li class="flex items-start">
                    <span class="text-cyan-500 font-bold mr-3">"+"</span>
                    <span>"Conecta tu propia fuente de datos de manera eficiente"</span>
                </li>
                <li class="flex items-start">
                    <span class="text-cyan-500 font-bold mr-3">"+"</span>
                    <span>"Colabora fácilmente con tu equipo y otros departamentos"</span>
                </li>
                <li class="flex items-start">
                    <span class="text-cyan-500 font-bold mr-3">"+"</span>
                    <span>"Crea y documenta tus APIs con metadatos declarativos"</span>
                </li>
            </ul>
            <div class="mt-8">
                <a href="/docs/quickstart" class="inline-block px-8 py-4 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                    "Prueba NexusData API hoy gratis →"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let page_title = format!("Bienvenido a {}", site.title);

    view! {
        <Title text=page_title/>
        <div>
            <HomepageHeader/>
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-4 gap-12">
                        <div class="md:col-span-1">
                            <SidebarMenu/>
                        </div>
                        <div class="md:col-span-3">
                            <h2 class="text-3xl font-bold text-gray-900 mb-4">
                                "Documentación de NexusData API"
                            </h2>
                            <p class="text-lg text-gray-600 mb-4">
                                "NexusData API simplifica el desarrollo y operación de APIs modernas y federadas. "
                                "Con un potente sistema de modelado y un flujo de trabajo orientado al código, "
                                "NexusData API no es solo una mejora en la parte de acceso a datos de tu ciclo de "
                                "desarrollo, sino un cambio completo en la forma en que creas, usas y gestionas APIs."
                            </p>
                            <p class="text-gray-600">
                                "Para información sobre cómo actualizar desde versiones anteriores, consulta la "
                                <a href="/docs/upgrades" class="text-indigo-600 hover:text-indigo-800">
                                    "guía de actualizaciones"
                                </a>
                                "."
                            </p>
                            <ApiFeature/>
                        </div>
                    </div>
                </div>
            </section>
            <HomepageFeatures/>
        </div>
    }
}
