//! Main application component

use leptos::*;
use leptos_meta::{provide_meta_context, Html, Title};
use leptos_router::{Route, Router, Routes};

use nexus_config::SiteConfig;

use crate::components::{Footer, Navbar};
use crate::pages::{HomePage, LoginPage, SignupPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = SiteConfig::nexusdata();
    let lang = site.i18n.default_locale;
    let title = site.title;
    provide_context(site);

    view! {
        <Html lang=lang/>
        <Title text=title/>
        <Router>
            <div class="min-h-screen bg-white">
                <Navbar/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/signup" view=SignupPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
