//! Login page
//!
//! Placeholder form: submitting performs a diagnostic log of the field
//! values and nothing else. No session is created, no request is sent.

use leptos::*;
use leptos_meta::Title;

use nexus_config::SiteConfig;

use crate::forms::password_input_type;

#[component]
fn SocialButton(label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class="w-full flex items-center justify-center px-4 py-3 border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50 transition"
        >
            {label}
        </button>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let page_title = format!("Login | {}", site.title);

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // Placeholder until real authentication exists.
        logging::log!(
            "login attempt with: {} {}",
            email.get_untracked(),
            password.get_untracked()
        );
    };

    view! {
        <Title text=page_title/>
        <div class="min-h-screen bg-gray-50 py-16">
            <div class="max-w-md mx-auto bg-white rounded-xl shadow-lg p-8">
                <a href="/" class="inline-flex items-center text-sm text-gray-600 hover:text-gray-900 mb-6">
                    "← Back"
                </a>

                <h1 class="text-2xl font-bold text-gray-900 mb-8">"Log in to NexusData"</h1>

                <div class="space-y-3">
                    <SocialButton label="Continue with Google"/>
                    <SocialButton label="Continue with GitHub"/>
                    <SocialButton label="Continue with SSO"/>
                </div>

                <div class="flex items-center my-6">
                    <div class="flex-1 border-t border-gray-200"></div>
                    <span class="px-4 text-sm text-gray-500">"or"</span>
                    <div class="flex-1 border-t border-gray-200"></div>
                </div>

                <form on:submit=on_submit class="space-y-6">
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 mb-2">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                            placeholder="Enter your email"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                        />
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-2">"Password"</label>
                        <div class="relative">
                            <input
                                id="password"
                                type=move || password_input_type(show_password.get())
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                                placeholder="Enter your password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-sm text-gray-600 hover:text-gray-900"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <button type="submit" class="w-full px-4 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                        "Log in"
                    </button>
                </form>

                <p class="mt-6 text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <a href="/signup" class="text-indigo-600 hover:text-indigo-800 font-medium">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
