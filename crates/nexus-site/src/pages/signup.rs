//! Signup page
//!
//! Same placeholder semantics as the login page: submit logs the collected
//! values and account type, nothing is persisted or sent anywhere.

use leptos::*;
use leptos_meta::Title;

use nexus_config::SiteConfig;

use crate::forms::{password_input_type, AccountType};

#[component]
pub fn SignupPage() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let page_title = format!("Sign Up | {}", site.title);

    let (active_tab, set_active_tab) = create_signal(AccountType::Work);
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (organization, set_organization) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (show_confirm, set_show_confirm) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // Placeholder until real registration exists.
        logging::log!(
            "signup attempt with: email={} password={} first_name={} last_name={} organization={} account_type={}",
            email.get_untracked(),
            password.get_untracked(),
            first_name.get_untracked(),
            last_name.get_untracked(),
            organization.get_untracked(),
            active_tab.get_untracked().key()
        );
    };

    let tab_class = move |tab: AccountType| {
        if active_tab.get() == tab {
            "flex-1 py-2 text-center font-medium text-indigo-600 border-b-2 border-indigo-600"
        } else {
            "flex-1 py-2 text-center font-medium text-gray-500 hover:text-gray-700 border-b-2 border-transparent"
        }
    };

    view! {
        <Title text=page_title/>
        <div class="min-h-screen bg-gray-50 py-16">
            <div class="max-w-md mx-auto bg-white rounded-xl shadow-lg p-8">
                <a href="/" class="inline-flex items-center text-sm text-gray-600 hover:text-gray-900 mb-6">
                    "← Back"
                </a>

                <h1 class="text-2xl font-bold text-gray-900 mb-8">"Sign up for NexusData"</h1>

                <div class="flex mb-8">
                    <button
                        type="button"
                        class=move || tab_class(AccountType::Work)
                        on:click=move |_| set_active_tab.set(AccountType::Work)
                    >
                        {AccountType::Work.label()}
                    </button>
                    <button
                        type="button"
                        class=move || tab_class(AccountType::Personal)
                        on:click=move |_| set_active_tab.set(AccountType::Personal)
                    >
                        {AccountType::Personal.label()}
                    </button>
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
                                placeholder="Create a password"
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

                    <div>
                        <label for="confirm-password" class="block text-sm font-medium text-gray-700 mb-2">
                            "Confirm Password"
                        </label>
                        <div class="relative">
                            <input
                                id="confirm-password"
                                type=move || password_input_type(show_confirm.get())
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                                placeholder="Confirm your password"
                                on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                prop:value=confirm_password
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-sm text-gray-600 hover:text-gray-900"
                                on:click=move |_| set_show_confirm.update(|v| *v = !*v)
                            >
                                {move || if show_confirm.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-sm font-semibold text-gray-900 uppercase tracking-wide mb-4">
                            "Profile Info"
                        </h3>

                        <div class="space-y-4">
                            <div>
                                <label for="first-name" class="block text-sm font-medium text-gray-700 mb-2">
                                    "First Name"
                                </label>
                                <input
                                    id="first-name"
                                    type="text"
                                    required
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                                    placeholder="Enter your first name"
                                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                    prop:value=first_name
                                />
                            </div>

                            <div>
                                <label for="last-name" class="block text-sm font-medium text-gray-700 mb-2">
                                    "Last Name (optional)"
                                </label>
                                <input
                                    id="last-name"
                                    type="text"
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                                    placeholder="Enter your last name"
                                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                    prop:value=last_name
                                />
                            </div>

                            <div>
                                <label for="organization" class="block text-sm font-medium text-gray-700 mb-2">
                                    "Organization (optional)"
                                </label>
                                <input
                                    id="organization"
                                    type="text"
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                                    placeholder="Enter your organization"
                                    on:input=move |ev| set_organization.set(event_target_value(&ev))
                                    prop:value=organization
                                />
                            </div>
                        </div>
                    </div>

                    <button type="submit" class="w-full px-4 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                        "Sign up"
                    </button>
                </form>

                <p class="mt-6 text-center text-sm text-gray-600">
                    "Already have an account? "
                    <a href="/login" class="text-indigo-600 hover:text-indigo-800 font-medium">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
