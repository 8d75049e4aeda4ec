use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_title;
use crate::state::State;

/// Placeholder figures; there is no analytics source behind the dashboard.
const STATS: &[(&str, &str)] = &[
    ("Total clicks", "1023"),
    ("Average time on page", "5.4 min"),
    ("Users online", "12"),
];

const RECENT_LOGINS: &[(&str, &str)] = &[
    ("user1@example.com", "10:15 AM"),
    ("admin@example.com", "9:45 AM"),
    ("john.doe@example.com", "8:30 AM"),
];

#[function_component]
pub fn AdminDashboardPage() -> Html {
    use_title("Dashboard");
    let (state, _) = use_store::<State>();

    let greeting = match &state.session_email {
        Some(email) => format!("Welcome back, {email}"),
        None => "Welcome back".to_string(),
    };

    html! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-neutral-900">{greeting}</h1>

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                {STATS.iter().map(|(label, value)| html! {
                    <div class="bg-white rounded-lg shadow p-6">
                        <p class="text-sm text-neutral-600">{*label}</p>
                        <p class="mt-2 text-3xl font-semibold text-neutral-900">{*value}</p>
                    </div>
                }).collect::<Html>()}
            </div>

            <div class="bg-white rounded-lg shadow">
                <h2 class="px-6 py-4 text-lg font-semibold text-neutral-900 border-b border-neutral-200">
                    {"Recent logins"}
                </h2>
                <ul class="divide-y divide-neutral-200">
                    {RECENT_LOGINS.iter().map(|(email, time)| html! {
                        <li class="flex justify-between px-6 py-3 text-sm">
                            <span class="text-neutral-900">{*email}</span>
                            <span class="text-neutral-500">{*time}</span>
                        </li>
                    }).collect::<Html>()}
                </ul>
            </div>
        </div>
    }
}
