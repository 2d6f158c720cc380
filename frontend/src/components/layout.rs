use crate::{
    components::toast::ToastHost,
    state::{
        profile::{use_profile, use_session, ProfileState},
        role::{CapabilityLink, Role},
    },
    utils::lifetime::Lifetime,
};
use leptos::*;

const DEFAULT_AVATAR: &str = "https://ui-avatars.com/api/?name=User&background=random";

/// Links shown for a profile; an unloaded profile gets the least privileged set.
fn nav_links(state: &ProfileState) -> Vec<CapabilityLink> {
    state.role().unwrap_or(Role::Employee).links()
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let lifetime = Lifetime::bound_to_owner();
    let profile = use_profile(&lifetime, |_| ());
    let (menu_open, set_menu_open) = create_signal(false);

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let on_logout = move |_| {
        set_menu_open.set(false);
        session.logout();
    };
    let avatar = move || {
        profile
            .get()
            .profile
            .map(|p| p.avatar_url())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string())
    };
    let display_name = move || {
        profile
            .get()
            .profile
            .map(|p| p.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string())
    };
    let display_email = move || {
        profile
            .get()
            .profile
            .map(|p| p.email)
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| "user@mail.com".to_string())
    };

    view! {
        <header class="w-full bg-gray-800 text-white py-3 px-6 flex justify-between items-center sticky top-0 z-40">
            <nav class="flex space-x-4">
                <a href="/main" class="hover:underline">"Home"</a>
                {move || {
                    nav_links(&profile.get())
                        .into_iter()
                        .map(|link| view! { <a href=link.path class="hover:underline">{link.nav_label}</a> })
                        .collect_view()
                }}
            </nav>
            <div class="relative">
                <img
                    src=avatar
                    alt=move || format!("Profile picture of {}", display_name())
                    class="w-10 h-10 rounded-full cursor-pointer border-2 border-white"
                    tabindex="0"
                    on:click=toggle_menu
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            set_menu_open.update(|open| *open = !*open);
                        }
                    }
                />
                <Show when=move || menu_open.get()>
                    <div class="absolute right-0 mt-2 w-auto bg-white shadow-lg rounded-lg py-2 text-gray-800">
                        <p class="px-4 py-2 font-semibold">{display_name}</p>
                        <p class="px-4 py-2 font-semibold">{display_email}</p>
                        <hr/>
                        <button
                            class="w-full text-left px-4 py-2 hover:bg-gray-100"
                            on:click=on_logout.clone()
                        >
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-r from-purple-500 to-indigo-600 text-white">
            <Header/>
            <ToastHost/>
            <main class="flex flex-col items-center px-4 py-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center p-8 gap-2">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-white"></div>
            {label.map(|label| view! { <p class="text-lg">{label}</p> })}
        </div>
    }
}
