use crate::{state::profile::use_session, utils::navigation};
use leptos::*;

/// Renders `children` only when a session token is present; otherwise sends the browser
/// to `/login` before anything inside mounts.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let has_token = session.has_token();
    if !should_render_children(has_token) {
        log::debug!("No session token, redirecting to login");
        navigation::navigate("/login");
    }
    view! {
        <Show when=move || should_render_children(has_token) fallback=|| ()>
            {children()}
        </Show>
    }
}

fn should_render_children(has_token: bool) -> bool {
    has_token
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireSession;
    use crate::test_support::{helpers::provide_offline_session, ssr::render_to_string};
    use leptos::*;

    #[test]
    fn renders_children_with_token() {
        let html = render_to_string(move || {
            provide_offline_session(Some("tok"));
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn hides_children_without_token() {
        let html = render_to_string(move || {
            provide_offline_session(None);
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(!html.contains("protected-content"));
    }
}
