use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::app_route::AppRoute;
use crate::system::auth::context::{do_login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let token = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        match do_login(session, &token.get_untracked()) {
            Ok(()) => {
                token.set(String::new());
                // Coming from /login itself: continue to the overview.
                // Anywhere else the guarded page renders in place.
                if AppRoute::parse(&location.pathname.get_untracked()) == AppRoute::Login {
                    navigate(&AppRoute::Overview.to_path(), Default::default());
                }
            }
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Compliance Console"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="token">"API token"</label>
                        <textarea
                            id="token"
                            rows="4"
                            placeholder="Paste a bearer token"
                            prop:value=move || token.get()
                            on:input=move |ev| token.set(event_target_value(&ev))
                            required
                        ></textarea>
                    </div>

                    <button type="submit" class="button button--primary">
                        "Sign in"
                    </button>
                </form>

                <div class="login-info">
                    <p>"The token is kept in this browser only and sent as a bearer header."</p>
                </div>
            </div>
        </div>
    }
}
