use crate::auth::use_auth;
use crate::ui::{LeptosHost, use_ui};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use tasklane::screens::login::LoginScreen;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let host = LeptosHost::new(use_ui());
    let screen = StoredValue::new_local(Rc::new(LoginScreen::new(auth.api(), host)));
    on_cleanup(move || {
        screen.try_with_value(|s| s.scope().close());
    });

    let state = Memo::new(move |_| {
        host.track();
        screen.with_value(|s| s.state())
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let s = screen.get_value();
        spawn_local(async move {
            // 守卫订阅了认证信号，登录后原地切换屏幕
            if s.submit().await {
                auth.sync();
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Tasklane"</h1>
                    <p class="text-base-content/70">"Sign in to manage your tasks"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| screen.with_value(|s| s.set_username(event_target_value(&ev)))
                                prop:value=move || state.get().draft.username
                                class=move || if state.get().errors.username.is_some() { "input input-bordered input-error" } else { "input input-bordered" }
                            />
                            {move || state.get().errors.username.map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                on:input=move |ev| screen.with_value(|s| s.set_password(event_target_value(&ev)))
                                prop:value=move || state.get().draft.password
                                class=move || if state.get().errors.password.is_some() { "input input-bordered input-error" } else { "input input-bordered" }
                            />
                            {move || state.get().errors.password.map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || state.get().submitting>
                                {move || if state.get().submitting {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
