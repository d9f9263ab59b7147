use crate::ui::use_ui;
use leptos::prelude::*;
use tasklane::NotificationLevel;

#[component]
pub fn Toasts() -> impl IntoView {
    let ui = use_ui();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || ui.toasts.get()
                key=|n| n.id
                children=move |n| {
                    let class = match n.level {
                        NotificationLevel::Success => "alert alert-success shadow-lg",
                        NotificationLevel::Error => "alert alert-error shadow-lg",
                        NotificationLevel::Info => "alert alert-info shadow-lg",
                    };
                    let id = n.id;
                    view! {
                        <div class=class on:click=move |_| ui.dismiss(id)>
                            <span>{n.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
