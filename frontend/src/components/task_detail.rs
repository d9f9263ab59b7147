use crate::auth::use_auth;
use crate::components::app_bar::AppBar;
use crate::ui::{LeptosHost, use_ui};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use tasklane::TaskId;
use tasklane::screens::task_detail::TaskDetailScreen;

#[component]
pub fn TaskDetailPage(task_id: TaskId) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let host = LeptosHost::new(use_ui());
    let screen = StoredValue::new_local(Rc::new(TaskDetailScreen::new(auth.api(), host, task_id)));
    on_cleanup(move || {
        screen.try_with_value(|s| s.scope().close());
    });

    let state = Memo::new(move |_| {
        host.track();
        screen.with_value(|s| s.state())
    });
    let min_due_date = screen.with_value(|s| s.min_due_date().to_string());

    let initial = screen.get_value();
    spawn_local(async move { initial.load().await });

    let on_edit = move |_: leptos::ev::MouseEvent| {
        let s = screen.get_value();
        spawn_local(async move {
            s.edit().await;
        });
    };
    let on_complete = move |_: leptos::ev::MouseEvent| {
        let s = screen.get_value();
        spawn_local(async move {
            s.complete().await;
        });
    };

    let frozen = move || state.get().completed;
    let field_error = move |msg: Option<&'static str>| {
        msg.map(|msg| view! { <span class="label-text-alt text-error mt-1">{msg}</span> })
    };

    let input_class = |invalid: bool| {
        if invalid {
            "input input-bordered input-error w-full"
        } else {
            "input input-bordered w-full"
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-3xl mx-auto space-y-8">
                <AppBar />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-4">
                        <div class="flex items-center justify-between">
                            <button class="btn btn-ghost btn-sm" on:click=move |_| router.back()>
                                "← Back"
                            </button>
                            <div class="flex items-center gap-2">
                                <span class="badge badge-outline">
                                    {move || {
                                        let status = state.get().status;
                                        if status.is_empty() { "N/A".to_string() } else { status }
                                    }}
                                </span>
                                <Show when=frozen>
                                    <span class="badge badge-success">"Completed"</span>
                                </Show>
                            </div>
                        </div>

                        <Show when=move || state.get().loading && !state.get().loaded>
                            <div class="flex justify-center py-8">
                                <span class="loading loading-spinner loading-md"></span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Title"</span></label>
                            <input
                                type="text"
                                class=move || input_class(state.get().errors.title.is_some())
                                readonly=frozen
                                prop:value=move || state.get().draft.title
                                on:input=move |ev| screen.with_value(|s| s.set_title(event_target_value(&ev)))
                            />
                            {move || field_error(state.get().errors.title)}
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Description"</span></label>
                            <textarea
                                rows="5"
                                class=move || if state.get().errors.description.is_some() { "textarea textarea-bordered textarea-error w-full" } else { "textarea textarea-bordered w-full" }
                                readonly=frozen
                                prop:value=move || state.get().draft.description
                                on:input=move |ev| screen.with_value(|s| s.set_description(event_target_value(&ev)))
                            ></textarea>
                            {move || field_error(state.get().errors.description)}
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Due Date"</span></label>
                            <input
                                type="date"
                                class=move || input_class(state.get().errors.due_date.is_some())
                                min=min_due_date
                                readonly=frozen
                                prop:value=move || state.get().draft.due_date
                                on:input=move |ev| screen.with_value(|s| s.set_due_date(event_target_value(&ev)))
                            />
                            {move || field_error(state.get().errors.due_date)}
                        </div>

                        <div class="card-actions justify-end pt-4">
                            <button class="btn btn-success btn-outline" disabled=frozen on:click=on_complete>
                                "Complete"
                            </button>
                            <button class="btn btn-primary" disabled=frozen on:click=on_edit>
                                "Edit"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
