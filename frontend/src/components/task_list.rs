use crate::auth::use_auth;
use crate::components::app_bar::AppBar;
use crate::ui::{LeptosHost, use_ui};
use crate::web::FetchHttpClient;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use tasklane::screens::pagination::PAGE_SIZES;
use tasklane::screens::task_list::{ListState, TaskListScreen};
use tasklane::{DueDate, Task, TaskId};

type Controller = TaskListScreen<FetchHttpClient, LeptosHost>;

#[component]
pub fn TaskListPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let host = LeptosHost::new(use_ui());
    let screen = StoredValue::new_local(Rc::new(TaskListScreen::new(auth.api(), host)));
    on_cleanup(move || {
        screen.try_with_value(|s| s.scope().close());
    });

    let state = Memo::new(move |_| {
        host.track();
        screen.with_value(|s| s.state())
    });

    // 挂载时加载
    let initial = screen.get_value();
    spawn_local(async move { initial.load().await });

    let on_delete = move |id: TaskId| {
        let s = screen.get_value();
        spawn_local(async move {
            s.delete(&id).await;
        });
    };
    let on_complete = move |id: TaskId| {
        let s = screen.get_value();
        spawn_local(async move {
            s.complete(&id).await;
        });
    };
    let on_edit = move |id: TaskId| {
        let route = screen.with_value(|s| s.detail_route(&id));
        router.navigate(route);
    };

    let row_view = move |task: Task| {
        let id = task.id.clone();
        let (delete_id, complete_id, edit_id) = (id.clone(), id.clone(), id);
        let completed = task.completed;
        view! {
            <tr>
                <td class="font-medium">{task.title_label().to_string()}</td>
                <td>{task.due_date_label()}</td>
                <td>
                    <span class="badge badge-outline">{task.status_label().to_string()}</span>
                </td>
                <td>
                    <input
                        type="checkbox"
                        class="toggle toggle-success"
                        prop:checked=completed
                        disabled=completed
                        on:click=move |ev| {
                            // 状态以服务端为准，刷新后才改变
                            ev.prevent_default();
                            on_complete(complete_id.clone());
                        }
                    />
                </td>
                <td class="flex gap-2">
                    <button class="btn btn-ghost btn-sm" on:click=move |_| on_edit(edit_id.clone())>
                        "Edit"
                    </button>
                    <button class="btn btn-ghost btn-sm text-error" on:click=move |_| on_delete(delete_id.clone())>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <AppBar />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Tasks"</h3>
                                <p class="text-base-content/70 text-sm">"All tasks from the server."</p>
                            </div>
                            <button class="btn btn-primary" on:click=move |_| screen.with_value(|s| s.open_create())>
                                "Add Task"
                            </button>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Title"</th>
                                        <th>"Due Date"</th>
                                        <th>"Status"</th>
                                        <th>"Completed"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.get().loading && state.get().rows.is_empty()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span>
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || !state.get().loading && state.get().rows.is_empty()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                "No tasks yet."
                                            </td>
                                        </tr>
                                    </Show>
                                    {move || state.get().visible_rows().iter().cloned().map(row_view).collect_view()}
                                </tbody>
                            </table>
                        </div>

                        <PaginationBar screen=screen state=state />
                    </div>
                </div>
            </div>

            <CreateTaskDrawer screen=screen state=state />
        </div>
    }
}

#[component]
fn PaginationBar(
    screen: StoredValue<Rc<Controller>, LocalStorage>,
    state: Memo<ListState>,
) -> impl IntoView {
    let page = move || state.get().pagination.page;
    let page_count = move || state.get().page_count();

    view! {
        <div class="flex items-center justify-end gap-4 p-4 text-sm">
            <label class="flex items-center gap-2">
                "Rows per page"
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            screen.with_value(|s| s.set_page_size(size));
                        }
                    }
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.to_string() selected=move || state.get().pagination.page_size == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <span>{move || format!("Page {} of {}", page() + 1, page_count())}</span>
            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    disabled=move || page() == 0
                    on:click=move |_| screen.with_value(|s| s.set_page(page().saturating_sub(1)))
                >
                    "«"
                </button>
                <button
                    class="join-item btn btn-sm"
                    disabled=move || page() + 1 >= page_count()
                    on:click=move |_| screen.with_value(|s| s.set_page(page() + 1))
                >
                    "»"
                </button>
            </div>
        </div>
    }
}

/// 创建任务的侧边面板
#[component]
fn CreateTaskDrawer(
    screen: StoredValue<Rc<Controller>, LocalStorage>,
    state: Memo<ListState>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let s = screen.get_value();
        spawn_local(async move {
            s.submit_create().await;
        });
    };
    let input_class = |invalid: bool| {
        if invalid {
            "input input-bordered input-error w-full"
        } else {
            "input input-bordered w-full"
        }
    };

    view! {
        <Show when=move || state.get().create_open>
            <div class="fixed inset-0 z-40 flex justify-end bg-black/30">
                <div class="w-full max-w-md h-full bg-base-100 shadow-2xl p-6 overflow-y-auto">
                    <h3 class="text-xl font-bold mb-4">"Add Task"</h3>
                    <form class="space-y-4" on:submit=on_submit novalidate>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Title"</span></label>
                            <input
                                type="text"
                                class=move || input_class(state.get().errors.title.is_some())
                                prop:value=move || state.get().draft.title
                                on:input=move |ev| screen.with_value(|s| s.set_title(event_target_value(&ev)))
                            />
                            {move || state.get().errors.title.map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Description"</span></label>
                            <textarea
                                rows="4"
                                class=move || if state.get().errors.description.is_some() { "textarea textarea-bordered textarea-error w-full" } else { "textarea textarea-bordered w-full" }
                                prop:value=move || state.get().draft.description
                                on:input=move |ev| screen.with_value(|s| s.set_description(event_target_value(&ev)))
                            ></textarea>
                            {move || state.get().errors.description.map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Due Date"</span></label>
                            <input
                                type="date"
                                min=DueDate::today().to_string()
                                class=move || input_class(state.get().errors.due_date.is_some())
                                prop:value=move || state.get().draft.due_date
                                on:input=move |ev| screen.with_value(|s| s.set_due_date(event_target_value(&ev)))
                            />
                            {move || state.get().errors.due_date.map(|msg| view! {
                                <span class="label-text-alt text-error mt-1">{msg}</span>
                            })}
                        </div>
                        <div class="flex justify-end gap-2 pt-4">
                            <button type="button" class="btn btn-ghost" on:click=move |_| screen.with_value(|s| s.close_create())>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary">"Create"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
