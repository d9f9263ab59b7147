use crate::ui::use_ui;
use leptos::prelude::*;

/// 全局确认框
///
/// 阻塞式：控制器在 `confirm().await` 处等待，直到这里的按钮被点击。
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let ui = use_ui();

    move || {
        ui.prompt.get().map(|prompt| {
            view! {
                <div class="modal modal-open">
                    <div class="modal-box text-center">
                        <h3 class="font-bold text-lg">{prompt.title}</h3>
                        <div class="modal-action justify-center">
                            <button class="btn btn-primary" on:click=move |_| ui.answer(true)>
                                {prompt.confirm_label}
                            </button>
                            <button class="btn btn-ghost" on:click=move |_| ui.answer(false)>
                                {prompt.cancel_label}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
