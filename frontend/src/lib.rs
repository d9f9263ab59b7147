//! Tasklane 前端应用
//!
//! 业务逻辑都在 `tasklane` 核心库的屏幕控制器中，这里只负责：
//! - `web`: 浏览器能力（fetch、LocalStorage、History、构建期配置）
//! - `auth`: 会话与认证信号
//! - `ui`: 确认框、通知以及控制器到视图的变更通知
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod app_bar;
    pub mod confirm_dialog;
    pub mod login;
    pub mod task_detail;
    pub mod task_list;
    pub mod toast;
}
mod ui;

pub(crate) mod web {
    mod config;
    mod http;
    pub mod router;
    mod storage;

    pub use config::BuildEnv;
    pub use http::FetchHttpClient;
    pub use storage::BrowserTokenStore;
}

use crate::auth::AuthContext;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::login::LoginPage;
use crate::components::task_detail::TaskDetailPage;
use crate::components::task_list::TaskListPage;
use crate::components::toast::Toasts;
use crate::ui::UiContext;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;
use tasklane::Screen;

/// 路由匹配函数
///
/// 接收守卫裁决后的屏幕，返回对应的视图组件。
fn route_matcher(screen: Screen) -> AnyView {
    match screen {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::TaskList => view! { <TaskListPage /> }.into_any(),
        Screen::TaskDetail(id) => view! { <TaskDetailPage task_id=id /> }.into_any(),
        Screen::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <a href="/" class="btn btn-link mt-4">"Back to tasks"</a>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ui = UiContext::new();
    provide_context(ui);

    // 启动时从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    view! {
        <Router is_authenticated=auth_ctx.is_authenticated_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <ConfirmDialog />
        <Toasts />
    }
}
