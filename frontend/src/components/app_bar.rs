use crate::auth::use_auth;
use crate::web::router::use_router;
use leptos::prelude::*;
use tasklane::AppRoute;

/// 顶部导航栏，带注销按钮
#[component]
pub fn AppBar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1">
                <a class="btn btn-ghost text-xl" on:click=move |_| router.navigate(AppRoute::TaskList)>
                    "Tasklane"
                </a>
            </div>
            <div class="flex-none">
                <button on:click=move |_| auth.logout() class="btn btn-outline btn-error">
                    "Logout"
                </button>
            </div>
        </div>
    }
}
