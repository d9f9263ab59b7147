//! 路由服务模块
//!
//! 封装 window.history，所有对 History API 的操作都集中在此模块。
//! 守卫不改写 URL：未登录时在原地址上渲染登录页，登录后原地切换到目标屏幕。

use leptos::prelude::*;
use tasklane::{AppRoute, Screen, guard, log_info};
use wasm_bindgen::prelude::*;

/// 当前浏览器地址对应的路由（pathname + search）
fn current_route() -> AppRoute {
    let location = web_sys::window().map(|w| w.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let search = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    AppRoute::parse(&path, &search)
}

fn push_history_state(url: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// 路由器服务
///
/// 认证状态通过注入的信号获得，与认证模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        Self {
            current_route: RwSignal::new(current_route()),
            is_authenticated,
        }
    }

    /// 经过守卫后实际应渲染的屏幕
    pub fn screen(&self) -> Screen {
        guard(&self.current_route.get(), self.is_authenticated.get())
    }

    /// 推入新地址并切换路由
    pub fn navigate(&self, route: AppRoute) {
        let url = route.to_url();
        log_info!("[Router] -> {}", url);
        push_history_state(&url);
        self.current_route.set(route);
    }

    /// 浏览器后退，实际的路由切换由 popstate 完成
    pub fn back(&self) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }

    /// 浏览器后退/前进
    fn init_popstate_listener(&self) {
        let current = self.current_route;
        let closure = Closure::<dyn Fn()>::new(move || {
            current.set(current_route());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

/// 路由出口：按守卫裁决的屏幕渲染
///
/// 屏幕未变化时不重建视图，只有切换屏幕才会卸载旧组件。
#[component]
pub fn RouterOutlet(matcher: fn(Screen) -> AnyView) -> impl IntoView {
    let router = use_router();
    let screen = Memo::new(move |_| router.screen());

    move || matcher(screen.get())
}
