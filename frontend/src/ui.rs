//! 界面宿主
//!
//! [`UiContext`] 保存全局的通知列表和当前确认框；
//! [`LeptosHost`] 把它和屏幕自己的版本信号组合成 [`ScreenHost`]。

use futures::channel::oneshot;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tasklane::{ConfirmPrompt, Notification, ScreenHost};

/// 通知显示时长（毫秒）
const TOAST_MILLIS: u32 = 3_000;

#[derive(Clone, Copy)]
pub struct UiContext {
    pub toasts: RwSignal<Vec<Notification>>,
    pub prompt: RwSignal<Option<ConfirmPrompt>>,
    reply: StoredValue<Option<oneshot::Sender<bool>>, LocalStorage>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            prompt: RwSignal::new(None),
            reply: StoredValue::new_local(None),
        }
    }

    /// 打开确认框，等待用户选择
    ///
    /// 同一时刻只有一个确认框；新的请求会把旧的视为取消。
    pub async fn ask(&self, prompt: &ConfirmPrompt) -> bool {
        let (tx, rx) = oneshot::channel();
        if let Some(previous) = self.reply.try_update_value(|slot| slot.replace(tx)).flatten() {
            let _ = previous.send(false);
        }
        self.prompt.set(Some(prompt.clone()));
        rx.await.unwrap_or(false)
    }

    /// 确认框按钮回调
    pub fn answer(&self, confirmed: bool) {
        self.prompt.set(None);
        if let Some(tx) = self.reply.try_update_value(|slot| slot.take()).flatten() {
            let _ = tx.send(confirmed);
        }
    }

    /// 显示通知，到时自动移除
    pub fn push(&self, notification: Notification) {
        let id = notification.id;
        self.toasts.update(|list| list.push(notification));

        let toasts = self.toasts;
        Timeout::new(TOAST_MILLIS, move || {
            toasts.try_update(|list| list.retain(|n| n.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: uuid::Uuid) {
        self.toasts.update(|list| list.retain(|n| n.id != id));
    }
}

pub fn use_ui() -> UiContext {
    use_context::<UiContext>().expect("UiContext should be provided")
}

/// 屏幕宿主
///
/// `version` 在控制器每次改动状态后递增，视图订阅它并重新读取快照。
#[derive(Clone, Copy)]
pub struct LeptosHost {
    ui: UiContext,
    version: RwSignal<u64>,
}

impl LeptosHost {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            version: RwSignal::new(0),
        }
    }

    /// 在响应式闭包中调用，以订阅控制器状态
    pub fn track(&self) {
        self.version.track();
    }
}

#[async_trait::async_trait(?Send)]
impl ScreenHost for LeptosHost {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.ui.ask(prompt).await
    }

    fn notify(&self, notification: Notification) {
        self.ui.push(notification);
    }

    fn changed(&self) {
        // 屏幕卸载后信号已被释放
        self.version.try_update(|v| *v += 1);
    }
}
