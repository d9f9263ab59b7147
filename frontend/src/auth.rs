//! 认证模块
//!
//! 持有全局唯一的 [`Session`] 与 API 客户端，并把会话的登录状态
//! 镜像到一个信号上，供路由守卫订阅。

use crate::web::{BrowserTokenStore, BuildEnv, FetchHttpClient};
use leptos::prelude::*;
use std::rc::Rc;
use tasklane::{ClientConfig, Session, TaskApi, log_error, log_info};

pub type Api = TaskApi<FetchHttpClient>;

/// 认证上下文
///
/// API 客户端不是 `Send`，放在本地存储的 `StoredValue` 里。
#[derive(Clone, Copy)]
pub struct AuthContext {
    api: StoredValue<Rc<Api>, LocalStorage>,
    is_logged_in: RwSignal<bool>,
}

impl AuthContext {
    /// 读取构建期配置，从 LocalStorage 恢复 token
    pub fn new() -> Self {
        let config = ClientConfig::from_source(&BuildEnv).unwrap_or_else(|e| {
            log_error!("[Auth] Invalid configuration, using defaults: {}", e);
            ClientConfig::default()
        });
        log_info!(
            "[Auth] auth={} api={}",
            config.auth_base_url,
            config.api_base_url
        );

        let session = Session::restore(BrowserTokenStore, &config.token_storage_key);
        let is_logged_in = RwSignal::new(session.is_logged_in());
        let api = Rc::new(TaskApi::new(config, FetchHttpClient, session));

        Self {
            api: StoredValue::new_local(api),
            is_logged_in,
        }
    }

    pub fn api(&self) -> Rc<Api> {
        self.api.get_value()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.is_logged_in.into()
    }

    /// 会话变化后（登录成功）同步信号
    pub fn sync(&self) {
        let logged_in = self.api.with_value(|api| api.session().is_logged_in());
        self.is_logged_in.set(logged_in);
    }

    /// 注销：清除持久化的 token，守卫随即切回登录页
    pub fn logout(&self) {
        self.api.with_value(|api| api.session().logout());
        self.sync();
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
