//! 构建期配置
//!
//! 后端地址在构建时通过环境变量注入，例如
//! `TASKLANE_API_BASE_URL=https://api.example.com trunk build`。

use tasklane::config::{API_BASE_URL_VAR, AUTH_BASE_URL_VAR, ConfigSource, TOKEN_KEY_VAR};

pub struct BuildEnv;

impl ConfigSource for BuildEnv {
    fn var(&self, name: &str) -> Option<String> {
        // option_env! 只接受字面量
        let value = match name {
            AUTH_BASE_URL_VAR => option_env!("TASKLANE_AUTH_BASE_URL"),
            API_BASE_URL_VAR => option_env!("TASKLANE_API_BASE_URL"),
            TOKEN_KEY_VAR => option_env!("TASKLANE_TOKEN_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    }
}
