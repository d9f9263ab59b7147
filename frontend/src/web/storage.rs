//! LocalStorage 中的 token 存储
//!
//! token 以原始字符串保存（不做 JSON 编码），与其它客户端共用同一个键。

use gloo_storage::{LocalStorage, Storage};
use tasklane::session::TokenStore;

#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::raw().set_item(key, value).is_ok()
    }

    fn delete(&self, key: &str) -> bool {
        LocalStorage::raw().remove_item(key).is_ok()
    }
}
