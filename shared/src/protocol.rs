//! 后端 REST 协议
//!
//! 资源服务的所有响应都包裹在 `{status, data?, message?}` 信封中，
//! 业务成功与否由信封内的 `status` 决定，而不是 HTTP 状态码。

use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/login";
pub const TODOS_PATH: &str = "/Todos";

/// 信封内的业务状态码：创建成功为 201，其余操作为 200
pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;

/// 资源服务的响应信封
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// 信封内的状态码是否等于该操作约定的成功码
    pub fn is_success(&self, expected: u16) -> bool {
        self.status == expected
    }
}

/// 单个任务的资源路径，`id` 需由调用方完成百分号编码
pub fn todo_path(encoded_id: &str) -> String {
    format!("{}/{}", TODOS_PATH, encoded_id)
}

pub fn complete_path(encoded_id: &str) -> String {
    format!("{}/{}/complete", TODOS_PATH, encoded_id)
}

/// 前端路由中的详情页查询参数名
pub const TASK_QUERY_KEY: &str = "id";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_data_decodes() {
        let env: Envelope<Vec<u8>> =
            serde_json::from_str(r#"{"status":500,"message":"boom"}"#).unwrap();
        assert!(!env.is_success(STATUS_OK));
        assert_eq!(env.data, None);
        assert_eq!(env.message.as_deref(), Some("boom"));
    }

    #[test]
    fn success_requires_the_exact_status() {
        let env: Envelope<()> = serde_json::from_str(r#"{"status":201,"message":"ok"}"#).unwrap();
        assert!(env.is_success(STATUS_CREATED));
        assert!(!env.is_success(STATUS_OK));
    }

    #[test]
    fn builds_resource_paths() {
        assert_eq!(todo_path("12"), "/Todos/12");
        assert_eq!(complete_path("12"), "/Todos/12/complete");
    }
}
