use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod date;
pub mod protocol;

pub use date::DueDate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 任务标识，由后端分配
///
/// 后端可能以字符串或数字形式返回，统一保存为字符串。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => TaskId(s),
            RawId::Unsigned(n) => TaskId(n.to_string()),
            RawId::Signed(n) => TaskId(n.to_string()),
        })
    }
}

/// 缺失与显式 `null` 一样，都取类型默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 后端持有的任务记录
///
/// 单行字段不完整不应拖垮整张列表，可选字段都宽松解码。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: TaskId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, with = "date::optional")]
    pub due_date: Option<DueDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(
        rename = "_completed",
        alias = "completed",
        default,
        deserialize_with = "null_as_default"
    )]
    pub completed: bool,
}

impl Task {
    /// 列表与详情中使用的状态文本，空值显示为 `N/A`
    pub fn status_label(&self) -> &str {
        if self.status.trim().is_empty() {
            "N/A"
        } else {
            &self.status
        }
    }

    pub fn title_label(&self) -> &str {
        if self.title.trim().is_empty() {
            "N/A"
        } else {
            &self.title
        }
    }

    pub fn due_date_label(&self) -> String {
        self.due_date
            .map(|d| d.long_format())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// 创建任务的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub due_date: DueDate,
}

/// 全量更新任务的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub due_date: DueDate,
    pub status: String,
    #[serde(rename = "_completed")]
    pub completed: bool,
}

/// 登录凭据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// 登录成功时认证服务的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_accepts_numeric_id_and_datetime_due_date() {
        let task: Task = serde_json::from_str(
            r#"{"id":7,"title":"Write","description":"docs","due_date":"2025-01-01T00:00:00.000Z","status":"pending","_completed":false}"#,
        )
        .unwrap();

        assert_eq!(task.id, TaskId::new("7"));
        assert_eq!(task.due_date.unwrap().to_string(), "2025-01-01");
        assert!(!task.completed);
    }

    #[test]
    fn task_tolerates_missing_optional_fields() {
        let task: Task = serde_json::from_str(r#"{"id":"a1","completed":true}"#).unwrap();

        assert_eq!(task.title_label(), "N/A");
        assert_eq!(task.status_label(), "N/A");
        assert_eq!(task.due_date_label(), "N/A");
        assert!(task.completed);
    }

    #[test]
    fn task_tolerates_null_fields() {
        let task: Task = serde_json::from_str(
            r#"{"id":2,"title":null,"description":null,"due_date":null,"status":null,"_completed":null}"#,
        )
        .unwrap();

        assert_eq!(task.id, TaskId::new("2"));
        assert_eq!(task.title, "");
        assert_eq!(task.description, "");
        assert_eq!(task.status_label(), "N/A");
        assert_eq!(task.title_label(), "N/A");
        assert_eq!(task.due_date_label(), "N/A");
        assert!(!task.completed);
    }

    #[test]
    fn task_accepts_underscore_id() {
        let task: Task = serde_json::from_str(r#"{"_id":"65f0c1","title":"Write"}"#).unwrap();
        assert_eq!(task.id, TaskId::new("65f0c1"));
    }

    #[test]
    fn update_serializes_completed_with_wire_name() {
        let update = TaskUpdate {
            title: "t".into(),
            description: "d".into(),
            due_date: DueDate::parse("2025-03-09").unwrap(),
            status: "pending".into(),
            completed: false,
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["_completed"], serde_json::json!(false));
        assert_eq!(json["due_date"], serde_json::json!("2025-03-09"));
    }

    #[test]
    fn login_response_reads_access_token() {
        let res: LoginResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        assert_eq!(res.access_token, "abc");
    }
}
