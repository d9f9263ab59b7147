//! 浏览器 HTTP 客户端
//!
//! 基于 `gloo-net` 的 fetch 封装，实现核心库的 [`HttpClient`] 接口。
//! 非 2xx 状态原样返回，由 API 层决定如何处理。

use gloo_net::http::{Method, RequestBuilder};
use tasklane::error::{ClientError, ClientResult};
use tasklane::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(to_method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::network(format!("failed to build request: {}", e)))?;

        let resp = request
            .send()
            .await
            .map_err(|e| ClientError::network(e.to_string()).in_op_with("fetch", &req.url))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::decode(e.to_string()).in_op_with("fetch", &req.url))?;

        Ok(HttpResponse { status, body })
    }
}
