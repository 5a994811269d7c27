//! 共享测试工具和辅助函数

#![allow(dead_code, clippy::expect_used)]

use quote_desk_relay::{ContactFields, FieldSet, FormMetadata};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got Ok");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// 本地单次应答 HTTP 服务
pub struct CannedServer {
    /// 提交地址
    pub endpoint: String,
    /// 收到的原始请求（请求头 + 请求体）
    pub request: oneshot::Receiver<String>,
}

/// 启动只应答一次的本地服务，返回固定状态码与响应体
pub async fn serve_once(status: u16, body: &'static str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let raw = read_request(&mut socket).await;
        let reason = if status == 200 { "OK" } else { "Canned" };
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
        let _ = tx.send(raw);
    });

    CannedServer {
        endpoint: format!("http://{addr}/submit"),
        request: rx,
    }
}

/// 启动只接受连接、永不应答的本地服务
pub async fn serve_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let _ = read_request(&mut socket).await;
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    });

    format!("http://{addr}/submit")
}

/// 获取一个当前无人监听的本地地址
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}/submit")
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// 构造一份报价请求字段集
pub fn quote_request_fields(access_key: &str) -> FieldSet {
    FieldSet::new(
        FormMetadata {
            access_key: access_key.to_string(),
            subject: "Quote Request: Computers".to_string(),
            recipient: "notonce50@gmail.com".to_string(),
            sender_label: "L&SD Website".to_string(),
            category: Some("Computers".to_string()),
        },
        ContactFields {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            message: "Need 5 laptops".to_string(),
        },
    )
}
