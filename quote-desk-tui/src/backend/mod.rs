//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ DialogMsg │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 组装              │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   quote-desk-     │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责在启动时把配置变成可用的业务对象。
//! 对话框与提交逻辑全部在 quote-desk-core 中。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（TOML）
//!         mod core_service;       // 组装 Site
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/quote-desk/config.toml
//!
//!         主要方法：
//!             - load()            读取配置；文件不存在时返回默认值
//!             - save(config)      写回配置（首次启动时生成默认文件）
//!
//!         环境变量 QUOTE_DESK_ACCESS_KEY / QUOTE_DESK_ENDPOINT
//!         通过 AppConfig::apply_overrides 覆盖文件中的值。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、核心服务（create_site）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         创建流程：
//!             1. 根据 [relay] 配置创建 FormRelay（Web3Forms）
//!             2. 组装 SenderIdentity（access_key / recipient / sender_label）
//!             3. 创建 DialogContext（注入 relay、发送方与 tokio 运行时句柄）
//!             4. 基于 DialogContext 创建 Site（页头 + 价格区块）
//!
//!         返回 Site 与后台事件接收端，二者一起交给 model::App。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在对话框中按 Enter 提交
//!         ↓
//!     Update 层处理 DialogMessage::Submit
//!         ↓
//!     FormDialog::submit() 校验并进入 submitting，在运行时上发起请求
//!         ↓
//!     FormRelay 向 Web3Forms 发送一次 POST
//!         ↓
//!     结果作为 DialogEvent 送回主循环
//!         ↓
//!     Update 层处理 AppMessage::Background，更新对话框状态
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::create_site;
