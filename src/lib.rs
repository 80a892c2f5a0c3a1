//! Taskmaster - 学术代写业务管理后端服务
//!
//! 基于 Actix Web 构建的接单业务运营系统后端：管理学生（客户）、
//! 写手（承接人）、任务（委托稿件）以及双向的收付款台账。
//!
//! # 架构
//! - `cache`: 缓存层（Moka 内存缓存）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `ledger`: 台账核心（定价、结算、换手、评分、期限、看板统计，纯函数）
//! - `middlewares`: 认证与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod ledger;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
