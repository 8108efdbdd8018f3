//! Dojo System - 武术道馆管理后端服务
//!
//! 基于 Actix Web 构建，覆盖学员、教师、队伍、考级、证书和在线课程。
//!
//! # 架构
//! - `artifacts`: 证书二维码与 PDF 生成
//! - `cache`: 缓存层（Moka）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数（CPF、CEP、证书编号等）

pub mod artifacts;
pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
