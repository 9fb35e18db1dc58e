//! Rubric Engine - 作业评分标准与成绩计算服务
//!
//! 基于 Actix Web 构建，负责评分标准维护、评分记录、提交状态流转与成绩计算。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（评分标准目录、评分记录、提交生命周期、成绩计算）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 参数校验与请求错误处理

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
