//! 任务财务与生命周期账本
//!
//! 纯计算模块：输入实体，输出更新后的实体或派生值，不做任何 I/O。
//! 服务层取数、调用本模块、再写回存储。

pub mod pricing;
pub mod rating;
pub mod schedule;
pub mod settlement;
pub mod stats;
