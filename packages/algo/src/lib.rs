//! # study-priority-algo - 学习优先级核心算法库
//!
//! 本 crate 提供纯 Rust 实现的学习优先级算法:
//!
//! - **Priority Engine** - `priority = importance × (1 − mastery)`，排序并分类
//! - **Category Policy** - 有序规则决定 Study Now / Revise Later / Mastered / Deprioritize
//! - **Importance** - 基于历年考题 (频次、分值、时效) 的主题重要度
//! - **Mastery** - 基于模拟测验正确率的掌握度 (低样本阻尼)
//!
//! ## 设计理念
//!
//! - **纯函数** - 无 I/O、无全局状态，不修改输入
//! - **确定性** - 相同输入产生完全相同的输出 (稳定排序)
//! - **充分测试** - 所有算法都有完整的单元测试
//!
//! ## 模块结构
//!
//! - [`engine`] - 优先级引擎 (评分、分类、排序、批量计算)
//! - [`policy`] - 分类阈值与分数校验模式
//! - [`importance`] - 主题重要度
//! - [`mastery`] - 主题掌握度
//! - [`records`] - JSON 记录解析与输入组装
//! - [`sanitize`] - 数据清洗 (数值有效性、截断)
//! - [`error`] - 错误类型
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use study_priority_algo::{PriorityEngine, Recommendation, TopicRecord};
//!
//! let engine = PriorityEngine::default();
//! let entries = engine
//!     .compute(&[
//!         TopicRecord::new("Math", "Calculus", 0.9, 0.1),
//!         TopicRecord::new("Math", "Algebra", 0.9, 0.85),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(entries[0].topic_name, "Calculus");
//! assert_eq!(entries[0].recommendation, Recommendation::StudyNow);
//! assert_eq!(entries[1].recommendation, Recommendation::Mastered);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod engine;
pub mod error;
pub mod importance;
pub mod mastery;
pub mod policy;
pub mod records;
pub mod sanitize;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

/// 重新导出优先级引擎
pub use engine::{priority_score, PriorityEngine};

/// 重新导出错误类型
pub use error::{PriorityError, PriorityResult, ScoreField};

/// 重新导出分类策略
pub use policy::{CategoryPolicy, EngineConfig, ScoreValidation};

/// 重新导出重要度与掌握度计算
pub use importance::{compute_importance, ImportanceWeights};
pub use mastery::{compute_mastery, MasteryConfig};

/// 重新导出记录适配
pub use records::{assemble_records, parse_records};
