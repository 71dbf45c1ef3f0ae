//! # seqlab
//!
//! DNA 序列分析算法库：精确 / 近似模式搜索、后缀数组、重叠图。
//!
//! 本 crate 是一个纯计算后端，上层（持久化、服务编排、展示）只需
//! 传入内存中的序列文本并接收完整物化的结果：
//!
//! - **精确匹配**：Boyer-Moore 的坏字符与好后缀两种位移策略
//! - **近似匹配**：有界 Hamming / 编辑距离搜索
//! - **后缀数组**：倍增法构建 + 逆数组 + 二分定位
//! - **重叠图**：序列集合两两后缀-前缀重叠检测
//!
//! 所有算法函数无内部状态、不做 IO、可重入；并发调度完全交给调用方。
//!
//! ## 快速示例
//!
//! ```rust
//! use seqlab::search::{search_bad_char, search_good_suffix};
//! use seqlab::index::sa;
//!
//! let text = b"GCATCGCAGAGAGTATACAGTACG";
//! let pattern = b"GCAGAGAG";
//!
//! // 两种位移策略给出相同的位置集合
//! let hits = search_bad_char(text, pattern).unwrap();
//! assert_eq!(hits.positions, vec![5]);
//! assert_eq!(search_good_suffix(text, pattern).unwrap().positions, hits.positions);
//!
//! // 后缀数组定位与逆数组往返
//! let sa_arr = sa::build_sa(text);
//! let isa = sa::inverse_sa(&sa_arr).unwrap();
//! assert_eq!(isa[sa_arr[0] as usize], 0);
//! assert_eq!(sa::locate(text, &sa_arr, pattern).unwrap(), vec![5]);
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA 文件解析
//! - [`search`] — 精确（Boyer-Moore）与近似（Hamming / 编辑距离）匹配
//! - [`index`] — 后缀数组构建、定位与可序列化索引缓存
//! - [`graph`] — 后缀-前缀重叠图
//! - [`util`] — 反向互补 / GC 含量 / 密码子翻译等工具函数
//! - [`error`] — 统一错误类型（参数、格式、内部不变量）

pub mod error;
pub mod graph;
pub mod index;
pub mod io;
pub mod search;
pub mod util;

pub use error::{Result, SeqError};
