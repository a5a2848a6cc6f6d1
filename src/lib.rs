//! 惰性、拉取式的序列流水线。
//!
//! [`Seq`]包装任意单次遍历的数据源，提供可链式组合的转换阶段（`map`、`filter`、`zip`等）
//! 以及消耗序列的终结操作（`collect`、`fold`、`sum`等）。
//!
//! ```
//! use rseq::Seq;
//!
//! let pairs = Seq::from([1, 2]).zip(["a", "b", "c"]).collect();
//! assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
//! ```

mod err;
mod num;
mod seq;
mod stage;

pub use err::SeqErr;
pub use num::{Num, Numeric};
pub use ordered_float::OrderedFloat;
pub use seq::{PeekTo, Seq};

/// 整数类型
pub type Integer = i64;
/// 浮点数类型
pub type Float = f64;

pub type SeqRes<T> = Result<T, SeqErr>;
