//! 流水线的各个阶段。
//!
//! 每个阶段独占其上游迭代器，并只在下游拉取时才向上游拉取。
//! 上游为`FusedIterator`时，阶段自身也保持耗尽后持续返回`None`。

mod chunk;
mod combine;
mod map;
mod select;

pub(crate) use chunk::Chunks;
pub(crate) use combine::{Chain, Flatten, Zip};
pub(crate) use map::{Enumerate, Inspect, Map};
pub(crate) use select::{Filter, FilterMap, Skip, SkipWhile, Take, TakeWhile, Unique};
