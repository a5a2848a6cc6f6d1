mod consume;
mod peek;

pub use peek::PeekTo;

use crate::stage::{
    Chain, Chunks, Enumerate, Filter, FilterMap, Flatten, Inspect, Map, Skip, SkipWhile, Take, TakeWhile, Unique, Zip,
};
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::iter::FusedIterator;

/// 惰性序列。
///
/// 包装一个单次遍历的数据源，每个转换阶段都会消耗当前序列并返回新的序列，
/// 只有在下游拉取时才会向上游拉取元素。序列耗尽后会持续返回`None`。
///
/// ```
/// use rseq::Seq;
///
/// let total = Seq::from(1..=10)
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * 3)
///     .filter_map(|x| if x > 20 { Some(x) } else { None })
///     .fold(0, |acc, x| acc + x);
/// assert_eq!(total, 54);
/// ```
pub struct Seq<'a, T> {
    iter: Box<dyn Iterator<Item = T> + 'a>,
}

impl<T> Iterator for Seq<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

// 数据源在构造时fuse，所有阶段都保持fused
impl<T> FusedIterator for Seq<'_, T> {}

impl<T> Debug for Seq<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Seq<'a, T> {
    /// 包装任意有限或无限的数据源。
    pub fn from<S>(source: S) -> Self
    where
        S: IntoIterator<Item = T>,
        S::IntoIter: 'a,
    {
        Seq::wrap(source.into_iter().fuse())
    }

    /// 空序列。
    pub fn empty() -> Self {
        Seq::wrap(std::iter::empty())
    }

    /// 无限重复同一个值。
    pub fn repeat(value: T) -> Self
    where
        T: Clone,
    {
        Seq::wrap(std::iter::repeat(value))
    }

    /// 重复同一个值`count`次。
    pub fn repeat_n(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Seq::wrap(std::iter::repeat_n(value, count))
    }

    /// 仅用于包装保持fused语义的迭代器。
    fn wrap(iter: impl Iterator<Item = T> + 'a) -> Self {
        Seq { iter: Box::new(iter) }
    }

    /* **************************************** 转换 **************************************** */

    pub fn map<U: 'a>(self, f: impl FnMut(T) -> U + 'a) -> Seq<'a, U> {
        Seq::wrap(Map::new(self, f))
    }

    pub fn filter(self, pred: impl FnMut(&T) -> bool + 'a) -> Self {
        Seq::wrap(Filter::new(self, pred))
    }

    /// 映射并过滤，`f`返回`None`的元素被丢弃。
    pub fn filter_map<U: 'a>(self, f: impl FnMut(T) -> Option<U> + 'a) -> Seq<'a, U> {
        Seq::wrap(FilterMap::new(self, f))
    }

    /// 展开嵌套序列，每个内层序列完全耗尽后才拉取下一个外层元素。
    pub fn flatten(self) -> Seq<'a, T::Item>
    where
        T: IntoIterator,
        T::IntoIter: 'a,
        T::Item: 'a,
    {
        Seq::wrap(Flatten::new(self))
    }

    /// 等价于`map(f).flatten()`。
    pub fn flat_map<U>(self, f: impl FnMut(T) -> U + 'a) -> Seq<'a, U::Item>
    where
        U: IntoIterator + 'a,
        U::IntoIter: 'a,
        U::Item: 'a,
    {
        self.map(f).flatten()
    }

    /// 最多保留前`count`个元素，不会拉取第`count`个之后的元素。
    pub fn take(self, count: usize) -> Self {
        Seq::wrap(Take::new(self, count))
    }

    /// 丢弃前`count`个元素。
    pub fn skip(self, count: usize) -> Self {
        Seq::wrap(Skip::new(self, count))
    }

    pub fn enumerate(self) -> Seq<'a, (usize, T)> {
        Seq::wrap(Enumerate::new(self))
    }

    /// 当前序列耗尽后再拉取`other`。
    pub fn chain<S>(self, other: S) -> Self
    where
        S: IntoIterator<Item = T>,
        S::IntoIter: 'a,
    {
        Seq::wrap(Chain::new(self, other.into_iter().fuse()))
    }

    /// 与`other`同步拉取组成二元组，较短的一侧耗尽时结束。
    pub fn zip<S>(self, other: S) -> Seq<'a, (T, S::Item)>
    where
        S: IntoIterator,
        S::IntoIter: 'a,
        S::Item: 'a,
    {
        Seq::wrap(Zip::new(self, other.into_iter().fuse()))
    }

    pub fn inspect(self, f: impl FnMut(&T) + 'a) -> Self {
        Seq::wrap(Inspect::new(self, f))
    }

    /// 保留满足条件的前缀，遇到首个不满足条件的元素后结束。
    pub fn take_while(self, pred: impl FnMut(&T) -> bool + 'a) -> Self {
        Seq::wrap(TakeWhile::new(self, pred))
    }

    /// 丢弃满足条件的前缀。
    pub fn skip_while(self, pred: impl FnMut(&T) -> bool + 'a) -> Self {
        Seq::wrap(SkipWhile::new(self, pred))
    }

    /// 每`size`个元素分为一组，最后一组可能不足`size`个。
    ///
    /// # Panics
    /// `size`为0时panic。
    pub fn chunks(self, size: usize) -> Seq<'a, Vec<T>> {
        Seq::wrap(Chunks::new(self, size))
    }

    /// 去重，保留首次出现的元素。
    pub fn unique(self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        Seq::wrap(Unique::new(self))
    }

    /// 将每个元素以`Display`格式输出到`to`，元素本身不变。
    pub fn peek(self, to: PeekTo) -> Self
    where
        T: Display,
    {
        let mut index = 0;
        self.inspect(move |item| {
            to.report(index, item);
            index += 1;
        })
    }
}
