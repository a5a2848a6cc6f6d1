use crate::err::SeqErr;
use crate::num::Numeric;
use crate::seq::Seq;
use crate::SeqRes;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/* **************************************** 消耗 **************************************** */
impl<'a, T: 'a> Seq<'a, T> {
    /// 按顺序收集全部元素。
    pub fn collect(self) -> Vec<T> {
        self.iter.collect()
    }

    /// 从左到右累积，空序列返回`init`。
    pub fn fold<B>(self, init: B, f: impl FnMut(B, T) -> B) -> B {
        self.iter.fold(init, f)
    }

    /// 返回首个满足条件的元素，找到后不再拉取。
    pub fn find(mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        self.iter.find(pred)
    }

    /// 遇到首个不满足条件的元素时立即返回`false`，空序列返回`true`。
    pub fn all(mut self, pred: impl FnMut(T) -> bool) -> bool {
        self.iter.all(pred)
    }

    /// 遇到首个满足条件的元素时立即返回`true`，空序列返回`false`。
    pub fn any(mut self, pred: impl FnMut(T) -> bool) -> bool {
        self.iter.any(pred)
    }

    pub fn count(self) -> usize {
        self.iter.count()
    }

    pub fn last(self) -> Option<T> {
        self.iter.last()
    }

    /// 第`n`个元素（从0开始），越界时返回`None`。
    pub fn nth(mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }

    /// 首个满足条件的元素的索引（从0开始）。
    pub fn position(mut self, pred: impl FnMut(T) -> bool) -> Option<usize> {
        self.iter.position(pred)
    }

    /// 最大值，存在多个最大值时返回第一个。
    pub fn max(self) -> Option<T>
    where
        T: Ord,
    {
        self.max_by(T::cmp)
    }

    /// 最小值，存在多个最小值时返回第一个。
    pub fn min(self) -> Option<T>
    where
        T: Ord,
    {
        self.min_by(T::cmp)
    }

    /// 按照`compare`取最大值，只有严格大于当前最大值时才替换。
    pub fn max_by(self, mut compare: impl FnMut(&T, &T) -> Ordering) -> Option<T> {
        self.extreme_by(|item, best| compare(item, best) == Ordering::Greater)
    }

    /// 按照`compare`取最小值，只有严格小于当前最小值时才替换。
    pub fn min_by(self, mut compare: impl FnMut(&T, &T) -> Ordering) -> Option<T> {
        self.extreme_by(|item, best| compare(item, best) == Ordering::Less)
    }

    fn extreme_by(self, mut replaces: impl FnMut(&T, &T) -> bool) -> Option<T> {
        let mut iter = self.iter;
        let first = iter.next()?;
        Some(iter.fold(first, |best, item| if replaces(&item, &best) { item } else { best }))
    }

    /// 求和，空序列返回`T::ZERO`。
    pub fn sum(self) -> T
    where
        T: Numeric,
    {
        self.iter.fold(T::ZERO, |acc, item| acc + item)
    }

    /// 求积，空序列返回`T::ONE`。
    pub fn product(self) -> T
    where
        T: Numeric,
    {
        self.iter.fold(T::ONE, |acc, item| acc * item)
    }

    /// 将每个文本元素解析为数值后求和，遇到无法解析的元素或结果溢出时立即失败。
    ///
    /// ```
    /// use rseq::{Num, Seq};
    ///
    /// assert_eq!(Seq::from(["1", "2.5", "3"]).try_sum::<Num>(), Ok(Num::Float(6.5)));
    /// assert!(Seq::from(["1", "x"]).try_sum::<i64>().is_err());
    /// ```
    pub fn try_sum<N>(self) -> SeqRes<N>
    where
        T: AsRef<str>,
        N: Numeric + FromStr,
        N::Err: Display,
    {
        self.try_reduce("sum", N::ZERO, N::checked_add)
    }

    /// 将每个文本元素解析为数值后求积，遇到无法解析的元素或结果溢出时立即失败。
    pub fn try_product<N>(self) -> SeqRes<N>
    where
        T: AsRef<str>,
        N: Numeric + FromStr,
        N::Err: Display,
    {
        self.try_reduce("product", N::ONE, N::checked_mul)
    }

    fn try_reduce<N>(self, op: &'static str, init: N, mut f: impl FnMut(N, N) -> Option<N>) -> SeqRes<N>
    where
        T: AsRef<str>,
        N: FromStr,
        N::Err: Display,
    {
        self.iter.enumerate().try_fold(init, |acc, (index, item)| {
            let text = item.as_ref();
            let n = text.parse::<N>().map_err(|err| {
                debug!(op, index, item = text, "element is not numeric");
                SeqErr::NotNumeric { op, index, item: text.to_owned(), reason: err.to_string() }
            })?;
            f(acc, n).ok_or_else(|| {
                debug!(op, index, "numeric overflow");
                SeqErr::Overflow { op, index }
            })
        })
    }

    /// 以`sep`连接所有元素。
    pub fn join(mut self, sep: &str) -> String
    where
        T: Display,
    {
        self.iter.join(sep)
    }

    pub fn for_each(self, f: impl FnMut(T)) {
        self.iter.for_each(f)
    }
}
