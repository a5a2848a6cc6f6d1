use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::iter::FusedIterator;

/// 仅保留满足条件的元素。
pub(crate) struct Filter<I, P> {
    iter: I,
    pred: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        Filter { iter, pred }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if (self.pred)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// 映射并过滤，映射结果为`None`的元素被丢弃。
pub(crate) struct FilterMap<I, F> {
    iter: I,
    f: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        FilterMap { iter, f }
    }
}

impl<B, I, F> Iterator for FilterMap<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<B, I, F> FusedIterator for FilterMap<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Option<B>,
{
}

/// 最多产出前N个元素，不会拉取第N个之后的元素。
pub(crate) struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I> Take<I> {
    pub(crate) fn new(iter: I, count: usize) -> Self {
        Take { iter, remaining: count }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (lower.min(self.remaining), Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))))
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

/// 丢弃前N个元素，首次拉取时才会真正丢弃。
pub(crate) struct Skip<I> {
    iter: I,
    remaining: usize,
}

impl<I> Skip<I> {
    pub(crate) fn new(iter: I, count: usize) -> Self {
        Skip { iter, remaining: count }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.iter.next()?;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.saturating_sub(self.remaining), upper.map(|upper| upper.saturating_sub(self.remaining)))
    }
}

impl<I: FusedIterator> FusedIterator for Skip<I> {}

/// 持续产出满足条件的元素，遇到首个不满足条件的元素后永久耗尽。
pub(crate) struct TakeWhile<I, P> {
    iter: I,
    pred: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        TakeWhile { iter, pred, done: false }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(item) = self.iter.next() else {
            self.done = true;
            return None;
        };
        if (self.pred)(&item) {
            Some(item)
        } else {
            // 不满足条件的元素已被拉取，直接丢弃
            self.done = true;
            None
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// 持续丢弃满足条件的元素，直到首个不满足条件的元素，其后原样产出。
pub(crate) struct SkipWhile<I, P> {
    iter: I,
    pred: P,
    skipping: bool,
}

impl<I, P> SkipWhile<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        SkipWhile { iter, pred, skipping: true }
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.skipping {
            return self.iter.next();
        }
        for item in self.iter.by_ref() {
            if !(self.pred)(&item) {
                self.skipping = false;
                return Some(item);
            }
        }
        None
    }
}

impl<I, P> FusedIterator for SkipWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// 去重，只保留每个元素首次出现的位置。
pub(crate) struct Unique<I: Iterator> {
    iter: I,
    seen: FxHashSet<I::Item>,
}

impl<I: Iterator> Unique<I> {
    pub(crate) fn new(iter: I) -> Self {
        Unique { iter, seen: FxHashSet::default() }
    }
}

impl<I> Iterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            // 返回 true 表示首次出现
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }
}

impl<I> FusedIterator for Unique<I>
where
    I: FusedIterator,
    I::Item: Eq + Hash + Clone,
{
}
