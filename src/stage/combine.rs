use std::iter::FusedIterator;

/// 先产出第一个序列的全部元素，再产出第二个序列的全部元素。
///
/// 第一个序列耗尽后即被丢弃，之后不会再被拉取。
pub(crate) struct Chain<A, B> {
    first: Option<A>,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Chain { first: Some(first), second }
    }
}

impl<A, B> Iterator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = &mut self.first {
            match first.next() {
                Some(item) => return Some(item),
                None => self.first = None,
            }
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (second_lower, second_upper) = self.second.size_hint();
        match &self.first {
            Some(first) => {
                let (first_lower, first_upper) = first.size_hint();
                let upper = match (first_upper, second_upper) {
                    (Some(l), Some(r)) => l.checked_add(r),
                    _ => None,
                };
                (first_lower.saturating_add(second_lower), upper)
            }
            None => (second_lower, second_upper),
        }
    }
}

impl<A, B> FusedIterator for Chain<A, B>
where
    A: Iterator,
    B: FusedIterator<Item = A::Item>,
{
}

/// 同步拉取两个序列组成二元组，任意一侧耗尽即整体耗尽。
pub(crate) struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Zip { a, b, done: false }
    }
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // 先拉取左侧，左侧耗尽时不再拉取右侧
        let Some(a) = self.a.next() else {
            self.done = true;
            return None;
        };
        let Some(b) = self.b.next() else {
            self.done = true;
            return None;
        };
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (Some(l), None) => Some(l),
            (None, Some(r)) => Some(r),
            (None, None) => None,
        };
        (a_lower.min(b_lower), upper)
    }
}

impl<A: Iterator, B: Iterator> FusedIterator for Zip<A, B> {}

/// 展开嵌套序列，当前内层序列耗尽后才拉取下一个外层元素。
pub(crate) struct Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    outer: I,
    inner: Option<<I::Item as IntoIterator>::IntoIter>,
}

impl<I> Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    pub(crate) fn new(outer: I) -> Self {
        Flatten { outer, inner: None }
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                // 内层序列不一定是fused，耗尽后立即丢弃
                self.inner = None;
            }
            self.inner = Some(self.outer.next()?.into_iter());
        }
    }
}

impl<I> FusedIterator for Flatten<I>
where
    I: FusedIterator,
    I::Item: IntoIterator,
{
}
