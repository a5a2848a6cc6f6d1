use std::iter::FusedIterator;

/// 将连续元素按固定大小分组，最后一组可能不足。
pub(crate) struct Chunks<I> {
    source: I,
    group_size: usize,
}

impl<I> Chunks<I> {
    pub(crate) fn new(source: I, group_size: usize) -> Self {
        assert!(group_size > 0, "chunk size must be greater than zero");
        Chunks { source, group_size }
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::new();
        for _ in 0..self.group_size {
            if let Some(item) = self.source.next() {
                chunk.push(item);
            } else {
                break;
            }
        }
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

impl<I: FusedIterator> FusedIterator for Chunks<I> {}
