use std::fmt::Display;
use tracing::debug;

/// `peek`阶段的输出目标，元素以`Display`格式输出，字符串不带引号。
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PeekTo {
    /// 以`debug`级别的tracing事件输出，携带`index`和`item`字段。
    #[default]
    Trace,
    /// 打印每个值到标准输出。
    StdOut,
    /// 打印每个值到标准错误。
    StdErr,
}

impl PeekTo {
    pub(crate) fn report(&self, index: usize, item: &impl Display) {
        match self {
            PeekTo::Trace => debug!(index, item = %item, "peek"),
            PeekTo::StdOut => println!("{item}"),
            PeekTo::StdErr => eprintln!("{item}"),
        }
    }
}
