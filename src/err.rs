use thiserror::Error;

/// 序列操作的错误。
///
/// 空序列、索引越界、未找到匹配等情况不属于错误，统一以`None`表示。
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Numeric Op] `{op}` requires numeric elements, but element #{index} `{item}` is not a number: {reason}")]
    NotNumeric { op: &'static str, index: usize, item: String, reason: String },

    #[error("[Numeric Op] `{op}` overflowed at element #{index}")]
    Overflow { op: &'static str, index: usize },

    #[error("[Parse Num] Unable to parse `{0}` as a number")]
    ParseNumErr(String),
}

impl SeqErr {
    /// 错误所属的操作名称，如果错误与具体操作无关则返回`None`。
    pub fn op(&self) -> Option<&'static str> {
        match self {
            SeqErr::NotNumeric { op, .. } | SeqErr::Overflow { op, .. } => Some(op),
            SeqErr::ParseNumErr(_) => None,
        }
    }
}
