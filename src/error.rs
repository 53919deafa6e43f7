use quick_xml::{
    Error as QuickXmlErrorMain, encoding::EncodingError,
    events::attributes::AttrError as QuickXmlAttrError,
};
use thiserror::Error;

/// 解析 TTML 歌词时可能发生的错误。
///
/// 缺失的可选结构（`<head>`、`<body>`、属性等）不会产生错误，
/// 只有文档本身无法读取或缺少 `<tt>` 根元素时才会失败。
#[derive(Error, Debug)]
pub enum TtmlError {
    /// 文档结构不符合 TTML 格式，例如缺少 `<tt>` 根元素。
    #[error("无效的 TTML 格式: {0}")]
    Format(String),
    /// XML 读取错误，通常来自 `quick-xml` 库。
    #[error("XML 解析错误: {0}")]
    Xml(#[from] QuickXmlErrorMain),
    /// XML 属性解析错误，通常来自 `quick-xml` 库。
    #[error("XML 属性错误: {0}")]
    Attribute(#[from] QuickXmlAttrError),
    /// XML 文本编码或解码错误。
    #[error("文本编码或解码错误: {0}")]
    Encoding(#[from] EncodingError),
}

impl From<TtmlError> for std::io::Error {
    fn from(err: TtmlError) -> Self {
        Self::other(err)
    }
}
