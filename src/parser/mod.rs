//! # TTML (Timed Text Markup Language) 解析器
//!
//! 该解析器面向 Apple Music 风格的逐字 / 逐行 TTML 歌词，
//! 不处理样式、区域等通用 TTML 字幕特性。

mod body;
mod constants;
pub mod document;
mod fragments;
mod metadata;
pub mod tree;
mod utils;

use std::str::FromStr;

use tracing::{debug, warn};

use self::{
    constants::{ATTR_ITUNES_TIMING, ATTR_XML_LANG, TAG_BODY, TAG_HEAD, TAG_METADATA, TAG_TT},
    document::XmlElement,
    tree::TreeNode,
};
use crate::{TtmlError, model::TimingModel};

/// 解析 TTML 格式的歌词文件。
///
/// # 参数
///
/// * `content` - TTML 格式的歌词文件内容字符串。
///
/// # 返回
///
/// * `Ok(TimingModel)` - 解析得到的计时模型，`raw` 字段保存了输入的原文。
/// * `Err(TtmlError)` - 解析失败时，返回具体的错误信息。
///
/// # Errors
///
/// * `TtmlError::Format` - 文档的根元素不是 `<tt>`，或者文档中没有任何元素
/// * `TtmlError::Xml` / `TtmlError::Attribute` / `TtmlError::Encoding` - 输入不是可读取的 XML
///
/// 缺少 `<head>`、`<body>` 或任何属性都不是错误，对应的字段保持为空或 `0`。
///
/// 只有根元素允许带命名空间前缀（如 `<tt:tt>`），其余元素按完整名称匹配，
/// 必须写作 `head`、`body`、`div`、`p`、`span`。带前缀的 `<head>` / `<body>` 会被忽略，
/// 并记录在 `warnings` 中。
pub fn parse_ttml(content: &str) -> Result<TimingModel, TtmlError> {
    let root = XmlElement::parse_document(content)?
        .filter(|root| root.local_name() == TAG_TT)
        .ok_or_else(|| TtmlError::Format("缺少 <tt> 根元素".to_string()))?;
    let tree = TreeNode::from_element(&root);

    let mut model = TimingModel {
        raw: content.to_string(),
        ..Default::default()
    };
    model.metadata.lang = tree.attr(ATTR_XML_LANG).map(str::to_owned);
    model.metadata.timing = tree.attr(ATTR_ITUNES_TIMING).map(str::to_owned);

    for element in root
        .child_elements()
        .filter(|e| e.name != e.local_name() && matches!(e.local_name(), TAG_HEAD | TAG_BODY))
    {
        let msg = format!("忽略了带命名空间前缀的 <{}> 元素", element.name);
        warn!("{msg}");
        model.warnings.push(msg);
    }

    if let Some(metadata_node) = tree
        .child(TAG_HEAD)
        .and_then(|head| head.child(TAG_METADATA))
    {
        metadata::parse_metadata(metadata_node, &mut model.metadata, &mut model.warnings);
    }

    if let (Some(body_node), Some(body_element)) =
        (tree.child(TAG_BODY), root.children_named(TAG_BODY).next())
    {
        body::parse_body(body_node, body_element, content, &mut model);
    }

    debug!(
        blocks = model.contents.len(),
        lines = model.lines().count(),
        warnings = model.warnings.len(),
        "TTML 解析完成"
    );

    Ok(model)
}

impl FromStr for TimingModel {
    type Err = TtmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ttml(s)
    }
}
