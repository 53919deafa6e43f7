//! # XML 元素树
//!
//! 将 `quick-xml` 的事件流组装为一棵简单的元素树。
//!
//! 除了标签名、属性和子节点之外，每个元素还记录了自己在原始文本中的字节范围，
//! 解析器借此取回某一行未经改动的原始标记，用于还原单词之间的空白和标点。

use std::ops::Range;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use tracing::{error, warn};

use super::utils::decode_entity;
use crate::TtmlError;

/// 元素树中的节点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// 子元素。
    Element(XmlElement),
    /// 文本节点。相邻的文本、实体引用和 CDATA 会被合并为一个节点。
    Text(String),
}

/// 一个 XML 元素。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// 带前缀的标签名，如 `"ttm:agent"`。
    pub name: String,
    /// 按出现顺序排列的属性，值已反转义。
    pub attributes: Vec<(String, String)>,
    /// 子节点，保持文档顺序。
    pub children: Vec<XmlNode>,
    /// 元素在原文中的范围，包含起始和结束标签。
    pub outer: Range<usize>,
    /// 起始标签与结束标签之间内容的范围。
    pub inner: Range<usize>,
}

impl XmlElement {
    /// 解析整个文档，返回根元素。
    ///
    /// 文档中没有任何元素时返回 `Ok(None)`。
    ///
    /// # Errors
    ///
    /// 当 `quick-xml` 无法读取文档（标签不匹配、属性格式错误、编码错误等）时返回错误。
    pub fn parse_document(content: &str) -> Result<Option<Self>, TtmlError> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);
        reader.config_mut().expand_empty_elements = true;

        let mut stack: Vec<Self> = Vec::new();
        let mut root: Option<Self> = None;
        let mut buf = Vec::new();

        loop {
            let start = source_position(&reader);
            let event = match reader.read_event_into(&mut buf) {
                Ok(event) => event,
                Err(e) => {
                    error!(
                        "TTML 解析错误，位置 {}: {}。无法继续解析",
                        reader.error_position(),
                        e
                    );
                    return Err(TtmlError::Xml(e));
                }
            };
            let end = source_position(&reader);

            match event {
                Event::Start(e) => stack.push(Self::open(&e, &reader, start..end)?),
                Event::End(_) => {
                    if let Some(mut element) = stack.pop() {
                        element.inner.end = start;
                        element.outer.end = end;
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(XmlNode::Element(element)),
                            None if root.is_none() => root = Some(element),
                            None => warn!("忽略了根元素之后的元素 <{}>", element.name),
                        }
                    }
                }
                Event::Text(e) => push_text(&mut stack, &e.xml_content()?),
                Event::CData(e) => push_text(&mut stack, &String::from_utf8_lossy(&e)),
                Event::GeneralRef(e) => {
                    let entity_name = String::from_utf8_lossy(&e);
                    match decode_entity(&entity_name) {
                        Some(decoded_char) => {
                            push_text(&mut stack, decoded_char.encode_utf8(&mut [0; 4]));
                        }
                        None => warn!("忽略了未知的XML实体 '&{entity_name};'"),
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(root)
    }

    /// 根据起始标签创建元素，结束位置在遇到结束标签时补全。
    fn open(
        e: &BytesStart,
        reader: &Reader<&[u8]>,
        range: Range<usize>,
    ) -> Result<Self, TtmlError> {
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.decode_and_unescape_value(reader.decoder())?;
            attributes.push((key, value.into_owned()));
        }

        Ok(Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            attributes,
            children: Vec::new(),
            inner: range.end..range.end,
            outer: range,
        })
    }

    /// 去掉命名空间前缀后的标签名。
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// 按名称获取属性值。
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 直接子元素。
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// 名为 `name` 的直接子元素。
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> {
        self.child_elements().filter(move |child| child.name == name)
    }

    /// 以先序遍历查找所有名为 `name` 的后代元素（不包括自身）。
    #[must_use]
    pub fn find_all(&self, name: &str) -> Vec<&Self> {
        fn collect<'a>(element: &'a XmlElement, name: &str, found: &mut Vec<&'a XmlElement>) {
            for child in element.child_elements() {
                if child.name == name {
                    found.push(child);
                }
                collect(child, name, found);
            }
        }

        let mut found = Vec::new();
        collect(self, name, &mut found);
        found
    }

    /// 元素内部的原始标记（不含自身的起止标签）。
    #[must_use]
    pub fn inner_markup<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.inner.clone()).unwrap_or_default()
    }
}

fn push_text(stack: &mut [XmlElement], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    if let Some(XmlNode::Text(existing)) = parent.children.last_mut() {
        existing.push_str(text);
    } else {
        parent.children.push(XmlNode::Text(text.to_owned()));
    }
}

fn source_position(reader: &Reader<&[u8]>) -> usize {
    usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> XmlElement {
        XmlElement::parse_document(content).unwrap().unwrap()
    }

    #[test]
    fn test_builds_tree_with_attributes() {
        let root = parse(r#"<tt xml:lang="en"><body dur="1:00"><div/></body></tt>"#);
        assert_eq!(root.name, "tt");
        assert_eq!(root.attribute("xml:lang"), Some("en"));

        let body = root.child_elements().next().unwrap();
        assert_eq!(body.name, "body");
        assert_eq!(body.attribute("dur"), Some("1:00"));
        assert_eq!(body.child_elements().count(), 1);
    }

    #[test]
    fn test_records_source_ranges() {
        let content = r#"<tt><p begin="1">Hi <span>there</span></p></tt>"#;
        let root = parse(content);
        let p = root.find_all("p")[0];
        assert_eq!(&content[p.outer.clone()], r#"<p begin="1">Hi <span>there</span></p>"#);
        assert_eq!(p.inner_markup(content), "Hi <span>there</span>");
        assert_eq!(root.inner_markup(content), &content[4..content.len() - 5]);
    }

    #[test]
    fn test_empty_element_has_empty_inner_range() {
        let content = r#"<tt><span begin="1"/></tt>"#;
        let root = parse(content);
        let span = root.find_all("span")[0];
        assert_eq!(span.inner_markup(content), "");
        assert_eq!(&content[span.outer.clone()], r#"<span begin="1"/>"#);
    }

    #[test]
    fn test_merges_text_and_entities() {
        let root = parse("<tt><p>Rock &amp; Roll &#33;</p></tt>");
        let p = root.find_all("p")[0];
        assert_eq!(p.children, vec![XmlNode::Text("Rock & Roll !".to_string())]);
    }

    #[test]
    fn test_find_all_is_preorder() {
        let root = parse("<tt><div><p id='a'><p id='b'/></p></div><div><p id='c'/></div></tt>");
        let ids: Vec<_> = root
            .find_all("p")
            .iter()
            .filter_map(|p| p.attribute("id"))
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_children_named_skips_descendants() {
        let root = parse("<body><div id='a'><div id='b'/></div><p/><div id='c'/></body>");
        let ids: Vec<_> = root
            .children_named("div")
            .filter_map(|div| div.attribute("id"))
            .collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(root.find_all("div").len(), 3);
    }

    #[test]
    fn test_local_name() {
        let root = parse(r#"<tt:tt xmlns:tt="http://www.w3.org/ns/ttml"/>"#);
        assert_eq!(root.local_name(), "tt");
    }

    #[test]
    fn test_document_without_elements() {
        assert!(XmlElement::parse_document("").unwrap().is_none());
        assert!(XmlElement::parse_document("<?xml version=\"1.0\"?>").unwrap().is_none());
    }

    #[test]
    fn test_mismatched_tags_are_errors() {
        assert!(matches!(
            XmlElement::parse_document("<tt><p></span></tt>"),
            Err(TtmlError::Xml(_))
        ));
    }
}
