//! # 通用键值树
//!
//! 将 XML 元素转换为与解析库无关的键值树：
//!
//! * 属性 `a` 保存在键 `"_" + a` 下；
//! * 子元素保存在与其标签名相同的键下，第一次出现时直接保存，
//!   再次出现时转换为序列并追加；
//! * 文本子节点去除首尾空白后保存在 `"__text"` 键下，空文本被忽略。

use std::collections::HashMap;

use super::document::{XmlElement, XmlNode};

/// 保存文本内容的保留键。
pub const TEXT_KEY: &str = "__text";

/// 属性键的前缀。
pub const ATTRIBUTE_PREFIX: &str = "_";

/// 键值树中的值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeValue {
    /// 属性值或文本内容。
    Text(String),
    /// 只出现过一次的子元素。
    Node(TreeNode),
    /// 出现过多次的同名子元素，保持文档顺序。
    List(Vec<TreeNode>),
}

/// 键值树的一个节点。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    entries: HashMap<String, TreeValue>,
}

impl TreeNode {
    /// 递归地将一个元素转换为键值树。
    #[must_use]
    pub fn from_element(element: &XmlElement) -> Self {
        let mut node = Self::default();

        for (name, value) in &element.attributes {
            node.entries.insert(
                format!("{ATTRIBUTE_PREFIX}{name}"),
                TreeValue::Text(value.clone()),
            );
        }

        for child in &element.children {
            match child {
                XmlNode::Element(child_element) => {
                    node.push_child(&child_element.name, Self::from_element(child_element));
                }
                XmlNode::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        node.entries
                            .insert(TEXT_KEY.to_string(), TreeValue::Text(trimmed.to_string()));
                    }
                }
            }
        }

        node
    }

    fn push_child(&mut self, name: &str, child: Self) {
        let value = match self.entries.remove(name) {
            Some(TreeValue::Node(first)) => TreeValue::List(vec![first, child]),
            Some(TreeValue::List(mut list)) => {
                list.push(child);
                TreeValue::List(list)
            }
            // 与同名的文本键冲突时以子元素为准
            Some(TreeValue::Text(_)) | None => TreeValue::Node(child),
        };
        self.entries.insert(name.to_string(), value);
    }

    /// 按原始键读取值。
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        self.entries.get(key)
    }

    /// 所有键，顺序不固定。
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// 读取属性值，`name` 不带前缀。
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self.entries.get(&format!("{ATTRIBUTE_PREFIX}{name}")) {
            Some(TreeValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// 文本内容。
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self.entries.get(TEXT_KEY) {
            Some(TreeValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// 第一个名为 `name` 的子元素。
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children(name).first()
    }

    /// 所有名为 `name` 的子元素，无论出现一次还是多次。
    #[must_use]
    pub fn children(&self, name: &str) -> &[Self] {
        match self.entries.get(name) {
            Some(TreeValue::Node(node)) => std::slice::from_ref(node),
            Some(TreeValue::List(list)) => list,
            Some(TreeValue::Text(_)) | None => &[],
        }
    }
}
