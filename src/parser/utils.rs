//! # TTML 解析器的工具函数
//!
//! 实体解码、带别名的属性读取以及时间属性的解析。

use super::tree::TreeNode;
use crate::time::parse_time;

/// 解码一个 XML 实体引用的名称（不含 `&` 和 `;`）。
///
/// 支持五个预定义实体以及十进制 / 十六进制的字符引用，其他实体返回 `None`。
pub(super) fn decode_entity(entity_name: &str) -> Option<char> {
    if let Some(num_str) = entity_name.strip_prefix('#') {
        let (radix, code_point_str) = num_str
            .strip_prefix('x')
            .map_or((10, num_str), |stripped| (16, stripped));

        return u32::from_str_radix(code_point_str, radix)
            .ok()
            .and_then(char::from_u32);
    }

    match entity_name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

/// 从给定的属性名列表中获取第一个存在的属性值。
pub(super) fn get_attribute_with_aliases<'a>(
    node: &'a TreeNode,
    attr_names: &[&str],
) -> Option<&'a str> {
    attr_names.iter().find_map(|name| node.attr(name))
}

/// 获取字符串类型的属性值。
pub(super) fn get_string_attribute(node: &TreeNode, attr_names: &[&str]) -> Option<String> {
    get_attribute_with_aliases(node, attr_names).map(str::to_owned)
}

/// 获取时间属性并解析为秒数。属性缺失或无法解析（`NaN`）时为 `0`。
pub(super) fn get_time_attribute(node: &TreeNode, attr_name: &str) -> f64 {
    node.attr(attr_name)
        .map(parse_time)
        .filter(|seconds| !seconds.is_nan())
        .unwrap_or(0.0)
}

/// 获取第一个存在的子元素的文本。
pub(super) fn get_child_text(node: &TreeNode, tag_names: &[&str]) -> Option<String> {
    tag_names
        .iter()
        .find_map(|name| node.child(name))
        .and_then(TreeNode::text)
        .map(str::to_owned)
}
