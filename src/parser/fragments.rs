//! # 逐字文本还原
//!
//! 单词之间的空格和标点并不在任何 `<span>` 里，而是位于 `<span>` 之间的标记中。
//! 因此这里直接使用一行 `<p>` 在原文中的内部标记，按标签切分出文本片段，
//! 再与 `<span>` 按位置一一对应。
//!
//! 对齐规则：
//!
//! 1. 按任意标签 `<...>` 切分并对每个片段反转义，丢弃第一个片段（第一个内部标签之前的文本）。
//! 2. 从第二个片段开始，纯空白片段追加到前一个片段末尾并被移除；
//!    移除后滑入该位置的片段在本轮不再检查。
//! 3. 第 *i* 个片段是第 *i* 个 `<span>` 的显示文本。背景人声分组中第 *j* 个子 `<span>`
//!    对应第 `分组位置 + j + 1` 个片段。
//!
//! 第 2 步中“不再检查”的片段正好保留了背景人声分组起始标签处的空片段，
//! 这是第 3 步下标计算成立的前提。该计算只适用于每行最多一个、且位于行末的背景人声分组。

use std::{borrow::Cow, sync::LazyLock};

use quick_xml::escape::unescape;
use regex::Regex;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("编译 TAG_REGEX 失败"));

/// 将一行的内部标记切分为与 `<span>` 对齐的文本片段。
///
/// 切分在转义状态的标记上进行，`&lt;` 不会产生多余的标签。
/// 片段在合并空白之前反转义，`&#32;` 之类的空白引用与字面空白的处理相同。
pub(crate) fn split_line_fragments(inner_markup: &str) -> Vec<String> {
    let mut fragments: Vec<String> = TAG_REGEX
        .split(inner_markup)
        .map(|fragment| unescape(fragment).map_or_else(|_| fragment.to_owned(), Cow::into_owned))
        .collect();

    if fragments.len() > 1 {
        fragments.remove(0);

        let mut i = 1;
        while i < fragments.len() {
            if fragments[i].trim().is_empty() {
                let whitespace = fragments.remove(i);
                fragments[i - 1].push_str(&whitespace);
            }
            i += 1;
        }
    }

    fragments
}

/// 背景人声分组中第 `nested_index` 个子 `<span>` 对应的片段下标。
pub(crate) const fn background_fragment_index(outer_index: usize, nested_index: usize) -> usize {
    outer_index + nested_index + 1
}
