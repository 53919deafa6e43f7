//! # TTML 解析器 - Body 处理模块
//!
//! 将 `<body>` 中的 `<div>`、`<p>` 和 `<span>` 转换为内容块、歌词行和单词。

use tracing::warn;

use super::{
    constants::{
        ATTR_AGENT, ATTR_AGENT_ALIAS, ATTR_BEGIN, ATTR_DUR, ATTR_END, ATTR_ITUNES_KEY,
        ATTR_ITUNES_SONG_PART, ATTR_ITUNES_SONG_PART_NEW, ATTR_ROLE, ATTR_ROLE_ALIAS,
        ROLE_BACKGROUND, TAG_DIV, TAG_P, TAG_SPAN,
    },
    document::XmlElement,
    fragments::{background_fragment_index, split_line_fragments},
    tree::TreeNode,
    utils::{get_attribute_with_aliases, get_string_attribute, get_time_attribute},
};
use crate::{
    model::{ContentBlock, Line, LineContent, TimingModel, Word, WordType},
    time::parse_time,
};

/// 解析 `<body>`，填充文档时长和内容块。
///
/// `body_element` 是与 `body` 对应的元素，和 `raw` 一起用于取回每一行在原文中的标记，
/// 以还原单词之间的空白和标点。两者都只按直接子元素配对，嵌套的 `<div>` 和 `<p>` 不参与。
pub(super) fn parse_body(
    body: &TreeNode,
    body_element: &XmlElement,
    raw: &str,
    model: &mut TimingModel,
) {
    model.dur = body.attr(ATTR_DUR).map_or(0.0, parse_time);

    let div_elements: Vec<&XmlElement> = body_element.children_named(TAG_DIV).collect();

    for (index, div_node) in body.children(TAG_DIV).iter().enumerate() {
        let p_elements: Vec<&XmlElement> = div_elements
            .get(index)
            .map(|div| div.children_named(TAG_P).collect())
            .unwrap_or_default();

        let lines = div_node
            .children(TAG_P)
            .iter()
            .enumerate()
            .map(|(line_index, p_node)| {
                let markup = p_elements
                    .get(line_index)
                    .map_or("", |p| p.inner_markup(raw));
                parse_line(p_node, markup, &mut model.warnings)
            })
            .collect();

        model.contents.push(ContentBlock {
            begin: get_time_attribute(div_node, ATTR_BEGIN),
            end: get_time_attribute(div_node, ATTR_END),
            song_part: get_string_attribute(
                div_node,
                &[ATTR_ITUNES_SONG_PART_NEW, ATTR_ITUNES_SONG_PART],
            ),
            lines,
        });
    }
}

fn parse_line(p_node: &TreeNode, markup: &str, warnings: &mut Vec<String>) -> Line {
    let mut line = Line {
        begin: get_time_attribute(p_node, ATTR_BEGIN),
        end: get_time_attribute(p_node, ATTR_END),
        agent: get_string_attribute(p_node, &[ATTR_AGENT, ATTR_AGENT_ALIAS]),
        key: get_string_attribute(p_node, &[ATTR_ITUNES_KEY]),
        ..Default::default()
    };

    let spans = p_node.children(TAG_SPAN);
    if spans.is_empty() {
        let text = p_node.text().unwrap_or_default().trim().to_string();
        line.joined_content.clone_from(&text);
        line.content = LineContent::Text(text);
        return line;
    }

    let fragments = split_line_fragments(markup);
    let mut shape = LineShape::default();
    let mut words = Vec::with_capacity(spans.len());

    for (span_index, span_node) in spans.iter().enumerate() {
        let nested_spans = span_node.children(TAG_SPAN);
        let is_background_group = !nested_spans.is_empty()
            && get_attribute_with_aliases(span_node, &[ATTR_ROLE, ATTR_ROLE_ALIAS])
                == Some(ROLE_BACKGROUND);

        if is_background_group {
            shape.background_groups += 1;
            for (nested_index, nested_node) in nested_spans.iter().enumerate() {
                let fragment_index = background_fragment_index(span_index, nested_index);
                words.push(make_word(
                    nested_node,
                    WordType::Background,
                    fragment_at(&fragments, fragment_index, &mut shape),
                ));
            }
        } else {
            if shape.background_groups > 0 {
                shape.span_after_background = true;
            }
            words.push(make_word(
                span_node,
                WordType::Normal,
                fragment_at(&fragments, span_index, &mut shape),
            ));
        }
    }

    if let Some(reason) = shape.unsupported_reason() {
        let msg = format!(
            "歌词行 {} 的结构不受支持（{reason}），单词文本可能错位",
            line.key.as_deref().unwrap_or("<无 itunes:key>")
        );
        warn!("{msg}");
        warnings.push(msg);
    }

    line.joined_content = fragments.concat();
    line.content = LineContent::Words(words);
    line
}

fn make_word(span_node: &TreeNode, word_type: WordType, text: String) -> Word {
    Word {
        word_type,
        text,
        begin: get_time_attribute(span_node, ATTR_BEGIN),
        end: get_time_attribute(span_node, ATTR_END),
    }
}

fn fragment_at(fragments: &[String], index: usize, shape: &mut LineShape) -> String {
    fragments.get(index).cloned().unwrap_or_else(|| {
        shape.missing_fragments = true;
        String::new()
    })
}

/// 记录一行中违反“最多一个位于行末的背景人声分组”这一前提的情况。
#[derive(Debug, Default)]
struct LineShape {
    background_groups: usize,
    span_after_background: bool,
    missing_fragments: bool,
}

impl LineShape {
    const fn unsupported_reason(&self) -> Option<&'static str> {
        if self.background_groups > 1 {
            Some("包含多个背景人声分组")
        } else if self.span_after_background {
            Some("背景人声分组之后还有单词")
        } else if self.missing_fragments {
            Some("文本片段少于单词数量")
        } else {
            None
        }
    }
}
