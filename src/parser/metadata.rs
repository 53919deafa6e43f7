//! # TTML 解析器 - Metadata 处理模块
//!
//! 读取 `<head><metadata>` 中的演唱者和 iTunes 元数据。

use tracing::warn;

use super::{
    constants::{
        ATTR_FOR, ATTR_LANG_ALIAS, ATTR_LEADING_SILENCE, ATTR_TYPE, ATTR_XML_ID, ATTR_XML_LANG,
        TAG_AGENT, TAG_AGENT_TTM, TAG_ITUNES_METADATA, TAG_NAME, TAG_NAME_TTM, TAG_SONGWRITER,
        TAG_SONGWRITERS, TAG_TEXT, TAG_TRANSLATION, TAG_TRANSLATIONS, TAG_TRANSLITERATION,
        TAG_TRANSLITERATIONS,
    },
    tree::TreeNode,
    utils::{get_child_text, get_string_attribute},
};
use crate::{
    model::{Agent, Metadata, TransEntry, Translation, Transliteration},
    time::parse_time,
};

/// 将 `<metadata>` 节点中的内容写入 `metadata`。
pub(super) fn parse_metadata(
    metadata_node: &TreeNode,
    metadata: &mut Metadata,
    warnings: &mut Vec<String>,
) {
    for agent_node in [TAG_AGENT_TTM, TAG_AGENT]
        .into_iter()
        .flat_map(|tag| metadata_node.children(tag))
    {
        if let Some(agent) = parse_agent(agent_node, warnings) {
            metadata.agents.push(agent);
        }
    }

    if let Some(itunes) = metadata_node.child(TAG_ITUNES_METADATA) {
        parse_itunes_metadata(itunes, metadata);
    }
}

fn parse_agent(agent_node: &TreeNode, warnings: &mut Vec<String>) -> Option<Agent> {
    let Some(id) = agent_node.attr(ATTR_XML_ID) else {
        let msg = "跳过了缺少 xml:id 的 <ttm:agent>".to_string();
        warn!("{msg}");
        warnings.push(msg);
        return None;
    };

    Some(Agent {
        id: id.to_string(),
        agent_type: agent_node.attr(ATTR_TYPE).unwrap_or_default().to_string(),
        name: get_child_text(agent_node, &[TAG_NAME_TTM, TAG_NAME]),
    })
}

fn parse_itunes_metadata(itunes: &TreeNode, metadata: &mut Metadata) {
    // 与行和块的时间不同，无法解析的前奏静音保留为 NaN
    metadata.leading_silence = itunes.attr(ATTR_LEADING_SILENCE).map_or(0.0, parse_time);

    if let Some(translations) = itunes.child(TAG_TRANSLATIONS) {
        metadata.translations.extend(
            translations
                .children(TAG_TRANSLATION)
                .iter()
                .map(|node| Translation {
                    translation_type: get_string_attribute(node, &[ATTR_TYPE]),
                    lang: get_string_attribute(node, &[ATTR_XML_LANG, ATTR_LANG_ALIAS]),
                    content: parse_trans_entries(node),
                }),
        );
    }

    if let Some(transliterations) = itunes.child(TAG_TRANSLITERATIONS) {
        metadata.transliterations.extend(
            transliterations
                .children(TAG_TRANSLITERATION)
                .iter()
                .map(|node| Transliteration {
                    lang: get_string_attribute(node, &[ATTR_XML_LANG, ATTR_LANG_ALIAS]),
                    content: parse_trans_entries(node),
                }),
        );
    }

    if let Some(songwriters) = itunes.child(TAG_SONGWRITERS) {
        metadata.songwriters.extend(
            songwriters
                .children(TAG_SONGWRITER)
                .iter()
                .filter_map(TreeNode::text)
                .map(str::to_owned),
        );
    }
}

fn parse_trans_entries(node: &TreeNode) -> Vec<TransEntry> {
    node.children(TAG_TEXT)
        .iter()
        .map(|text_node| TransEntry {
            for_key: text_node.attr(ATTR_FOR).unwrap_or_default().to_string(),
            text: text_node.text().unwrap_or_default().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::document::XmlElement;

    fn parse(content: &str) -> (Metadata, Vec<String>) {
        let element = XmlElement::parse_document(content).unwrap().unwrap();
        let node = TreeNode::from_element(&element);
        let mut metadata = Metadata::default();
        let mut warnings = Vec::new();
        parse_metadata(&node, &mut metadata, &mut warnings);
        (metadata, warnings)
    }

    #[test]
    fn test_agents() {
        let (metadata, warnings) = parse(
            r#"<metadata>
                <ttm:agent type="person" xml:id="v1"><ttm:name type="full">Alice</ttm:name></ttm:agent>
                <ttm:agent type="group" xml:id="v2"/>
                <agent xml:id="v3"><name>Carol</name></agent>
            </metadata>"#,
        );
        assert!(warnings.is_empty());
        assert_eq!(
            metadata.agents,
            vec![
                Agent {
                    id: "v1".to_string(),
                    agent_type: "person".to_string(),
                    name: Some("Alice".to_string()),
                },
                Agent {
                    id: "v2".to_string(),
                    agent_type: "group".to_string(),
                    name: None,
                },
                Agent {
                    id: "v3".to_string(),
                    agent_type: String::new(),
                    name: Some("Carol".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_agent_without_id_is_skipped() {
        let (metadata, warnings) =
            parse(r#"<metadata><ttm:agent type="person"/><ttm:agent xml:id="v1"/></metadata>"#);
        assert_eq!(metadata.agents.len(), 1);
        assert_eq!(metadata.agents[0].id, "v1");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_itunes_metadata() {
        let (metadata, _) = parse(
            r#"<metadata><iTunesMetadata xmlns="http://music.apple.com/lyric-ttml-internal" leadingSilence="0.640">
                <translations>
                    <translation type="subtitle" xml:lang="zh-Hans">
                        <text for="L1">你好</text>
                        <text for="L2">世界</text>
                    </translation>
                </translations>
                <transliterations>
                    <transliteration xml:lang="ja-Latn"><text for="L1">konnichiwa</text></transliteration>
                    <transliteration lang="ko-Latn"><text for="L1"/></transliteration>
                </transliterations>
                <songwriters><songwriter>A</songwriter><songwriter>B</songwriter></songwriters>
            </iTunesMetadata></metadata>"#,
        );

        assert_eq!(metadata.leading_silence, 0.64);
        assert_eq!(metadata.songwriters, ["A", "B"]);

        assert_eq!(metadata.translations.len(), 1);
        let translation = &metadata.translations[0];
        assert_eq!(translation.translation_type.as_deref(), Some("subtitle"));
        assert_eq!(translation.lang.as_deref(), Some("zh-Hans"));
        assert_eq!(
            translation.content,
            vec![
                TransEntry {
                    for_key: "L1".to_string(),
                    text: "你好".to_string(),
                },
                TransEntry {
                    for_key: "L2".to_string(),
                    text: "世界".to_string(),
                },
            ]
        );

        assert_eq!(metadata.transliterations.len(), 2);
        assert_eq!(metadata.transliterations[0].lang.as_deref(), Some("ja-Latn"));
        assert_eq!(metadata.transliterations[0].content[0].text, "konnichiwa");
        assert_eq!(metadata.transliterations[1].lang.as_deref(), Some("ko-Latn"));
        assert_eq!(metadata.transliterations[1].content[0].text, "");
    }

    #[test]
    fn test_leading_silence() {
        let (metadata, _) = parse("<metadata><iTunesMetadata/></metadata>");
        assert_eq!(metadata.leading_silence, 0.0);

        let (metadata, _) =
            parse(r#"<metadata><iTunesMetadata leadingSilence="0:01.5"/></metadata>"#);
        assert_eq!(metadata.leading_silence, 1.5);

        let (metadata, _) =
            parse(r#"<metadata><iTunesMetadata leadingSilence="soon"/></metadata>"#);
        assert!(metadata.leading_silence.is_nan());
    }

    #[test]
    fn test_empty_metadata() {
        let (metadata, warnings) = parse("<metadata/>");
        assert_eq!(metadata, Metadata::default());
        assert!(warnings.is_empty());
    }
}
