//! # 查询
//!
//! 在已解析的 [`TimingModel`] 上进行只读查找。结果均保持文档顺序。

use crate::model::{Agent, ContentBlock, Line, Timed, TimingModel, TransEntry};

impl TimingModel {
    /// 按文档顺序遍历所有歌词行。
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.contents.iter().flat_map(|block| &block.lines)
    }

    /// 第一个 `itunes:key` 等于 `key` 的歌词行。
    #[must_use]
    pub fn line_by_key(&self, key: &str) -> Option<&Line> {
        self.lines().find(|line| line.key.as_deref() == Some(key))
    }

    /// 由 `agent_id` 演唱的所有歌词行。
    #[must_use]
    pub fn lines_by_agent(&self, agent_id: &str) -> Vec<&Line> {
        self.lines()
            .filter(|line| line.agent.as_deref() == Some(agent_id))
            .collect()
    }

    /// 完全落在 `[begin, end]` 之内的歌词行，两端都包含。
    ///
    /// 只与区间部分重叠的行不会被返回。
    #[must_use]
    pub fn lines_by_time_range(&self, begin: f64, end: f64) -> Vec<&Line> {
        self.lines()
            .filter(|line| is_within(*line, begin, end))
            .collect()
    }

    /// 语言为 `lang` 的音译中，对应行 `key` 的文本。
    #[must_use]
    pub fn transliteration(&self, lang: &str, key: &str) -> Option<&str> {
        find_entry(
            self.metadata
                .transliterations
                .iter()
                .map(|t| (t.lang.as_deref(), t.content.as_slice())),
            lang,
            key,
        )
    }

    /// 语言为 `lang` 的翻译中，对应行 `key` 的文本。
    #[must_use]
    pub fn translation(&self, lang: &str, key: &str) -> Option<&str> {
        find_entry(
            self.metadata
                .translations
                .iter()
                .map(|t| (t.lang.as_deref(), t.content.as_slice())),
            lang,
            key,
        )
    }

    /// `songPart` 等于 `part` 的内容块。
    #[must_use]
    pub fn contents_by_song_part(&self, part: &str) -> Vec<&ContentBlock> {
        self.contents
            .iter()
            .filter(|block| block.song_part.as_deref() == Some(part))
            .collect()
    }

    /// 完全落在 `[begin, end]` 之内的内容块，语义与 [`Self::lines_by_time_range`] 相同。
    #[must_use]
    pub fn contents_by_time_range(&self, begin: f64, end: f64) -> Vec<&ContentBlock> {
        self.contents
            .iter()
            .filter(|block| is_within(*block, begin, end))
            .collect()
    }

    /// 按 ID 查找演唱者，通常用于解析 [`Line::agent`]。
    #[must_use]
    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.metadata.agents.iter().find(|agent| agent.id == id)
    }
}

fn is_within(item: &impl Timed, begin: f64, end: f64) -> bool {
    item.begin() >= begin && item.end() <= end
}

fn find_entry<'a>(
    mut tracks: impl Iterator<Item = (Option<&'a str>, &'a [TransEntry])>,
    lang: &str,
    key: &str,
) -> Option<&'a str> {
    tracks.find_map(|(track_lang, entries)| {
        if track_lang != Some(lang) {
            return None;
        }
        entries
            .iter()
            .find(|entry| entry.for_key == key)
            .map(|entry| entry.text.as_str())
    })
}
