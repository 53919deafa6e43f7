//! # 计时模型
//!
//! 解析 TTML 后得到的结构化数据：文档、元数据、内容块、歌词行和单词。
//!
//! 所有时间均为浮点秒数。持续时间 `dur` 不单独存储，
//! 始终由 [`Timed::dur`] 根据 `begin` 和 `end` 计算得出。
//! 序列化时 `dur` 作为计算字段一并输出，反序列化时会被忽略。

use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use strum_macros::{Display, EnumString};

/// 带有开始和结束时间的实体。
pub trait Timed {
    /// 开始时间（秒）。
    fn begin(&self) -> f64;

    /// 结束时间（秒）。
    fn end(&self) -> f64;

    /// 将开始和结束时间同时平移 `delta` 秒。
    fn shift(&mut self, delta: f64);

    /// 持续时间（秒），等于 `end - begin`。
    fn dur(&self) -> f64 {
        self.end() - self.begin()
    }
}

/// 单词的类型。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum WordType {
    /// 主歌词中的普通单词
    #[default]
    Normal,
    /// 背景人声（`ttm:role="x-bg"`）中的单词
    Background,
}

/// 逐字歌词中的一个单词。
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Word {
    /// 单词类型。
    #[serde(rename = "type")]
    pub word_type: WordType,
    /// 单词的显示文本，可能带有紧随其后的空白或标点。
    pub text: String,
    /// 开始时间（秒）。
    pub begin: f64,
    /// 结束时间（秒）。
    pub end: f64,
}

impl Timed for Word {
    fn begin(&self) -> f64 {
        self.begin
    }

    fn end(&self) -> f64 {
        self.end
    }

    fn shift(&mut self, delta: f64) {
        self.begin += delta;
        self.end += delta;
    }
}

/// 歌词行的内容：要么是一段纯文本，要么是带时间的单词序列。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineContent {
    /// 没有逐字计时的行，保存去除首尾空白后的文本。
    Text(String),
    /// 逐字计时的行。背景人声单词作为一个连续的分组保存在其所在的位置。
    Words(Vec<Word>),
}

impl Default for LineContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl LineContent {
    /// 单词序列，纯文本行返回空切片。
    #[must_use]
    pub fn words(&self) -> &[Word] {
        match self {
            Self::Text(_) => &[],
            Self::Words(words) => words,
        }
    }

    /// 按类型筛选单词，保持原有顺序。
    pub fn words_of_type(&self, word_type: WordType) -> impl Iterator<Item = &Word> {
        self.words()
            .iter()
            .filter(move |word| word.word_type == word_type)
    }
}

/// 一行歌词（`<p>`）。
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Line {
    /// 开始时间（秒）。
    pub begin: f64,
    /// 结束时间（秒）。
    pub end: f64,
    /// 演唱者 ID，对应 [`Metadata::agents`] 中的 [`Agent::id`]。
    pub agent: Option<String>,
    /// iTunes 行标识（如 `"L1"`），被翻译和音译条目的 `for` 引用。
    pub key: Option<String>,
    /// 行内容。
    pub content: LineContent,
    /// 还原后的完整显示文本，包含单词之间的空白和标点。
    #[serde(rename = "joinedContent")]
    pub joined_content: String,
}

impl Timed for Line {
    fn begin(&self) -> f64 {
        self.begin
    }

    fn end(&self) -> f64 {
        self.end
    }

    fn shift(&mut self, delta: f64) {
        self.begin += delta;
        self.end += delta;
        if let LineContent::Words(words) = &mut self.content {
            for word in words {
                word.shift(delta);
            }
        }
    }
}

/// 一个内容块（`<div>`），通常对应歌曲的一个段落。
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ContentBlock {
    /// 开始时间（秒）。
    pub begin: f64,
    /// 结束时间（秒）。
    pub end: f64,
    /// iTunes 歌曲段落标记，如 `"Verse"`、`"Chorus"`。
    #[serde(rename = "songPart")]
    pub song_part: Option<String>,
    /// 该块包含的歌词行。
    pub lines: Vec<Line>,
}

impl Timed for ContentBlock {
    fn begin(&self) -> f64 {
        self.begin
    }

    fn end(&self) -> f64 {
        self.end
    }

    fn shift(&mut self, delta: f64) {
        self.begin += delta;
        self.end += delta;
        for line in &mut self.lines {
            line.shift(delta);
        }
    }
}

impl Serialize for Word {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Word", 5)?;
        state.serialize_field("type", &self.word_type)?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("begin", &self.begin)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("dur", &self.dur())?;
        state.end()
    }
}

impl Serialize for Line {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Line", 7)?;
        state.serialize_field("begin", &self.begin)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("dur", &self.dur())?;
        state.serialize_field("agent", &self.agent)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("joinedContent", &self.joined_content)?;
        state.end()
    }
}

impl Serialize for ContentBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ContentBlock", 5)?;
        state.serialize_field("begin", &self.begin)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("dur", &self.dur())?;
        state.serialize_field("songPart", &self.song_part)?;
        state.serialize_field("lines", &self.lines)?;
        state.end()
    }
}

/// 演唱者。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agent {
    /// `xml:id`，被歌词行的 `ttm:agent` 引用。
    pub id: String,
    /// `type` 属性，如 `"person"`、`"group"`。
    #[serde(rename = "type")]
    pub agent_type: String,
    /// `<ttm:name>` 中的名称。
    pub name: Option<String>,
}

/// 翻译或音译中对应某一行的条目。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransEntry {
    /// 引用的行标识（[`Line::key`]）。
    #[serde(rename = "for")]
    pub for_key: String,
    /// 条目文本。
    pub text: String,
}

/// iTunes 元数据中的一组翻译。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Translation {
    /// `type` 属性，如 `"subtitle"`、`"replacement"`。
    #[serde(rename = "type")]
    pub translation_type: Option<String>,
    /// 翻译语言。
    pub lang: Option<String>,
    /// 逐行条目。
    pub content: Vec<TransEntry>,
}

/// iTunes 元数据中的一组音译。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transliteration {
    /// 音译语言。
    pub lang: Option<String>,
    /// 逐行条目。
    pub content: Vec<TransEntry>,
}

/// 文档级元数据。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// 原文语言（`<tt xml:lang>`）。
    pub lang: Option<String>,
    /// 演唱者列表。
    pub agents: Vec<Agent>,
    /// 计时粒度（`itunes:timing`）：`None`、`Line` 或 `Word`。
    pub timing: Option<String>,
    /// 前奏静音时长（秒）。
    #[serde(rename = "leadingSilence")]
    pub leading_silence: f64,
    /// 词曲作者。
    pub songwriters: Vec<String>,
    /// 翻译。
    pub translations: Vec<Translation>,
    /// 音译。
    pub transliterations: Vec<Transliteration>,
}

/// 解析后的 TTML 文档。
///
/// 由 [`crate::parse_ttml`] 创建。之后只有 [`TimingModel::apply_offset`] 会修改其中的时间。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimingModel {
    /// 文档元数据。
    pub metadata: Metadata,
    /// 文档时长（`<body dur>`，秒）。
    pub dur: f64,
    /// 已累计应用的时间偏移（秒）。
    pub offset: f64,
    /// 内容块，保持文档顺序。
    pub contents: Vec<ContentBlock>,
    /// 原始 TTML 文本。
    pub raw: String,
    /// 解析过程中产生的非致命警告。
    #[serde(default)]
    pub warnings: Vec<String>,
}
