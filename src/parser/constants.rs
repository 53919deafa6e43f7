//! # TTML 解析器 - 常量定义
//!
//! 该模块包含了在解析 TTML 文件时用到的所有 XML 标签和属性的常量定义。

pub(super) const TAG_TT: &str = "tt";
pub(super) const TAG_HEAD: &str = "head";
pub(super) const TAG_METADATA: &str = "metadata";
pub(super) const TAG_BODY: &str = "body";
pub(super) const TAG_DIV: &str = "div";
pub(super) const TAG_P: &str = "p";
pub(super) const TAG_SPAN: &str = "span";

pub(super) const TAG_AGENT: &str = "agent";
pub(super) const TAG_AGENT_TTM: &str = "ttm:agent";
pub(super) const TAG_NAME: &str = "name";
pub(super) const TAG_NAME_TTM: &str = "ttm:name";
pub(super) const TAG_ITUNES_METADATA: &str = "iTunesMetadata";
pub(super) const TAG_SONGWRITERS: &str = "songwriters";
pub(super) const TAG_SONGWRITER: &str = "songwriter";
pub(super) const TAG_TRANSLATIONS: &str = "translations";
pub(super) const TAG_TRANSLITERATIONS: &str = "transliterations";
pub(super) const TAG_TRANSLATION: &str = "translation";
pub(super) const TAG_TRANSLITERATION: &str = "transliteration";
pub(super) const TAG_TEXT: &str = "text";

pub(super) const ATTR_ITUNES_TIMING: &str = "itunes:timing";
pub(super) const ATTR_XML_LANG: &str = "xml:lang";
pub(super) const ATTR_LANG_ALIAS: &str = "lang";
pub(super) const ATTR_XML_ID: &str = "xml:id";
pub(super) const ATTR_TYPE: &str = "type";
pub(super) const ATTR_FOR: &str = "for";
pub(super) const ATTR_DUR: &str = "dur";
pub(super) const ATTR_BEGIN: &str = "begin";
pub(super) const ATTR_END: &str = "end";
pub(super) const ATTR_LEADING_SILENCE: &str = "leadingSilence";
pub(super) const ATTR_ITUNES_SONG_PART: &str = "itunes:song-part";
pub(super) const ATTR_ITUNES_SONG_PART_NEW: &str = "itunes:songPart";
pub(super) const ATTR_ITUNES_KEY: &str = "itunes:key";
pub(super) const ATTR_AGENT: &str = "ttm:agent";
pub(super) const ATTR_AGENT_ALIAS: &str = "agent";
pub(super) const ATTR_ROLE: &str = "ttm:role";
pub(super) const ATTR_ROLE_ALIAS: &str = "role";

pub(super) const ROLE_BACKGROUND: &str = "x-bg";
