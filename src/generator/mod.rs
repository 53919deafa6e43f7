//! # LRC 歌词格式生成器
//!
//! 注意：LRC 是有损格式。演唱者、翻译、音译等元数据都会丢失，
//! 不同演唱者的行被当作普通行输出，背景人声单词在增强模式下被放在行末。

mod lrc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::TimingModel;

/// LRC 的输出模式。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LrcMode {
    /// [默认] 每行一个时间戳，后接整行文本
    #[default]
    Basic,
    /// 在每个单词前加入 `<mm:ss.fff>` 逐字时间戳
    Enhanced,
}

/// LRC 生成选项。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LrcGenerationOptions {
    /// 输出模式
    pub mode: LrcMode,
}

/// LRC 生成的主入口函数。
///
/// 按文档顺序输出每一行，最后追加一个使用最后一个内容块结束时间的时间戳，
/// 其后没有文本和换行。没有任何内容块的模型输出空字符串。
///
/// # 示例
///
/// ```rust
/// use ttml_lyrics::{LrcGenerationOptions, LrcMode, generate_lrc, parse_ttml};
///
/// let model = parse_ttml(
///     r#"<tt><body><div begin="0" end="2"><p begin="0" end="2">Hi</p></div></body></tt>"#,
/// )?;
/// let options = LrcGenerationOptions { mode: LrcMode::Basic };
/// assert_eq!(generate_lrc(&model, &options), "[00:00.000] Hi\n[00:02.000] ");
/// # Ok::<(), ttml_lyrics::TtmlError>(())
/// ```
#[must_use]
pub fn generate_lrc(model: &TimingModel, options: &LrcGenerationOptions) -> String {
    lrc::generate(model, options.mode == LrcMode::Enhanced)
}

/// [`generate_lrc`] 的简便形式，`enhanced` 为 `true` 时输出增强 LRC。
#[must_use]
pub fn to_lrc(model: &TimingModel, enhanced: bool) -> String {
    let mode = if enhanced {
        LrcMode::Enhanced
    } else {
        LrcMode::Basic
    };
    generate_lrc(model, &LrcGenerationOptions { mode })
}
