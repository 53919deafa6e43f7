//! # 时间偏移

use crate::model::{Timed, TimingModel};

impl TimingModel {
    /// 将文档中的所有时间平移 `delta` 秒，并累加到 [`TimingModel::offset`]。
    ///
    /// 内容块、歌词行和逐字单词的 `begin` / `end` 都会被平移，持续时间保持不变。
    /// 多次调用的效果是累加的。
    pub fn apply_offset(&mut self, delta: f64) {
        self.offset += delta;
        for block in &mut self.contents {
            block.shift(delta);
        }
    }
}
