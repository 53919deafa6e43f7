//! LRC 文本的逐行拼接。

use crate::{
    model::{Line, LineContent, TimingModel, WordType},
    time::format_time,
};

pub(super) fn generate(model: &TimingModel, enhanced: bool) -> String {
    let mut output = String::new();

    for line in model.lines() {
        push_line_tag(&mut output, line.begin);
        if enhanced {
            push_enhanced_line(&mut output, line);
        } else {
            output.push_str(&line.joined_content);
        }
        output.push('\n');
    }

    if let Some(last_block) = model.contents.last() {
        push_line_tag(&mut output, last_block.end);
    }

    output
}

fn push_enhanced_line(output: &mut String, line: &Line) {
    match &line.content {
        LineContent::Text(text) => output.push_str(text),
        LineContent::Words(_) => {
            let mut last_end = 0.0;
            // 背景人声固定输出在主歌词之后
            for word_type in [WordType::Normal, WordType::Background] {
                for word in line.content.words_of_type(word_type) {
                    push_word_tag(output, word.begin);
                    output.push_str(word.text.trim_end());
                    output.push(' ');
                    last_end = word.end;
                }
            }
            push_word_tag(output, last_end);
        }
    }
}

fn push_line_tag(output: &mut String, seconds: f64) {
    output.push('[');
    output.push_str(&format_time(seconds));
    output.push_str("] ");
}

fn push_word_tag(output: &mut String, seconds: f64) {
    output.push('<');
    output.push_str(&format_time(seconds));
    output.push_str("> ");
}
