use std::collections::HashSet;

use regex::Regex;

use crate::scanner::SubtitleFormat;

pub const DEFAULT_PUNCTUATION : &str = "、。！？｡･｢｣「」『』（）〔〕【】〈〉《》“”‘’､";

/// Characters deleted from cleaned text. ASCII punctuation and whitespace are
/// always members, the full-width set is configurable.
#[derive(Clone, Debug)]
pub struct PunctuationSet {
    wide : HashSet<char>,
}

impl PunctuationSet {
    pub fn from_chars(text : &str) -> PunctuationSet
    {
        PunctuationSet{wide : text.chars().filter(|c| !c.is_whitespace()).collect()}
    }
    pub fn contains(&self, c : char) -> bool
    {
        c.is_ascii_punctuation() || c.is_whitespace() || self.wide.contains(&c)
    }
}

impl Default for PunctuationSet {
    fn default() -> PunctuationSet
    {
        PunctuationSet::from_chars(DEFAULT_PUNCTUATION)
    }
}

pub struct Cleaner {
    srt_timing_regex : Regex,
    tag_regex : Regex,
    linebreak_regex : Regex,
    punctuation : PunctuationSet,
}

impl Cleaner {
    pub fn new(punctuation : PunctuationSet) -> Cleaner
    {
        // the patterns are fixed literals, so failing to compile them is a programming error
        let srt_timing_regex = Regex::new(r"(?:\A|\n)\d+\r?\n\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}\r?\n").unwrap();
        let tag_regex = Regex::new(r"<[^>]+>").unwrap();
        let linebreak_regex = Regex::new(r"[\n\t]+").unwrap();
        Cleaner{srt_timing_regex, tag_regex, linebreak_regex, punctuation}
    }
    fn strip_srt(&self, text : &str) -> String
    {
        self.srt_timing_regex.replace_all(text, "\n").into_owned()
    }
    fn strip_ass(&self, text : &str) -> String
    {
        let mut dialogue = Vec::new();
        for line in text.lines()
        {
            if !line.starts_with("Dialogue")
            {
                continue;
            }
            // the first nine fields are layer, timing, style, actor, margins and effect
            if let Some(payload) = line.splitn(10, ',').last()
            {
                dialogue.push(payload);
            }
        }
        dialogue.join("\n")
    }
    /// Tag removal, linebreak collapsing and punctuation removal, in that order.
    pub fn clean_common(&self, text : &str) -> String
    {
        let text = self.tag_regex.replace_all(text, "");
        let text = self.linebreak_regex.replace_all(&text, " ");
        text.trim().chars().filter(|c| !self.punctuation.contains(*c)).collect()
    }
    pub fn clean(&self, text : &str, format : SubtitleFormat) -> String
    {
        let text = match format
        {
            SubtitleFormat::Srt => self.strip_srt(text),
            SubtitleFormat::Ass => self.strip_ass(text),
        };
        self.clean_common(&text)
    }
}

impl Default for Cleaner {
    fn default() -> Cleaner
    {
        Cleaner::new(PunctuationSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srt_timing_block_removed()
    {
        let cleaner = Cleaner::default();
        let cleaned = cleaner.clean("1\n00:00:01,000 --> 00:00:02,000\nこんにちは\n", SubtitleFormat::Srt);
        assert_eq!(cleaned, "こんにちは");
    }

    #[test]
    fn test_srt_multiple_cues()
    {
        let cleaner = Cleaner::default();
        let text = "1\r\n00:00:01,000 --> 00:00:02,000\r\n<i>おはよう</i>\r\n\r\n2\r\n00:00:03,500 --> 00:00:05,250\r\n行ってきます！\r\n";
        assert_eq!(cleaner.clean(text, SubtitleFormat::Srt), "おはよう行ってきます");
    }

    #[test]
    fn test_srt_numbers_in_dialogue_survive()
    {
        let cleaner = Cleaner::default();
        let text = "1\n00:00:01,000 --> 00:00:02,000\n3人\n";
        assert_eq!(cleaner.clean(text, SubtitleFormat::Srt), "3人");
    }

    #[test]
    fn test_ass_dialogue_payload()
    {
        let cleaner = Cleaner::default();
        let line = "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,こんにちは";
        assert_eq!(cleaner.strip_ass(line), "こんにちは");
        assert_eq!(cleaner.clean(line, SubtitleFormat::Ass), "こんにちは");
    }

    #[test]
    fn test_ass_keeps_commas_in_payload_and_skips_other_lines()
    {
        let cleaner = Cleaner::default();
        let text = "[Script Info]\nTitle: test\n\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\nComment: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,無視\nDialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,待って,お願い\nDialogue: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,{\\i1}本当{\\i0}に\n";
        assert_eq!(cleaner.strip_ass(text), "待って,お願い\n{\\i1}本当{\\i0}に");
        // override braces are punctuation, their letters and digits are not
        assert_eq!(cleaner.clean(text, SubtitleFormat::Ass), "待ってお願いi1本当i0に");
    }

    #[test]
    fn test_common_cleanup_removes_everything_excluded()
    {
        let cleaner = Cleaner::default();
        let cleaned = cleaner.clean_common("\t<font color=\"red\">「え？」</font>\n\n（笑） a.b 全角　空白\n");
        assert_eq!(cleaned, "え笑ab全角空白");
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.chars().any(|c| c == '\n' || c == '\t'));
        assert!(!cleaned.chars().any(|c| cleaner.punctuation.contains(c)));
    }

    #[test]
    fn test_common_cleanup_is_idempotent()
    {
        let cleaner = Cleaner::default();
        let once = cleaner.clean_common("<b>そうか…</b>\n分かった、 行こう！ <3");
        assert_eq!(cleaner.clean_common(&once), once);
    }

    #[test]
    fn test_custom_punctuation_set()
    {
        let cleaner = Cleaner::new(PunctuationSet::from_chars("…"));
        assert_eq!(cleaner.clean_common("そうか…「よし」"), "そうか「よし」");
    }

    #[test]
    fn test_empty_input()
    {
        let cleaner = Cleaner::default();
        assert_eq!(cleaner.clean("", SubtitleFormat::Srt), "");
        assert_eq!(cleaner.clean("[Script Info]\n", SubtitleFormat::Ass), "");
    }
}
