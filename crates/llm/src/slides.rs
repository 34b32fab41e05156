//! Slide response parser
//!
//! Turns LLM text written in the `Slide / Title: / Content: / Layout:` line
//! convention into slides. The LLM is not bound to the convention, so
//! malformed output yields fewer slides rather than an error.

use serde::{Deserialize, Serialize};

/// Slide layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideLayout {
    Title,
    Bullets,
    Split,
    #[default]
    Default,
}

impl SlideLayout {
    /// Normalize a layout value; anything unknown becomes `Default`
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "title" => Self::Title,
            "bullets" => Self::Bullets,
            "split" => Self::Split,
            _ => Self::Default,
        }
    }
}

/// A generated slide
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub content: String,
    pub layout: SlideLayout,
}

/// Parser state
#[derive(Debug)]
enum ParserState {
    /// No slide header seen yet
    AwaitingSlide,
    /// Collecting fields for the current slide
    InSlide(Slide),
}

/// Line-driven slide parser.
///
/// Feed lines with [`SlideParser::push_line`] and call
/// [`SlideParser::finish`] to flush the trailing slide. A slide is emitted
/// only when its title is non-empty.
#[derive(Debug)]
pub struct SlideParser {
    state: ParserState,
    slides: Vec<Slide>,
}

impl Default for SlideParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::AwaitingSlide,
            slides: Vec::new(),
        }
    }

    /// Consume one line of LLM output
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        if strip_prefix_ignore_case(line, "slide").is_some() {
            self.flush();
            self.state = ParserState::InSlide(Slide::default());
            return;
        }

        let ParserState::InSlide(slide) = &mut self.state else {
            return;
        };

        if let Some(title) = strip_prefix_ignore_case(line, "title:") {
            slide.title = title.trim().to_string();
        } else if let Some(content) = strip_prefix_ignore_case(line, "content:") {
            slide.content = content.trim().to_string();
        } else if let Some(layout) = strip_prefix_ignore_case(line, "layout:") {
            slide.layout = SlideLayout::normalize(layout);
        }
    }

    /// Flush the trailing slide and return everything parsed
    pub fn finish(mut self) -> Vec<Slide> {
        self.flush();
        self.slides
    }

    fn flush(&mut self) {
        if let ParserState::InSlide(slide) =
            std::mem::replace(&mut self.state, ParserState::AwaitingSlide)
        {
            if !slide.title.is_empty() {
                self.slides.push(slide);
            }
        }
    }
}

/// Parse a full LLM response into slides
pub fn parse_slides(text: &str) -> Vec<Slide> {
    let mut parser = SlideParser::new();
    for line in text.lines() {
        parser.push_line(line);
    }
    parser.finish()
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(title: &str, content: &str, layout: SlideLayout) -> Slide {
        Slide {
            title: title.to_string(),
            content: content.to_string(),
            layout,
        }
    }

    #[test]
    fn test_single_slide() {
        let slides = parse_slides("Slide 1\nTitle: Intro\nContent: Hello\nLayout: bullets");
        assert_eq!(slides, vec![slide("Intro", "Hello", SlideLayout::Bullets)]);
    }

    #[test]
    fn test_unknown_layout_defaults() {
        let slides = parse_slides("Slide 1\nTitle: Metrics\nLayout: chart");
        assert_eq!(slides[0].layout, SlideLayout::Default);
    }

    #[test]
    fn test_missing_layout_defaults() {
        let slides = parse_slides("Slide 1\nTitle: Metrics");
        assert_eq!(slides, vec![slide("Metrics", "", SlideLayout::Default)]);
    }

    #[test]
    fn test_slide_without_title_dropped() {
        let text = "Slide 1\nContent: orphan\nSlide 2\nTitle: Kept\nContent: body";
        let slides = parse_slides(text);
        assert_eq!(slides, vec![slide("Kept", "body", SlideLayout::Default)]);
    }

    #[test]
    fn test_trailing_untitled_slide_dropped() {
        let text = "Slide 1\nTitle: First\nSlide 2\nContent: nothing";
        let slides = parse_slides(text);
        assert_eq!(slides, vec![slide("First", "", SlideLayout::Default)]);
    }

    #[test]
    fn test_case_insensitive_prefixes_and_whitespace() {
        let text = "  SLIDE 3:  \n\n  TITLE:   Roadmap  \ncontent:Q1 launch\nLAYOUT:  Split ";
        let slides = parse_slides(text);
        assert_eq!(slides, vec![slide("Roadmap", "Q1 launch", SlideLayout::Split)]);
    }

    #[test]
    fn test_lines_before_first_slide_ignored() {
        let text = "Here is your deck!\nTitle: Not a slide\nSlide 1\nTitle: Real";
        let slides = parse_slides(text);
        assert_eq!(slides, vec![slide("Real", "", SlideLayout::Default)]);
    }

    #[test]
    fn test_last_field_wins_and_unprefixed_lines_ignored() {
        let text = "Slide 1\nTitle: Draft\nTitle: Final\n- stray bullet\nContent: a\nContent: b";
        let slides = parse_slides(text);
        assert_eq!(slides, vec![slide("Final", "b", SlideLayout::Default)]);
    }

    #[test]
    fn test_multiple_slides_in_order() {
        let text = "Slide 1\nTitle: A\nLayout: title\n\nSlide 2\nTitle: B\nLayout: bullets\nSlide 3\nTitle: C";
        let titles: Vec<String> = parse_slides(text).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_and_unstructured_input() {
        assert!(parse_slides("").is_empty());
        assert!(parse_slides("Just a paragraph of prose.").is_empty());
    }

    #[test]
    fn test_parser_state_machine_directly() {
        let mut parser = SlideParser::new();
        parser.push_line("Title: ignored while awaiting");
        parser.push_line("Slide 1");
        parser.push_line("Title: Kept");
        assert_eq!(parser.finish(), vec![slide("Kept", "", SlideLayout::Default)]);
    }

    #[test]
    fn test_non_ascii_line_does_not_panic() {
        let slides = parse_slides("Slide 1\nTitle: 요약\nContent: 가나\n슬라이드");
        assert_eq!(slides, vec![slide("요약", "가나", SlideLayout::Default)]);
    }

    #[test]
    fn test_layout_serializes_lowercase() {
        let json = serde_json::to_string(&slide("T", "C", SlideLayout::Bullets)).unwrap();
        assert_eq!(json, r#"{"title":"T","content":"C","layout":"bullets"}"#);
    }
}
