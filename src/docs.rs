//! Built-in syntax guide.
//!
//! The guide is a markdown file embedded at compile time and rendered to
//! plain terminal text.

use anyhow::{Context, Result};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "docs/"]
struct Assets;

const GUIDE: &str = "syntax.md";

/// The raw markdown of the syntax guide.
pub fn guide_markdown() -> Result<String> {
    let file = Assets::get(GUIDE).with_context(|| format!("Missing embedded {}", GUIDE))?;
    String::from_utf8(file.data.into_owned()).context("Syntax guide is not valid UTF-8")
}

/// The syntax guide rendered for a terminal.
pub fn guide() -> Result<String> {
    Ok(render_markdown(&guide_markdown()?))
}

/// Render markdown to plain text.
///
/// Headings are underlined, list items bulleted and code blocks indented.
pub fn render_markdown(markdown: &str) -> String {
    let mut out = String::new();
    let mut heading_start = None;
    let mut in_code_block = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => heading_start = Some(out.len()),
            Event::End(TagEnd::Heading(level)) => {
                if let Some(start) = heading_start.take() {
                    let width = out[start..].chars().count();
                    let rule = if level == HeadingLevel::H1 { '=' } else { '-' };
                    out.push('\n');
                    out.extend(std::iter::repeat_n(rule, width));
                }
                out.push_str("\n\n");
            }
            Event::Start(Tag::Item) => out.push_str("  * "),
            Event::End(TagEnd::Item) => out.push('\n'),
            Event::End(TagEnd::List(_)) => out.push('\n'),
            Event::End(TagEnd::Paragraph) => out.push_str("\n\n"),
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                out.push('\n');
            }
            Event::Text(text) if in_code_block => {
                for line in text.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            _ => {}
        }
    }

    format!("{}\n", out.trim_end())
}
