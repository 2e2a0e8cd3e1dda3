//! Line classifier for the model's markdown-flavored recipe text.
//!
//! The model formats recipes with a handful of line-prefix conventions
//! (headings, bold lines, bullets, numbered steps) rather than a full
//! markdown grammar. [`classify_lines`] turns text into a tagged sequence
//! a renderer can walk; [`render_html`] is one such presentation step.

/// One classified line of recipe text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipeLine {
    Heading(String),
    BoldLine(String),
    Bullet(String),
    NumberedItem(String),
    Paragraph(String),
    Blank,
}

/// Classify every line of `text`, in order.
///
/// Pure and order-sensitive: the first matching prefix wins, checked as
/// heading, bold line, bullet, numbered item, blank, paragraph.
pub fn classify_lines(text: &str) -> Vec<RecipeLine> {
    text.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> RecipeLine {
    if let Some(rest) = line.strip_prefix("### ") {
        RecipeLine::Heading(rest.to_string())
    } else if line.starts_with("**") {
        RecipeLine::BoldLine(line.replace("**", ""))
    } else if let Some(rest) = line.strip_prefix("* ") {
        RecipeLine::Bullet(rest.to_string())
    } else if let Some(item) = numbered_item(line) {
        RecipeLine::NumberedItem(item)
    } else if line.trim().is_empty() {
        RecipeLine::Blank
    } else {
        RecipeLine::Paragraph(line.to_string())
    }
}

/// Match `<digits>.` at the start of the line and return the text after
/// the first space.
fn numbered_item(line: &str) -> Option<String> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || !line[digits..].starts_with('.') {
        return None;
    }
    match line.find(' ') {
        Some(idx) => Some(line[idx + 1..].to_string()),
        None => Some(String::new()),
    }
}

/// Render classified lines as an HTML fragment.
pub fn render_html(lines: &[RecipeLine]) -> String {
    lines
        .iter()
        .map(|line| match line {
            RecipeLine::Heading(text) => format!("<h3>{}</h3>", text),
            RecipeLine::BoldLine(text) => format!("<p><strong>{}</strong></p>", text),
            RecipeLine::Bullet(text) => format!("<li>{}</li>", text),
            RecipeLine::NumberedItem(text) => format!("<li>{}</li>", text),
            RecipeLine::Paragraph(text) => format!("<p>{}</p>", text),
            RecipeLine::Blank => "<br />".to_string(),
        })
        .collect::<Vec<_>>()
        .join("")
}
