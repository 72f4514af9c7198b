//! Text fragment extraction from content-stream operations.
//!
//! Every text-show operator inside a `BT`/`ET` block yields one fragment.
//! `TJ` arrays are combined into a single fragment; large negative kerning
//! adjustments inside the array stand in for word spaces.

use super::backend::{ContentOp, PdfValue};

/// Kerning adjustment (thousandths of text space) treated as a word gap.
const SPACE_THRESHOLD: f32 = 200.0;

/// Collect the text fragments of one page in content-stream order.
///
/// `decode` receives the active font resource name and the raw string
/// operand. Empty fragments are dropped.
pub fn collect_fragments(ops: &[ContentOp], decode: &dyn Fn(&[u8], &[u8]) -> String) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut font: Vec<u8> = Vec::new();
    let mut in_text_block = false;

    for op in ops {
        let text = match op.operator.as_str() {
            "BT" => {
                in_text_block = true;
                continue;
            }
            "ET" => {
                in_text_block = false;
                continue;
            }
            "Tf" => {
                if let Some(PdfValue::Name(name)) = op.operands.first() {
                    font = name.clone();
                }
                continue;
            }
            _ if !in_text_block => continue,
            "Tj" | "'" => match op.operands.first() {
                Some(PdfValue::Str(bytes)) => decode(&font, bytes),
                _ => continue,
            },
            "\"" => match op.operands.get(2) {
                Some(PdfValue::Str(bytes)) => decode(&font, bytes),
                _ => continue,
            },
            "TJ" => match op.operands.first() {
                Some(PdfValue::Array(items)) => combine_tj(items, &font, decode),
                _ => continue,
            },
            _ => continue,
        };

        if !text.is_empty() {
            fragments.push(text);
        }
    }

    fragments
}

/// Combine the strings of a `TJ` array, inserting spaces at word gaps.
fn combine_tj(items: &[PdfValue], font: &[u8], decode: &dyn Fn(&[u8], &[u8]) -> String) -> String {
    let mut combined = String::new();

    for item in items {
        match item {
            PdfValue::Str(bytes) => combined.push_str(&decode(font, bytes)),
            other => {
                // Negative values advance to the right.
                let Some(adjustment) = other.as_number().map(|n| -n) else {
                    continue;
                };
                if adjustment > SPACE_THRESHOLD && needs_space(&combined) {
                    combined.push(' ');
                }
            }
        }
    }

    combined
}

fn needs_space(text: &str) -> bool {
    match text.chars().last() {
        None | Some(' ') | Some('\u{00A0}') => false,
        Some(c) => !is_spaceless_script_char(c),
    }
}

/// Check if character is from a script that doesn't use word spaces.
/// Chinese and Japanese don't use spaces between words, but Korean does.
fn is_spaceless_script_char(c: char) -> bool {
    let code = c as u32;

    // CJK Unified Ideographs and Extension A
    (0x4E00..=0x9FFF).contains(&code)
    || (0x3400..=0x4DBF).contains(&code)
    // CJK Unified Ideographs Extension B-F
    || (0x20000..=0x2EBEF).contains(&code)
    // Hiragana, Katakana
    || (0x3040..=0x30FF).contains(&code)
    // CJK Symbols and Punctuation
    || (0x3000..=0x303F).contains(&code)
}
