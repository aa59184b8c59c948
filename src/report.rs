//! HTML rendering of an isomorph set over a runic transcription.
//!
//! Three parts: a census of groups by order and size with their
//! expected-by-chance rates, each occurrence on its own colored line, and
//! the full message with occurrences underlined in place.

use crate::calibrate::CalibrationTable;
use crate::group::IsomorphGroup;
use crate::runic;
use ahash::AHashMap;
use std::fmt::Write;

/// Transliterated letters are padded to this width.
const LETTER_WIDTH: usize = 2;

/// Wraps one or more rendered sections into a standalone page.
pub fn html_document(body: &str) -> String {
    format!("<html><body><pre>\n{body}</pre></body></html>")
}

/// Renders one raw transcription (runes plus break markers) and its
/// discovered groups.
///
/// `table` supplies the expected-by-chance annotations; lengths it does not
/// cover render as `Unknown`.
pub fn format_isomorphs(
    raw: &str,
    isomorphs: &[IsomorphGroup],
    table: &CalibrationTable,
) -> String {
    let cleaned = runic::clean(raw);

    let mut colors_by_position: AHashMap<usize, Vec<String>> = AHashMap::new();
    let mut underlines: AHashMap<usize, usize> = AHashMap::new();

    let mut chunks = vec![format!("Number of letters: <b>{}</b>\n", cleaned.len())];

    let mut morph_chunk = vec![census(isomorphs, cleaned.len(), table)];
    for (morphnum, morph) in isomorphs.iter().enumerate() {
        let pattern = morph.pattern_string();
        for &p in morph.positions() {
            let mut line = String::new();
            for (off, ch) in pattern.chars().enumerate() {
                let Some(&rune) = cleaned.get(p + off) else {
                    continue;
                };
                if ch == '_' {
                    line.push_str(&colored_letter(&[], rune));
                } else {
                    let color = color_for(morphnum, ch);
                    colors_by_position
                        .entry(p + off)
                        .or_default()
                        .push(color.clone());
                    line.push_str(&colored_letter(&[color], rune));
                }
            }
            underlines.insert(p, p + morph.max_offset());
            morph_chunk.push(line);
        }
    }
    chunks.push(morph_chunk.join("\n"));

    // The message itself, in 5-letter groups, 6 groups per line, with
    // occurrences underlined and break marks shown as dots.
    let mut output_letters: Vec<String> = Vec::new();
    let mut ul_end: Option<usize> = None;
    let mut letter_idx = 0usize;
    let mut put_separator = false;

    for letter in raw.chars() {
        if !runic::is_rune(letter) {
            if letter == runic::breaks::PAGE {
                flush_letters(&mut output_letters, &mut chunks);
            }
            if runic::breaks::SEPARATORS.contains(&letter) {
                put_separator = true;
            }
            continue;
        }

        let mut frag = String::from(if put_separator { "•" } else { " " });
        put_separator = false;

        if ul_end.is_none() {
            if let Some(&end) = underlines.get(&letter_idx) {
                ul_end = Some(end);
                frag.push_str("<u>");
            }
        }

        let colors = colors_by_position.get(&letter_idx).cloned().unwrap_or_default();
        frag.push_str(&colored_letter(&colors, cleaned[letter_idx]));

        if ul_end == Some(letter_idx) {
            ul_end = None;
            frag.push_str("</u>");
        }

        output_letters.push(frag);
        letter_idx += 1;
    }
    flush_letters(&mut output_letters, &mut chunks);

    chunks.join("\n\n")
}

/// Census header: how many groups of each (order)[size], with the
/// expected-by-chance annotation for this message length.
fn census(isomorphs: &[IsomorphGroup], length: usize, table: &CalibrationTable) -> String {
    let mut sorted: Vec<&IsomorphGroup> = isomorphs.iter().collect();
    sorted.sort_by_key(|g| (g.order(), g.size()));

    let mut header = String::from("Isomorphs by (order) and [group size]:\n");
    let mut idx = 0;
    while idx < sorted.len() {
        let (order, size) = (sorted[idx].order(), sorted[idx].size());
        let run = sorted[idx..]
            .iter()
            .take_while(|g| g.order() == order && g.size() == size)
            .count();
        let expected = match table.expected(length, order, size) {
            Some(rate) => rate.to_string(),
            None => "Unknown".to_string(),
        };
        let _ = writeln!(header, "    ({order:2})[{size:2}]: {run:3} ({expected} expected)");
        idx += run;
    }
    header
}

fn flush_letters(output_letters: &mut Vec<String>, chunks: &mut Vec<String>) {
    let groups: Vec<String> = output_letters.chunks(5).map(|c| c.concat()).collect();
    let lines: Vec<String> = groups.chunks(6).map(|c| c.join("  ")).collect();
    chunks.push(lines.join("\n\n"));
    output_letters.clear();
}

fn colored_letter(colors: &[String], rune: char) -> String {
    let latin = runic::to_latin(rune).unwrap_or("?");
    if colors.is_empty() {
        format!("{latin:<width$}", width = LETTER_WIDTH)
    } else {
        format!(
            "<span style=\"background-color:{}; background-image:linear-gradient(to bottom, {})\">{:<width$}</span>",
            colors[0],
            colors.join(", "),
            latin,
            width = LETTER_WIDTH
        )
    }
}

/// Deterministic pastel color for one pattern letter of one group.
fn color_for(morphnum: usize, ch: char) -> String {
    let mut z = ((morphnum as u64) << 32) ^ ch as u64;
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;

    let hue = (z % 360) as f64;
    let lightness = 0.6 + 0.1 * ((z >> 16) % 3) as f64;
    let (r, g, b) = hsl_to_rgb(hue, 0.55, lightness);
    format!("rgb({r}, {g}, {b})")
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round() as u8;
    (channel(r1), channel(g1), channel(b1))
}
