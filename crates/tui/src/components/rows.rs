use medibook_core::DoctorCard;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

/// Byte range of the first case-insensitive occurrence of `needle` in `text`.
///
/// `needle` must already be lowercase.
#[must_use]
pub fn match_range(text: &str, needle: &str) -> Option<(usize, usize)> {
	if needle.is_empty() {
		return None;
	}
	for (start, _) in text.char_indices() {
		let mut lowered = String::new();
		for (offset, ch) in text[start..].char_indices() {
			lowered.extend(ch.to_lowercase());
			if lowered.len() >= needle.len() {
				if lowered == needle {
					return Some((start, start + offset + ch.len_utf8()));
				}
				break;
			}
			if !needle.starts_with(lowered.as_str()) {
				break;
			}
		}
	}
	None
}

/// Render `text` with the first match of `needle` styled.
#[must_use]
pub fn highlight_line<'a>(text: &'a str, needle: &str, style: Style) -> Line<'a> {
	match match_range(text, needle) {
		Some((start, end)) => Line::from(vec![
			Span::raw(&text[..start]),
			Span::styled(&text[start..end], style),
			Span::raw(&text[end..]),
		]),
		None => Line::from(text),
	}
}

/// Label shown in place of the bio for doctors that cannot be booked.
pub const NOT_BOOKABLE_LABEL: &str = "No open slots";

/// Build one table row per card, highlighting the search text in the name and
/// specialization columns. Cards that cannot be booked are dimmed.
#[must_use]
pub fn build_doctor_rows<'a>(
	cards: &'a [DoctorCard],
	query: &str,
	highlight_style: Style,
) -> Vec<Row<'a>> {
	let needle = query.to_lowercase();
	cards
		.iter()
		.map(|card| {
			let about = if card.bookable {
				card.bio_excerpt.as_str()
			} else {
				NOT_BOOKABLE_LABEL
			};
			let row = Row::new([
				Cell::from(highlight_line(&card.name, &needle, highlight_style)),
				Cell::from(highlight_line(&card.specialization, &needle, highlight_style)),
				Cell::from(card.experience.as_str()),
				Cell::from(card.fee.as_str()),
				Cell::from(about),
			]);
			if card.bookable {
				row
			} else {
				row.style(Style::new().add_modifier(Modifier::DIM))
			}
		})
		.collect()
}
