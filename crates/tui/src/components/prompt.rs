use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a, 'i> {
	pub input: &'a mut QueryInput<'i>,
	pub title: &'a str,
	pub specialization: &'a str,
	/// Whether the search input owns the keyboard.
	pub focused: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the prompt row: title, search input and the specialization selector
/// aligned to the right.
pub fn render_prompt(frame: &mut Frame, context: PromptContext<'_, '_>) {
	let PromptContext {
		input,
		title,
		specialization,
		focused,
		area,
		theme,
	} = context;

	let selector = selector_label(specialization);
	let selector_width = selector.width() as u16;
	let prompt_width = calculate_prompt_width(title);
	let constraints = layout_constraints(prompt_width, selector_width);

	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(constraints)
		.split(area);

	if prompt_width > 0 {
		let prompt = Paragraph::new(format!("{title} > ")).style(theme.prompt);
		frame.render_widget(prompt, columns[0]);
	}

	let input_area = columns[if prompt_width > 0 { 1 } else { 0 }];
	input.render(frame, input_area, None, focused);

	let selector_area = columns[columns.len() - 1];
	let line = Line::from(vec![
		Span::styled("◀ ", theme.empty),
		Span::styled(specialization.to_string(), theme.header),
		Span::styled(" ▶", theme.empty),
	]);
	frame.render_widget(Paragraph::new(line), selector_area);
}

fn selector_label(specialization: &str) -> String {
	format!(" ◀ {specialization} ▶")
}

fn calculate_prompt_width(title: &str) -> u16 {
	if title.is_empty() {
		0
	} else {
		title.width() as u16 + 3
	}
}

fn layout_constraints(prompt_width: u16, selector_width: u16) -> Vec<Constraint> {
	let mut constraints = Vec::with_capacity(3);
	if prompt_width > 0 {
		constraints.push(Constraint::Length(prompt_width));
	}
	constraints.push(Constraint::Min(1));
	constraints.push(Constraint::Length(selector_width.max(12)));
	constraints
}
