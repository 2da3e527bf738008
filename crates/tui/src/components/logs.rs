use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::style::Theme;

/// Draw the captured log lines into `area`.
pub fn render_log_pane(frame: &mut Frame, area: Rect, state: &TuiWidgetState, theme: &Theme) {
	frame.render_widget(Clear, area);
	if area.width == 0 || area.height == 0 {
		return;
	}

	tui_logger::move_events();

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(" Log ");
	let widget = TuiLoggerWidget::default()
		.block(block)
		.style(theme.empty)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false)
		.state(state);
	frame.render_widget(widget, area);
}
