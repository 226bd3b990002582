use ratatui::Frame;
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::Transcript;

/// Fixed height of the input area: one text row plus borders.
const INPUT_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use ratatui::layout::Constraint::{Length, Min};
    let layout = ratatui::layout::Layout::vertical([Length(1), Min(0), Length(INPUT_HEIGHT)]);
    let [title_area, transcript_area, input_area] = layout.areas(frame.area());

    // Title bar
    let title_text = format!("Charla ({}) | {}", app.server_url, app.status_message);
    frame.render_widget(Span::raw(title_text), title_area);

    // Message log
    let mut transcript = Transcript::new(&app.transcript, &mut tui.transcript);
    transcript.render(frame, transcript_area);

    // Input area (also positions the terminal cursor)
    tui.input_box.render(frame, input_area);
}
