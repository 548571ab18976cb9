//! Rendering for Mailmuse Studio

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use super::state::{StudioState, Tab};
use crate::types::{Campaign, ChatMessage, ChatRole, GeneratedImage};
use crate::ui;

/// One frame's worth of workflow state, sampled from the signals
pub struct ContentView {
    pub campaign: Option<Campaign>,
    pub image: Option<GeneratedImage>,
    pub error: Option<String>,
    pub generating: bool,
    pub messages: Vec<ChatMessage>,
    pub chat_loading: bool,
}

/// Render the whole studio frame
pub fn render(frame: &mut Frame, state: &mut StudioState, view: &ContentView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tab_bar(frame, chunks[0], state.active_tab);

    match state.active_tab {
        Tab::Generator => render_generator(frame, chunks[1], state, view),
        Tab::Chatbot => render_chatbot(frame, chunks[1], state, view),
    }

    render_footer(frame, chunks[2], state.active_tab);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let titles = [Tab::Generator, Tab::Chatbot]
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.display_name())))
        .collect::<Vec<_>>();
    let selected = match active {
        Tab::Generator => 0,
        Tab::Chatbot => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(ui::PURPLE_MUTED))
        .highlight_style(
            Style::default()
                .fg(ui::ELECTRIC_PURPLE)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    let bar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " ✨ mailmuse",
            Style::default()
                .fg(ui::DEEP_PURPLE)
                .add_modifier(Modifier::BOLD),
        )),
        bar[0],
    );
    frame.render_widget(tabs, bar[1]);
}

fn render_footer(frame: &mut Frame, area: Rect, active: Tab) {
    let hints = match active {
        Tab::Generator => " Tab: switch · Enter: generate · Ctrl+R: aspect ratio · Esc: quit",
        Tab::Chatbot => " Tab: switch · Enter: send · ↑/↓: scroll · Esc: quit",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(ui::PURPLE_MUTED)),
        area,
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Generator Tab
// ═══════════════════════════════════════════════════════════════════════════════

fn render_generator(frame: &mut Frame, area: Rect, state: &mut StudioState, view: &ContentView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    state.prompt_input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ui::DEEP_PURPLE))
            .title(" Campaign Prompt "),
    );
    frame.render_widget(&state.prompt_input, chunks[0]);

    let ratio_line = Line::from(vec![
        Span::styled(" Aspect ratio: ", Style::default().fg(ui::PURPLE_MUTED)),
        Span::styled(
            state.aspect_ratio.label(),
            Style::default().fg(ui::NEON_CYAN),
        ),
    ]);
    frame.render_widget(Paragraph::new(ratio_line), chunks[1]);

    render_status_line(frame, chunks[2], state, view);
    render_campaign(frame, chunks[3], view);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &mut StudioState, view: &ContentView) {
    let line = if let Some(error) = &view.error {
        Line::from(Span::styled(
            format!(" ✗ {error}"),
            Style::default().fg(ui::ERROR_RED),
        ))
    } else if view.generating {
        let (glyph, text, color, _width) = state.spinner.tick();
        Line::from(Span::styled(
            format!(" {glyph}{text}"),
            Style::default().fg(color),
        ))
    } else if view.campaign.is_some() {
        Line::from(Span::styled(
            " ✓ Campaign ready",
            Style::default().fg(ui::SUCCESS_GREEN),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_campaign(frame: &mut Frame, area: Rect, view: &ContentView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui::VOID))
        .title(" Campaign ");

    let Some(campaign) = &view.campaign else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " Describe your campaign above and press Enter.",
                Style::default().fg(ui::PURPLE_MUTED),
            ))
            .block(block),
            area,
        );
        return;
    };

    let width = usize::from(area.width.saturating_sub(4)).max(20);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            "Subject: ",
            Style::default()
                .fg(ui::NEON_CYAN)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(campaign.subject.clone(), Style::default().fg(ui::SOFT_WHITE)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Preview: ", Style::default().fg(ui::NEON_CYAN)),
        Span::styled(
            campaign.preview_text.clone(),
            Style::default().fg(ui::PURPLE_MUTED),
        ),
    ]));
    lines.push(Line::from(""));

    for wrapped in textwrap::wrap(&html_to_text(&campaign.body), width) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(ui::SOFT_WHITE),
        )));
    }

    lines.push(Line::from(""));
    lines.push(image_status_line(view));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn image_status_line(view: &ContentView) -> Line<'static> {
    if let Some(image) = &view.image {
        Line::from(Span::styled(
            format!(
                "🖼  Hero image ready ({}, ~{} KB, data URI)",
                image.mime_type,
                approx_decoded_kb(image)
            ),
            Style::default().fg(ui::SUCCESS_GREEN),
        ))
    } else if view.generating {
        Line::from(Span::styled(
            "🖼  Generating hero image…",
            Style::default().fg(ui::ELECTRIC_YELLOW),
        ))
    } else {
        Line::from(Span::styled(
            "🖼  No hero image",
            Style::default().fg(ui::PURPLE_MUTED),
        ))
    }
}

/// Decoded size of the base64 payload, in kilobytes
fn approx_decoded_kb(image: &GeneratedImage) -> usize {
    image.data.len() * 3 / 4 / 1024
}

// ═══════════════════════════════════════════════════════════════════════════════
// Chatbot Tab
// ═══════════════════════════════════════════════════════════════════════════════

fn render_chatbot(frame: &mut Frame, area: Rect, state: &mut StudioState, view: &ContentView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    render_messages(frame, chunks[0], state, view);

    state.chat_input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ui::DEEP_PURPLE))
            .title(" Message "),
    );
    frame.render_widget(&state.chat_input, chunks[1]);
}

fn render_messages(frame: &mut Frame, area: Rect, state: &mut StudioState, view: &ContentView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui::VOID))
        .title(" Marketing Assistant ");
    let inner_height = usize::from(area.height.saturating_sub(2));
    let width = usize::from(area.width.saturating_sub(4)).max(20);

    let mut lines: Vec<Line> = Vec::new();
    for message in &view.messages {
        let (name, color) = match message.role {
            ChatRole::User => ("You", ui::CORAL),
            ChatRole::Model => ("Muse", ui::NEON_CYAN),
        };
        lines.push(Line::from(Span::styled(
            name,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for wrapped in textwrap::wrap(&message.text, width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(ui::SOFT_WHITE),
            )));
        }
        lines.push(Line::from(""));
    }

    if view.chat_loading {
        let (glyph, text, color, _width) = state.spinner.tick();
        lines.push(Line::from(Span::styled(
            format!("{glyph}{text}"),
            Style::default().fg(color),
        )));
    }

    // Pin to the bottom unless the user scrolled up
    let total = lines.len();
    let offset = total
        .saturating_sub(inner_height)
        .saturating_sub(state.chat_scroll);
    state.chat_scroll = state.chat_scroll.min(total.saturating_sub(inner_height));

    #[allow(clippy::cast_possible_truncation)]
    let paragraph = Paragraph::new(lines).block(block).scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// HTML Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Flatten the campaign body's simple HTML (<p>, <strong>, <br>) to plain text
pub fn html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut tag = String::new();

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag.trim().to_ascii_lowercase();
                if name == "/p" || name == "br" || name == "br/" || name == "br /" {
                    text.push('\n');
                }
            }
            _ if in_tag => tag.push(c),
            _ => text.push(c),
        }
    }

    // Collapse runs of blank lines left behind by paragraph tags
    let mut result = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        result.push_str(line.trim_end());
        result.push('\n');
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_to_text_flattens_simple_markup() {
        let html = "<p>Big <strong>sale</strong> today.</p><p>Act now!<br>Limited stock.</p>";
        assert_eq!(html_to_text(html), "Big sale today.\nAct now!\nLimited stock.");
    }

    #[test]
    fn html_to_text_passes_plain_text_through() {
        assert_eq!(html_to_text("Hello there"), "Hello there");
    }
}
