//! Render surfaces: the only code that touches the display.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
};
use ratatui::Frame;

use crate::ui::layout::phone_rect;
use crate::ui::markup::Element;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_TEXT, CALL_GREEN, CASE_BORDER, HANG_RED, KEY_LETTERS, KEY_TEXT,
    SCREEN_BG, SCREEN_TEXT, SPEAKER,
};

/// Accepts markup trees and repaints.
pub trait RenderSurface {
    /// Replace what is displayed with `markup`.
    fn mount(&mut self, markup: Element);

    /// Scroll the active row of the mounted markup into view.
    fn reveal_active(&mut self);

    /// Remove everything.
    fn clear(&mut self);
}

/// Mount adapter for a ratatui terminal.
///
/// `mount` only records the tree; the runtime calls [`TerminalSurface::draw`]
/// whenever [`TerminalSurface::take_dirty`] says something changed.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    markup: Option<Element>,
    menu_state: ListState,
    /// Row labels of the last mounted menu; a different list scrolls back to the top.
    menu_rows: Vec<String>,
    dirty: bool,
}

impl RenderSurface for TerminalSurface {
    fn mount(&mut self, markup: Element) {
        if self.markup.as_ref() == Some(&markup) {
            return;
        }
        if let Some(list) = markup.find("menu_list") {
            let rows: Vec<String> = list.elements().map(Element::text_content).collect();
            if rows != self.menu_rows {
                self.menu_state = ListState::default();
                self.menu_rows = rows;
            }
            self.menu_state
                .select(list.elements().position(|row| row.active));
        }
        self.markup = Some(markup);
        self.dirty = true;
    }

    fn reveal_active(&mut self) {
        let active = self
            .markup
            .as_ref()
            .and_then(|root| root.find("menu_list"))
            .and_then(|list| list.elements().position(|row| row.active));
        if let Some(index) = active {
            self.menu_state.select(Some(index));
            self.dirty = true;
        }
    }

    fn clear(&mut self) {
        self.markup = None;
        self.menu_state = ListState::default();
        self.menu_rows.clear();
        self.dirty = true;
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> Option<&Element> {
        self.markup.as_ref()
    }

    /// True once after every change since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Force a repaint, e.g. after a terminal resize.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        let Some(root) = self.markup.as_ref() else {
            return;
        };

        let phone = phone_rect(area);
        let case = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CASE_BORDER));
        let inner = case.inner(phone);
        frame.render_widget(case, phone);

        let [speaker, brand, screen, soft_keys, keypad, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas(inner);

        let speaker_style = Style::default().fg(SPEAKER);
        frame.render_widget(
            Paragraph::new(Line::styled("▬▬▬▬▬▬", speaker_style).centered()),
            speaker,
        );
        let brand_text = root.find("brand").map(Element::text_content).unwrap_or_default();
        frame.render_widget(
            Paragraph::new(
                Line::styled(
                    brand_text,
                    Style::default().fg(BRAND_TEXT).add_modifier(Modifier::BOLD),
                )
                .centered(),
            ),
            brand,
        );

        draw_screen(frame, screen, root, &mut self.menu_state);
        frame.render_widget(Paragraph::new(soft_key_line(root).centered()), soft_keys);
        frame.render_widget(Paragraph::new(keypad_lines(root)), keypad);
        frame.render_widget(
            Paragraph::new(Line::styled("· · · ·", speaker_style).centered()),
            footer,
        );
    }
}

fn draw_screen(frame: &mut Frame<'_>, area: Rect, root: &Element, menu_state: &mut ListState) {
    let screen_style = Style::default().bg(SCREEN_BG).fg(SCREEN_TEXT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CASE_BORDER))
        .style(screen_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [status, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let signal = "▂▃▄▅▆▇"
        .chars()
        .take(root.find_all("signal_bar").len())
        .collect::<String>();
    let battery = "█".repeat(root.find_all("battery_bar").len());
    frame.render_widget(Paragraph::new(Line::from(signal)), status);
    frame.render_widget(Paragraph::new(Line::from(battery).right_aligned()), status);

    let Some(wrapper) = root
        .find("screen_content")
        .and_then(|region| region.elements().next())
    else {
        return;
    };
    draw_content(frame, content, wrapper, menu_state);
}

fn draw_content(frame: &mut Frame<'_>, area: Rect, wrapper: &Element, menu_state: &mut ListState) {
    let title_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut footer: Option<Line<'static>> = None;
    let mut menu: Option<&Element> = None;

    for child in wrapper.elements() {
        let text = child.text_content();
        match child.class {
            "pre" => lines.extend(text.lines().map(|line| Line::from(line.to_string()))),
            "text_header" | "menu_title" => {
                lines.push(Line::styled(text, title_style).centered());
            }
            "text_display" => lines.extend(text.split('\n').map(|line| Line::from(line.to_string()))),
            "text_footer" => footer = Some(Line::styled(text, title_style).right_aligned()),
            "menu_list" => menu = Some(child),
            "confirm_info" => {
                for row in child.find_all("info_row") {
                    let label = row.find("label").map(Element::text_content).unwrap_or_default();
                    let value = row.find("value").map(Element::text_content).unwrap_or_default();
                    lines.push(Line::from(format!("{label:<8}{value}")));
                }
            }
            _ => lines.push(Line::from(text)),
        }
    }

    let [body, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(u16::from(footer.is_some())),
    ])
    .areas(area);
    if let Some(footer) = footer {
        frame.render_widget(Paragraph::new(footer), footer_area);
    }

    let Some(menu) = menu else {
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
        return;
    };

    let header_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [top, list_area] =
        Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(body);
    frame.render_widget(Paragraph::new(lines), top);

    let items: Vec<ListItem<'static>> = menu
        .elements()
        .map(|row| {
            let name = row.text_content();
            if row.active {
                ListItem::new(format!("> {name}"))
                    .style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(SCREEN_BG))
            } else {
                ListItem::new(format!("  {name}"))
            }
        })
        .collect();
    frame.render_stateful_widget(List::new(items), list_area, menu_state);
}

fn soft_key_line(root: &Element) -> Line<'static> {
    let label = |class: &str| root.find(class).map(Element::text_content).unwrap_or_default();
    let arrows = root
        .find_all("nav_btn")
        .into_iter()
        .map(Element::text_content)
        .collect::<Vec<_>>()
        .join(" ");
    Line::from(vec![
        Span::styled(format!("[{}]", label("call_btn")), Style::default().fg(CALL_GREEN)),
        Span::styled(format!("   {arrows}   "), Style::default().fg(KEY_TEXT)),
        Span::styled(format!("[{}]", label("hang_btn")), Style::default().fg(HANG_RED)),
    ])
}

fn keypad_lines(root: &Element) -> Vec<Line<'static>> {
    let Some(pad) = root.find("keypad") else {
        return Vec::new();
    };
    let keys: Vec<&Element> = pad.find_all("key");
    keys.chunks(3)
        .map(|row| {
            let spans = row.iter().flat_map(|key| {
                let letters = key.find("letters").map(Element::text_content);
                let symbol = match &letters {
                    Some(letters) => key.text_content().trim_end_matches(letters.as_str()).to_string(),
                    None => key.text_content(),
                };
                let letters = letters.unwrap_or_default();
                [
                    Span::styled(format!("{symbol:>4} "), Style::default().fg(KEY_TEXT)),
                    Span::styled(format!("{letters:<5}"), Style::default().fg(KEY_LETTERS)),
                ]
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect()
}
