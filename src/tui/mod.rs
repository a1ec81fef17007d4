// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal shell.
//!
//! Renders the page model with ratatui and translates terminal input into
//! [`PageEvent`]s, driving the controller on a wall-clock tick. Also provides the
//! built-in demo page and a canned API client so the shell runs without a backend.

use std::cell::Cell;
use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::api::{ApiClient, ApiError, SearchRecord, StatsSnapshot};
use crate::app::{App, Effect};
use crate::model::{
    Document, Element, Key as PageKey, NodeId, PageEvent, Rect as PageRect, Viewport,
};
use crate::util::Throttle;

mod theme;

const TICK: Duration = Duration::from_millis(50);
const VIEWPORT_PRESETS: [f32; 3] = [500.0, 900.0, 1300.0];
const SCROLL_STEP_PX: f32 = 40.0;
const DEMO_VIEWPORT_HEIGHT_PX: f32 = 720.0;
// Nominal CSS pixels per terminal column when mapping a terminal resize.
const PX_PER_COLUMN: f32 = 8.0;
const FOOTER_BRAND: &str = "TRACKADEMIC ";
/// Manual refreshes are throttled so holding `r` does not hammer the backend.
const REFRESH_THROTTLE_MS: u64 = 2_000;
const NOTICE_ROTATION: [(&str, &str); 4] = [
    ("Sesi\u{f3}n sincronizada", "info"),
    ("Cambios guardados", "success"),
    ("La conexi\u{f3}n es inestable", "warning"),
    ("No se pudo guardar", "danger"),
];

/// Runs the interactive shell until `q`.
pub fn run(app: App) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut shell = Shell::new(app);
    let started = Instant::now();

    while !shell.should_quit {
        shell.app.advance_to(started.elapsed().as_millis() as u64);
        shell.drain_effects();
        terminal.draw(|frame| draw(frame, &mut shell))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => shell.handle_key(key),
                Event::Resize(cols, _) => shell.handle_terminal_resize(cols),
                _ => {}
            }
        }
    }

    Ok(())
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Page,
    Search,
}

struct Shell {
    app: App,
    focus: Focus,
    search_text: String,
    hover: Option<NodeId>,
    viewport_idx: usize,
    notice_idx: usize,
    refresh_throttle: Throttle,
    status: String,
    should_quit: bool,
}

impl Shell {
    fn new(app: App) -> Self {
        let viewport_idx = VIEWPORT_PRESETS
            .iter()
            .position(|w| *w >= app.doc().viewport().width)
            .unwrap_or(VIEWPORT_PRESETS.len() - 1);
        Self {
            app,
            focus: Focus::Page,
            search_text: String::new(),
            hover: None,
            viewport_idx,
            notice_idx: 0,
            refresh_throttle: Throttle::new(REFRESH_THROTTLE_MS),
            status: String::from("lista"),
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Page => self.handle_page_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.focus = Focus::Page,
            KeyCode::Backspace => {
                self.search_text.pop();
                self.send_search_input();
            }
            KeyCode::Char(c) => {
                self.search_text.push(c);
                self.send_search_input();
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('t') => {
                if let Some(toggle) = self.app.doc().first_by_class("sidebar-toggle") {
                    self.app.handle_event(PageEvent::Click { target: toggle });
                }
            }
            KeyCode::Char('m') => {
                if let Some(trigger) = self.app.doc().first(|el| el.has_attr("data-modal-target")) {
                    self.app.handle_event(PageEvent::Click { target: trigger });
                }
            }
            KeyCode::Char('n') => {
                let (message, severity) = NOTICE_ROTATION[self.notice_idx % NOTICE_ROTATION.len()];
                self.notice_idx += 1;
                self.app.show_notification(message, severity, 5_000);
            }
            KeyCode::Char('r') => {
                if self.refresh_throttle.allow(self.app.now_ms()) {
                    self.app.refresh_stats();
                    self.status = String::from("refresco solicitado");
                } else {
                    self.status = String::from("refresco en espera");
                }
            }
            KeyCode::Char('b') => {
                self.viewport_idx = (self.viewport_idx + 1) % VIEWPORT_PRESETS.len();
                self.app.handle_event(PageEvent::Resize {
                    width: VIEWPORT_PRESETS[self.viewport_idx],
                    height: DEMO_VIEWPORT_HEIGHT_PX,
                });
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let y = self.app.doc().scroll_y() + SCROLL_STEP_PX;
                self.app.handle_event(PageEvent::Scroll { y });
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let y = (self.app.doc().scroll_y() - SCROLL_STEP_PX).max(0.0);
                self.app.handle_event(PageEvent::Scroll { y });
            }
            KeyCode::Tab => self.cycle_hover(),
            KeyCode::Esc => self.app.handle_event(PageEvent::KeyDown { key: PageKey::Escape }),
            _ => {}
        }
    }

    fn send_search_input(&mut self) {
        if let Some(field) = self.app.doc().first_by_class("search-input") {
            self.app.handle_event(PageEvent::Input {
                field,
                value: self.search_text.clone(),
            });
        }
    }

    fn cycle_hover(&mut self) {
        let targets = self.app.doc().select(|el| el.has_attr("data-tooltip"));
        if targets.is_empty() {
            return;
        }
        let next = match self.hover.and_then(|node| targets.iter().position(|t| *t == node)) {
            Some(idx) => targets[(idx + 1) % targets.len()],
            None => targets[0],
        };
        if let Some(prev) = self.hover.take() {
            self.app.handle_event(PageEvent::HoverLeave { target: prev });
        }
        self.app.handle_event(PageEvent::HoverEnter { target: next });
        self.hover = Some(next);
    }

    fn handle_terminal_resize(&mut self, cols: u16) {
        self.app.handle_event(PageEvent::Resize {
            width: f32::from(cols) * PX_PER_COLUMN,
            height: DEMO_VIEWPORT_HEIGHT_PX,
        });
    }

    fn drain_effects(&mut self) {
        for effect in self.app.take_effects() {
            self.status = match effect {
                Effect::ScrollTo { target } => {
                    let id = self
                        .app
                        .doc()
                        .element(target)
                        .and_then(|el| el.id().map(str::to_owned))
                        .unwrap_or_else(|| target.to_string());
                    format!("desplazado a #{id}")
                }
                Effect::SubmitForm { .. } => String::from("formulario enviado"),
                Effect::SearchResults { records } => {
                    format!("{} resultados de b\u{fa}squeda", records.len())
                }
            };
        }
    }
}

fn draw(frame: &mut Frame<'_>, shell: &mut Shell) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());
    let page_area = layout[0];
    let footer_area = layout[1];

    let doc = shell.app.doc();
    let sidebar_node = doc.first_by_class("sidebar");
    let sidebar_cols = sidebar_node.map_or(0, |node| {
        let collapsed = doc.has_class(node, "collapsed");
        let mobile = doc.viewport().width <= crate::model::MOBILE_BREAKPOINT_PX;
        if mobile && !doc.has_class(node, "mobile-open") {
            0
        } else if collapsed {
            10
        } else {
            26
        }
    });

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_cols), Constraint::Min(0)])
        .split(page_area);

    if sidebar_cols > 0 {
        draw_sidebar(frame, shell, columns[0]);
    }
    draw_main(frame, shell, columns[1]);
    draw_notification(frame, shell, page_area);
    draw_tooltip(frame, shell, page_area);
    draw_modal(frame, shell, page_area);
    draw_footer(frame, shell, footer_area);
}

fn draw_sidebar(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let doc = shell.app.doc();
    let items: Vec<ListItem<'_>> = doc
        .all_by_class("nav-link")
        .into_iter()
        .map(|link| {
            let href = doc.attr(link, "href").unwrap_or("?");
            let mut style = Style::default();
            if doc.has_class(link, "active") {
                style = style.fg(theme::ACTIVE_NAV_COLOR).add_modifier(Modifier::BOLD);
            }
            if shell.hover == Some(link) {
                style = style.fg(theme::HOVER_COLOR);
            }
            ListItem::new(Line::from(Span::styled(href.to_owned(), style)))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Navegaci\u{f3}n"));
    frame.render_widget(list, area);
}

fn draw_main(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    draw_stats(frame, shell, rows[0]);
    draw_search(frame, shell, rows[1]);
    draw_form_and_sections(frame, shell, rows[2]);
}

fn draw_stats(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let doc = shell.app.doc();
    let cards = doc.all_by_class("stats-value");
    if cards.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> =
        cards.iter().map(|_| Constraint::Ratio(1, cards.len() as u32)).collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (card, slot) in cards.iter().zip(slots.iter()) {
        let label = doc.element(*card).and_then(|el| el.id()).unwrap_or("m\u{e9}trica");
        let value = doc.text(*card).unwrap_or("");
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value.to_owned(),
            Style::default().fg(theme::STAT_VALUE_COLOR).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).title(label.to_owned()));
        frame.render_widget(paragraph, *slot);
    }
}

fn draw_search(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let doc = shell.app.doc();
    let value = doc
        .first_by_class("search-input")
        .and_then(|input| doc.value(input))
        .unwrap_or("");
    let mut text = value.to_owned();
    if shell.focus == Focus::Search {
        text.push('\u{2588}');
    }
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("B\u{fa}squeda (/)"));
    frame.render_widget(paragraph, area);
}

fn draw_form_and_sections(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let doc = shell.app.doc();
    let mut lines: Vec<Line<'_>> = Vec::new();

    let fields = doc.select(|el| {
        matches!(el.tag(), "input" | "select" | "textarea") && el.id().is_some()
    });
    for field in fields {
        let Some(el) = doc.element(field) else {
            continue;
        };
        let label = el.id().unwrap_or("campo");
        let mut spans = vec![
            Span::styled(format!("{label}: "), Style::default().fg(theme::FOOTER_LABEL_COLOR)),
            Span::raw(el.value().to_owned()),
        ];
        if el.has_class("error") {
            if let Some(message) = field_error_message(doc, field) {
                spans.push(Span::styled(
                    format!("  {message}"),
                    Style::default().fg(theme::ERROR_COLOR),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    for section in doc.all_by_class("animate-on-scroll") {
        let id = doc.element(section).and_then(|el| el.id()).unwrap_or("secci\u{f3}n");
        let revealed = doc.has_class(section, "animate-in");
        let marker = if revealed { "\u{25c6}" } else { "\u{25c7}" };
        let style = if revealed {
            Style::default().fg(theme::ACTIVE_NAV_COLOR)
        } else {
            Style::default().fg(theme::FOOTER_LABEL_COLOR)
        };
        lines.push(Line::from(Span::styled(format!("{marker} #{id}"), style)));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Contenido"));
    frame.render_widget(paragraph, area);
}

fn field_error_message(doc: &Document, field: NodeId) -> Option<String> {
    let parent = doc.parent(field)?;
    doc.children(parent)
        .iter()
        .find(|node| doc.has_class(**node, "field-error"))
        .and_then(|node| doc.text(*node))
        .map(str::to_owned)
}

fn draw_notification(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let doc = shell.app.doc();
    let Some(node) = doc.first_by_class("notification") else {
        return;
    };
    let message = doc
        .first_by_class("notification-message")
        .and_then(|msg| doc.text(msg))
        .unwrap_or("");
    let severity_class = doc
        .element(node)
        .and_then(|el| el.classes().find(|c| c.len() > "notification-".len() && c.starts_with("notification-")))
        .map(str::to_owned);
    let mut style = Style::default().fg(theme::severity_color(severity_class.as_deref()));
    if doc.has_class(node, "fade-out") {
        style = style.add_modifier(Modifier::DIM);
    }

    let width = (message.chars().count() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: 3.min(area.height),
    };
    frame.render_widget(Clear, rect);
    let paragraph = Paragraph::new(Line::from(Span::styled(message.to_owned(), style)))
        .block(Block::default().borders(Borders::ALL).title("Aviso"));
    frame.render_widget(paragraph, rect);
}

fn draw_tooltip(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let doc = shell.app.doc();
    let Some(node) = doc.first_by_class("tooltip-modern") else {
        return;
    };
    if !doc.has_class(node, "show") {
        return;
    }
    let text = doc.text(node).unwrap_or("");
    let width = (text.chars().count() as u16 + 2).min(area.width);
    let rect = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width,
        height: 1,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_owned(), Style::default().fg(theme::TOOLTIP_COLOR))),
        rect,
    );
}

fn draw_modal(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let doc = shell.app.doc();
    let shown = doc.select(|el| el.has_class("modal") && el.has_class("show"));
    let Some(modal) = shown.first() else {
        return;
    };
    let title = doc.element(*modal).and_then(|el| el.id()).unwrap_or("modal");
    let rect = centered_rect(area, 40, 7);
    frame.render_widget(Clear, rect);
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("\u{bf}Confirmar la acci\u{f3}n?"),
        Line::from(Span::styled(
            "[Esc] cerrar",
            Style::default().fg(theme::FOOTER_LABEL_COLOR),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title(title.to_owned()));
    frame.render_widget(body, rect);
}

fn draw_footer(frame: &mut Frame<'_>, shell: &Shell, area: Rect) {
    let mut width_buf = itoa::Buffer::new();
    let width = width_buf.format(shell.app.doc().viewport().width as i64).to_owned();
    let mut scroll_buf = itoa::Buffer::new();
    let scroll = scroll_buf.format(shell.app.doc().scroll_y() as i64).to_owned();

    let spans = vec![
        Span::styled(FOOTER_BRAND, Style::default().fg(theme::BRAND_COLOR)),
        Span::styled("t", Style::default().fg(theme::FOOTER_KEY_COLOR)),
        Span::styled(" men\u{fa}  ", Style::default().fg(theme::FOOTER_LABEL_COLOR)),
        Span::styled("b", Style::default().fg(theme::FOOTER_KEY_COLOR)),
        Span::styled(format!(" ancho {width}px  "), Style::default().fg(theme::FOOTER_LABEL_COLOR)),
        Span::styled("j/k", Style::default().fg(theme::FOOTER_KEY_COLOR)),
        Span::styled(format!(" scroll {scroll}  "), Style::default().fg(theme::FOOTER_LABEL_COLOR)),
        Span::styled("n m r / Tab", Style::default().fg(theme::FOOTER_KEY_COLOR)),
        Span::styled("  q salir  \u{2502} ", Style::default().fg(theme::FOOTER_LABEL_COLOR)),
        Span::raw(shell.status.clone()),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ---- demo page -------------------------------------------------------------

/// Builds the built-in demo page: sidebar navigation, stat cards, a validated
/// form, search, reveal sections and a confirmation modal.
pub fn demo_document(viewport_width: f32) -> Document {
    let mut doc = Document::new(Viewport::new(viewport_width, DEMO_VIEWPORT_HEIGHT_PX));
    let body = doc.body();

    let sidebar = doc.append(
        body,
        Element::new("aside")
            .with_class("sidebar")
            .with_rect(PageRect::new(0.0, 0.0, 240.0, DEMO_VIEWPORT_HEIGHT_PX)),
    );
    let nav = [
        ("/", "Panel principal"),
        ("/cursos", "Listado de cursos"),
        ("/informes/", "Informes en tiempo real"),
        ("/perfil", "Datos del docente"),
    ];
    for (idx, (href, tip)) in nav.iter().enumerate() {
        doc.append(
            sidebar,
            Element::new("a")
                .with_class("nav-link")
                .with_attr("href", *href)
                .with_attr("data-tooltip", *tip)
                .with_rect(PageRect::new(16.0, 48.0 + 40.0 * idx as f32, 200.0, 32.0)),
        );
    }
    doc.append(
        body,
        Element::new("button")
            .with_class("sidebar-toggle")
            .with_rect(PageRect::new(250.0, 8.0, 32.0, 32.0)),
    );

    let main = doc.append(
        body,
        Element::new("main")
            .with_class("main-content")
            .with_rect(PageRect::new(240.0, 0.0, viewport_width - 240.0, 2400.0)),
    );
    for (id, initial) in [("estudiantes", "1248.00"), ("asistencia", "87.50"), ("cursos", "12.00")]
    {
        doc.append(
            main,
            Element::new("span").with_id(id).with_class("stats-value").with_text(initial),
        );
    }

    let form = doc.append(main, Element::new("form").with_attr("data-validate", ""));
    let name_group = doc.append(form, Element::new("div"));
    doc.append(name_group, Element::new("input").with_id("nombre").with_attr("required", ""));
    let email_group = doc.append(form, Element::new("div"));
    doc.append(email_group, Element::new("input").with_id("correo").with_attr("type", "email"));
    let bio_group = doc.append(form, Element::new("div"));
    doc.append(
        bio_group,
        Element::new("textarea").with_id("bio").with_attr("data-min-length", "10"),
    );

    doc.append(main, Element::new("input").with_class("search-input"));

    doc.append(main, Element::new("a").with_attr("href", "#notas"));
    for (id, y) in [("notas", 1400.0), ("historial", 1900.0)] {
        doc.append(
            main,
            Element::new("section")
                .with_id(id)
                .with_class("animate-on-scroll")
                .with_rect(PageRect::new(260.0, y, 700.0, 320.0)),
        );
    }

    doc.append(
        body,
        Element::new("button").with_attr("data-modal-target", "confirmar-envio").with_text("Enviar"),
    );
    let modal = doc.append(body, Element::new("div").with_id("confirmar-envio").with_class("modal"));
    doc.append(modal, Element::new("button").with_class("modal-close"));

    doc
}

/// Deterministic stand-in for the backend so `--demo` works offline.
pub struct CannedApi {
    ticks: Cell<u64>,
}

impl CannedApi {
    pub fn new() -> Self {
        Self { ticks: Cell::new(0) }
    }
}

impl Default for CannedApi {
    fn default() -> Self {
        Self::new()
    }
}

const CANNED_COURSES: [&str; 6] = [
    "Matem\u{e1}ticas I",
    "Matem\u{e1}ticas II",
    "F\u{ed}sica General",
    "Qu\u{ed}mica Org\u{e1}nica",
    "Historia Contempor\u{e1}nea",
    "Programaci\u{f3}n",
];

impl ApiClient for CannedApi {
    fn realtime_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let tick = self.ticks.get() + 1;
        self.ticks.set(tick);
        let drift = tick as f64;
        Ok(StatsSnapshot {
            metrics: vec![1248.0 + 3.0 * drift, (87.5 + 0.25 * drift).min(100.0), 12.0 + drift],
        })
    }

    fn search(&self, query: &str) -> Result<Vec<SearchRecord>, ApiError> {
        let needle = query.to_lowercase();
        Ok(CANNED_COURSES
            .iter()
            .filter(|course| course.to_lowercase().contains(&needle))
            .map(|course| serde_json::json!({ "tipo": "curso", "titulo": course }))
            .collect())
    }
}
