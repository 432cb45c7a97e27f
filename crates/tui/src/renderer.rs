use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect as TermRect,
    style::{Color, Modifier, Style},
};
use termfolio_core::layout::Layout;
use termfolio_core::model::{Portfolio, SectionId};
use termfolio_core::reveal::{RevealTrigger, intersection_ratio};
use termfolio_core::tracker::{SectionRegistry, SectionTracker};
use termfolio_core::views::{self, ease_out_cubic, nav, splash};
use termfolio_protocol::{RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport};

use crate::form::ContactForm;

/// Frame cadence; also the input poll timeout.
const TICK: Duration = Duration::from_millis(33);
/// Entrance animation length once a section's reveal latches.
const REVEAL_SECS: f64 = 0.8;
/// Rows per line-scroll step.
const LINE_SCROLL: f64 = 2.0;
/// Rows per mouse wheel notch.
const WHEEL_SCROLL: f64 = 3.0;
/// Fraction of the viewport scrolled by Page Up/Down.
const PAGE_FACTOR: f64 = 0.9;
/// Per-frame approach factor of the smooth scroll.
const SMOOTH_APPROACH: f64 = 0.25;

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Rgb(12, 12, 17),
        ThemeToken::Surface => Color::Rgb(20, 20, 28),
        ThemeToken::Border => Color::Rgb(60, 60, 75),
        ThemeToken::TextPrimary => Color::Rgb(230, 230, 236),
        ThemeToken::TextSecondary => Color::Rgb(168, 168, 180),
        ThemeToken::TextMuted => Color::Rgb(110, 110, 126),
        ThemeToken::Accent => Color::Rgb(188, 122, 250),
        ThemeToken::AccentAlt => Color::Rgb(238, 130, 172),
        ThemeToken::NavBackground => Color::Rgb(22, 17, 32),
        ThemeToken::NavBrand => Color::Rgb(188, 122, 250),
        ThemeToken::NavActive => Color::Rgb(202, 144, 255),
        ThemeToken::NavInactive => Color::Rgb(150, 150, 162),
        ThemeToken::NavIndicator => Color::Rgb(238, 130, 172),
        ThemeToken::CardBackground => Color::Rgb(22, 22, 31),
        ThemeToken::CardBorder => Color::Rgb(64, 54, 88),
        ThemeToken::CardTitle => Color::Rgb(202, 144, 255),
        ThemeToken::GaugeTrack => Color::Rgb(40, 40, 54),
        ThemeToken::GaugeFill => Color::Rgb(150, 92, 222),
        ThemeToken::TagBackground => Color::Rgb(38, 30, 58),
        ThemeToken::TagText => Color::Rgb(140, 178, 250),
        ThemeToken::FieldBackground => Color::Rgb(25, 25, 35),
        ThemeToken::FieldBorder => Color::Rgb(70, 70, 92),
        ThemeToken::FieldFocused => Color::Rgb(202, 144, 255),
        ThemeToken::FieldError => Color::Rgb(235, 102, 102),
        ThemeToken::StatusSending => Color::Rgb(226, 192, 90),
        ThemeToken::StatusSuccess => Color::Rgb(120, 210, 140),
        ThemeToken::ParticleDim => Color::Rgb(58, 54, 84),
        ThemeToken::ParticleBright => Color::Rgb(118, 108, 168),
        ThemeToken::SplashSpinner => Color::Rgb(188, 122, 250),
    }
}

/// One section's reveal trigger plus the instant it latched, from which
/// the entrance progress is derived.
struct RevealAnimation {
    trigger: RevealTrigger,
    since: Option<Instant>,
}

impl RevealAnimation {
    fn new() -> Self {
        Self {
            trigger: RevealTrigger::default(),
            since: None,
        }
    }

    fn progress(&self, now: Instant) -> f64 {
        match self.since {
            Some(since) => ease_out_cubic(now.duration_since(since).as_secs_f64() / REVEAL_SECS),
            None => 0.0,
        }
    }
}

pub fn run(portfolio: &Portfolio, no_splash: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, portfolio, no_splash);

    // Teardown runs on every exit path, error included.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    portfolio: &Portfolio,
    no_splash: bool,
) -> Result<()> {
    let start = Instant::now();
    let nav_h = nav::NAV_HEIGHT as u16;

    let mut splash_done = no_splash;
    let mut scroll_y: f64 = 0.0;
    let mut scroll_target: Option<f64> = None;
    let mut form = ContactForm::new();
    let mut form_active = false;

    let tracker = SectionTracker::new(SectionRegistry::document_order());
    tracker.subscribe(|id| tracing::debug!(section = id.as_str(), "nav highlight moved"));

    let mut reveals: Vec<RevealAnimation> = SectionId::ALL
        .iter()
        .map(|_| RevealAnimation::new())
        .collect();

    loop {
        let now = Instant::now();
        let size = terminal.size()?;

        if !splash_done {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed >= splash::DURATION_SECS {
                splash_done = true;
            } else {
                let screen = Viewport::new(0.0, f64::from(size.width), f64::from(size.height));
                let cmds = splash::render(&portfolio.name, &screen, elapsed);
                terminal.draw(|frame| {
                    let area = frame.area();
                    let buf = frame.buffer_mut();
                    fill_background(buf, area);
                    paint(buf, area, &cmds, 0.0, 0.0, 0.0, f64::from(area.height));
                })?;
                if event::poll(Duration::from_millis(50))?
                    && let Event::Key(key) = event::read()?
                    && key.kind == KeyEventKind::Press
                {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        _ => splash_done = true,
                    }
                }
                continue;
            }
        }

        let content_h = f64::from(size.height.saturating_sub(nav_h));
        let mut viewport = Viewport::new(scroll_y, f64::from(size.width), content_h);
        let layout = Layout::compute(portfolio, &viewport);
        let max_scroll = (layout.height() - viewport.height).max(0.0);

        if let Some(target) = scroll_target {
            let target = target.clamp(0.0, max_scroll);
            let delta = target - scroll_y;
            if delta.abs() < 0.5 {
                scroll_y = target;
                scroll_target = None;
            } else {
                scroll_y += delta * SMOOTH_APPROACH;
            }
        }
        scroll_y = scroll_y.clamp(0.0, max_scroll);
        viewport.scroll_y = scroll_y;

        for ((_, metrics), anim) in layout.entries().iter().zip(&mut reveals) {
            if anim.trigger.notify(intersection_ratio(metrics, &viewport)) {
                anim.since = Some(now);
            }
        }
        tracker.recompute(&layout, &viewport);
        form.tick(now);

        let particle_cmds =
            views::particles::render(layout.height(), &viewport, start.elapsed().as_secs_f64());
        let nav_cmds = nav::render(&portfolio.name, &viewport, tracker.active());
        let footer_cmds = views::footer::render(portfolio, &viewport);
        let form_view = form.view(form_active);

        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            fill_background(buf, area);

            let content_top = f64::from(nav_h);
            let content_bottom = f64::from(area.height);

            // Background particle field, in document coordinates.
            paint(
                buf,
                area,
                &particle_cmds,
                0.0,
                content_top - scroll_y,
                content_top,
                content_bottom,
            );

            for (id, metrics) in layout.entries() {
                let top = content_top + metrics.offset - scroll_y;
                if top >= content_bottom || top + metrics.extent <= content_top {
                    continue;
                }
                let progress = reveals[id.index()].progress(now);
                let cmds = match id {
                    SectionId::Hero => views::hero::render(portfolio, &viewport, progress),
                    SectionId::About => views::about::render(portfolio, &viewport, progress),
                    SectionId::Skills => views::skills::render(portfolio, &viewport, progress),
                    SectionId::Projects => views::projects::render(portfolio, &viewport, progress),
                    SectionId::Articles => views::articles::render(portfolio, &viewport, progress),
                    SectionId::Contact => {
                        views::contact::render(portfolio, &viewport, progress, &form_view)
                    }
                };
                let clip_bottom = (top + metrics.extent).min(content_bottom);
                paint(buf, area, &cmds, 0.0, top, content_top, clip_bottom);
            }

            let footer_top = content_top + layout.footer_offset() - scroll_y;
            if footer_top < content_bottom {
                paint(
                    buf,
                    area,
                    &footer_cmds,
                    0.0,
                    footer_top,
                    content_top,
                    content_bottom,
                );
            }

            // The navigation bar paints last, over everything.
            paint(buf, area, &nav_cmds, 0.0, 0.0, 0.0, f64::from(nav_h));
        })?;

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if form_active {
                    match key.code {
                        KeyCode::Esc => form_active = false,
                        KeyCode::Tab => form.next_field(),
                        KeyCode::BackTab => form.prev_field(),
                        KeyCode::Backspace => form.backspace(),
                        KeyCode::Enter => {
                            form.activate(now);
                        }
                        KeyCode::Char(c) => form.input_char(c),
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Up | KeyCode::Char('k') => {
                            scroll_target = None;
                            scroll_y -= LINE_SCROLL;
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            scroll_target = None;
                            scroll_y += LINE_SCROLL;
                        }
                        KeyCode::PageUp => {
                            scroll_target = None;
                            scroll_y -= viewport.height * PAGE_FACTOR;
                        }
                        KeyCode::PageDown => {
                            scroll_target = None;
                            scroll_y += viewport.height * PAGE_FACTOR;
                        }
                        KeyCode::Home => scroll_target = Some(0.0),
                        KeyCode::End => scroll_target = Some(max_scroll),
                        KeyCode::Char(c @ '1'..='6') => {
                            let index = (c as usize) - ('1' as usize);
                            scroll_target = jump_target(&layout, SectionId::ALL[index]);
                        }
                        KeyCode::Tab => {
                            let next = (tracker.active().index() + 1) % SectionId::ALL.len();
                            scroll_target = jump_target(&layout, SectionId::ALL[next]);
                        }
                        KeyCode::BackTab => {
                            let count = SectionId::ALL.len();
                            let prev = (tracker.active().index() + count - 1) % count;
                            scroll_target = jump_target(&layout, SectionId::ALL[prev]);
                        }
                        KeyCode::Enter => {
                            if tracker.active() == SectionId::Contact {
                                form_active = true;
                                form.focus_first();
                            } else {
                                scroll_target = jump_target(&layout, SectionId::Contact);
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => {
                    scroll_target = None;
                    scroll_y += WHEEL_SCROLL;
                }
                MouseEventKind::ScrollUp => {
                    scroll_target = None;
                    scroll_y -= WHEEL_SCROLL;
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(())
}

/// Smooth-scroll destination that puts a section's top at the top of the
/// content area.
fn jump_target(layout: &Layout, id: SectionId) -> Option<f64> {
    use termfolio_core::tracker::SectionGeometry;
    layout.metrics(id).map(|m| m.offset)
}

fn fill_background(buf: &mut Buffer, area: TermRect) {
    let bg = theme_to_color(ThemeToken::Background);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_char(' ').set_bg(bg).set_fg(bg);
        }
    }
}

/// Paint a command list onto the buffer. `dx`/`dy` translate command
/// coordinates into screen rows/columns; rows outside
/// `[clip_top, clip_bottom)` are dropped.
fn paint(
    buf: &mut Buffer,
    area: TermRect,
    cmds: &[RenderCommand],
    dx: f64,
    dy: f64,
    clip_top: f64,
    clip_bottom: f64,
) {
    for cmd in cmds {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
            } => {
                let bg = theme_to_color(*color);
                let x0 = rect.x + dx;
                let y0 = rect.y + dy;
                let w = rect.w.max(0.0) as u16;
                let h = rect.h.max(0.0) as u16;
                for row in 0..h {
                    for col in 0..w {
                        put(
                            buf,
                            area,
                            x0 + f64::from(col),
                            y0 + f64::from(row),
                            clip_top,
                            clip_bottom,
                            |cell| {
                                cell.set_char(' ').set_bg(bg);
                            },
                        );
                    }
                }
                if let Some(border) = border_color {
                    let fg = theme_to_color(*border);
                    draw_border(buf, area, x0, y0, w, h, fg, clip_top, clip_bottom);
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
                emphasis,
            } => {
                let fg = theme_to_color(*color);
                let len = text.chars().count() as f64;
                let x0 = match align {
                    TextAlign::Left => position.x,
                    TextAlign::Center => position.x - len / 2.0,
                    TextAlign::Right => position.x - len,
                } + dx;
                let y = position.y + dy;
                let style = match emphasis {
                    TextEmphasis::Normal => Style::default().fg(fg),
                    TextEmphasis::Bold => Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    TextEmphasis::Dim => Style::default().fg(fg).add_modifier(Modifier::DIM),
                };
                for (i, ch) in text.chars().enumerate() {
                    if ch == ' ' {
                        continue;
                    }
                    put(buf, area, x0 + i as f64, y, clip_top, clip_bottom, |cell| {
                        cell.set_char(ch).set_style(style);
                    });
                }
            }
            RenderCommand::DrawLine { from, to, color } => {
                let fg = theme_to_color(*color);
                if (from.y - to.y).abs() < f64::EPSILON {
                    let y = from.y + dy;
                    let (a, b) = (from.x.min(to.x), from.x.max(to.x));
                    let mut x = a;
                    while x < b {
                        put(buf, area, x + dx, y, clip_top, clip_bottom, |cell| {
                            cell.set_char('─').set_fg(fg);
                        });
                        x += 1.0;
                    }
                } else {
                    let x = from.x + dx;
                    let (a, b) = (from.y.min(to.y), from.y.max(to.y));
                    let mut y = a;
                    while y < b {
                        put(buf, area, x, y + dy, clip_top, clip_bottom, |cell| {
                            cell.set_char('│').set_fg(fg);
                        });
                        y += 1.0;
                    }
                }
            }
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }
}

fn draw_border(
    buf: &mut Buffer,
    area: TermRect,
    x0: f64,
    y0: f64,
    w: u16,
    h: u16,
    fg: Color,
    clip_top: f64,
    clip_bottom: f64,
) {
    if w == 0 || h == 0 {
        return;
    }
    if h == 1 {
        // Single-row rects (input fields) get bracket ends.
        put(buf, area, x0, y0, clip_top, clip_bottom, |cell| {
            cell.set_char('[').set_fg(fg);
        });
        put(
            buf,
            area,
            x0 + f64::from(w - 1),
            y0,
            clip_top,
            clip_bottom,
            |cell| {
                cell.set_char(']').set_fg(fg);
            },
        );
        return;
    }
    let right = f64::from(w - 1);
    let bottom = f64::from(h - 1);
    for col in 1..w.saturating_sub(1) {
        for row_y in [y0, y0 + bottom] {
            put(buf, area, x0 + f64::from(col), row_y, clip_top, clip_bottom, |cell| {
                cell.set_char('─').set_fg(fg);
            });
        }
    }
    for row in 1..h.saturating_sub(1) {
        for col_x in [x0, x0 + right] {
            put(buf, area, col_x, y0 + f64::from(row), clip_top, clip_bottom, |cell| {
                cell.set_char('│').set_fg(fg);
            });
        }
    }
    for (cx, cy, ch) in [
        (x0, y0, '╭'),
        (x0 + right, y0, '╮'),
        (x0, y0 + bottom, '╰'),
        (x0 + right, y0 + bottom, '╯'),
    ] {
        put(buf, area, cx, cy, clip_top, clip_bottom, |cell| {
            cell.set_char(ch).set_fg(fg);
        });
    }
}

/// Write one cell if it lands inside the area and the clip band.
fn put(
    buf: &mut Buffer,
    area: TermRect,
    x: f64,
    y: f64,
    clip_top: f64,
    clip_bottom: f64,
    write: impl FnOnce(&mut ratatui::buffer::Cell),
) {
    if y < clip_top || y >= clip_bottom || x < 0.0 || y < 0.0 {
        return;
    }
    let col = x.floor() as u16;
    let row = y.floor() as u16;
    if col >= area.width || row >= area.height {
        return;
    }
    write(&mut buf[(area.x + col, area.y + row)]);
}
