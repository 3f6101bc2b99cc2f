//! TUI Frontend (ratatui-based)
//!
//! This module implements the Frontend trait using ratatui for terminal rendering.
//! It wraps crossterm for event handling and terminal management.

pub mod example_entry;
pub mod hero;
pub mod layout;
pub mod page;
pub mod practice_panel;
pub mod primitives;
pub mod status_bar;
pub mod tip_panel;
pub mod toast;
pub mod topic_card;

use crate::config::Config;
use crate::core::AppCore;
use crate::data::Focus;
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::{AppTheme, ThemePresets};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use layout::{content_columns, PageLayout};
use ratatui::{backend::CrosstermBackend, layout::Rect, style::Style, Terminal};
use std::io;
use std::time::Duration;

/// Rows reserved for the status bar
const STATUS_BAR_HEIGHT: u16 = 1;

/// Where the last frame put the page, for mapping clicks back to elements
#[derive(Debug, Clone)]
struct FrameGeometry {
    layout: PageLayout,
    viewport: Rect,
    scroll: u16,
}

impl FrameGeometry {
    /// Translate a screen position into page coordinates.
    ///
    /// None outside the viewport (status bar, side margins).
    fn to_page(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        let viewport = self.viewport;
        if x < viewport.x || x >= viewport.right() || y < viewport.y || y >= viewport.bottom() {
            return None;
        }
        Some((x - viewport.x, (y - viewport.y).saturating_add(self.scroll)))
    }

    /// Page element under a screen position
    fn hit_test(&self, x: u16, y: u16) -> Option<Focus> {
        let (page_x, page_y) = self.to_page(x, y)?;
        self.layout.hit_test(page_x, page_y)
    }
}

/// TUI Frontend using ratatui
///
/// This frontend renders the page using ratatui (terminal UI library)
/// and handles events via crossterm.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    theme: AppTheme,
    mouse_capture: bool,
    geometry: Option<FrameGeometry>,
    restored: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture and bracketed
    /// paste, and enters alternate screen.
    pub fn new(config: &Config) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .context("Failed to setup terminal")?;
        if config.ui.mouse_capture {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        tracing::info!("Terminal initialized with theme '{}'", config.active_theme);

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(config.ui.poll_timeout_ms),
            theme: ThemePresets::by_name(&config.active_theme),
            mouse_capture: config.ui.mouse_capture,
            geometry: None,
            restored: false,
        })
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key(key_event))
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left)
                | MouseEventKind::ScrollUp
                | MouseEventKind::ScrollDown => Some(FrontendEvent::mouse(
                    mouse_event.kind,
                    mouse_event.column,
                    mouse_event.row,
                )),
                _ => None,
            },
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            Event::Paste(text) => Some(FrontendEvent::paste(text)),
            _ => None,
        }
    }

    /// Map a screen position to the page element drawn there in the last frame
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Focus> {
        self.geometry.as_ref()?.hit_test(x, y)
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Block for up to one frame, then drain whatever else is queued
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            if let Some(frontend_event) = Self::convert_event(event::read()?) {
                events.push(frontend_event);
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn render(&mut self, core: &mut AppCore) -> Result<()> {
        let size = self.terminal.size()?;
        let (x_offset, width) = content_columns(size.width, core.config.ui.max_content_width);
        let viewport = Rect::new(
            x_offset,
            0,
            width,
            size.height.saturating_sub(STATUS_BAR_HEIGHT),
        );

        let layout = PageLayout::compute(width, &core.page, &self.theme);
        core.viewport_height = viewport.height;
        if core.ui_state.scroll_to_focus {
            core.ui_state.scroll =
                layout.scroll_to_show(core.ui_state.focus, core.ui_state.scroll, viewport.height);
            core.ui_state.scroll_to_focus = false;
        }
        core.ui_state.clamp_scroll(layout.content_height, viewport.height);
        let scroll = core.ui_state.scroll;
        let focus = core.ui_state.focus;

        let page_buf = page::render_page(
            &layout,
            &core.page,
            Some(focus),
            &mut core.practice_input,
            &self.theme,
        );

        let theme = &self.theme;
        let notifications = &core.notifications;
        self.terminal.draw(|f| {
            let screen = f.area();
            let buf = f.buffer_mut();
            buf.set_style(screen, Style::default().bg(theme.background));

            page::blit(&page_buf, scroll, viewport, buf);

            if screen.height > 0 {
                let status_area = Rect::new(
                    0,
                    screen.height - STATUS_BAR_HEIGHT.min(screen.height),
                    screen.width,
                    STATUS_BAR_HEIGHT.min(screen.height),
                );
                status_bar::render_status_bar(focus, status_area, buf, theme);
            }

            toast::render_toasts(notifications, screen, buf, theme);
        })?;

        self.geometry = Some(FrameGeometry {
            layout,
            viewport,
            scroll,
        });
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        if self.mouse_capture {
            execute!(self.terminal.backend_mut(), DisableMouseCapture)?;
        }
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
