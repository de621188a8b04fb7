//! Layout calculation
//!
//! Two levels of layout live here:
//!
//! 1. **Application Layout**: title bar, content and status bar regions via
//!    [`AppLayout`].
//! 2. **Card Layout**: the calculator card centred inside the content region,
//!    split into subtitle, the two fields, the button row and the feedback
//!    region via [`CardLayout`].

use ratatui::prelude::*;

/// Main application layout areas
///
/// ```text
/// +---------------------------------+
/// | Title Bar (1 line)              |
/// +---------------------------------+
/// |                                 |
/// | Content Area                    |
/// | (remaining space)               |
/// |                                 |
/// +---------------------------------+
/// | Status Bar (1 line)             |
/// +---------------------------------+
/// ```
///
/// # Example
///
/// ```
/// use sumcalc_ui::renderer::AppLayout;
/// use ratatui::prelude::Rect;
///
/// let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
///
/// assert_eq!(layout.title_bar, Rect::new(0, 0, 80, 1));
/// assert_eq!(layout.content, Rect::new(0, 1, 80, 22));
/// assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    /// Area for the title bar (top)
    pub title_bar: Rect,
    /// Area for the main content (middle)
    pub content: Rect,
    /// Area for the status bar (bottom)
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout areas from the total terminal area
    ///
    /// Terminals shorter than 3 lines get no bars; everything goes to content.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        if area.height < 3 {
            return AppLayout {
                title_bar: Rect::default(),
                content: area,
                status_bar: Rect::default(),
            };
        }

        AppLayout {
            title_bar: Rect::new(area.x, area.y, area.width, 1),
            content: Rect::new(area.x, area.y + 1, area.width, area.height - 2),
            status_bar: Rect::new(area.x, area.y + area.height - 1, area.width, 1),
        }
    }
}

/// Areas inside the calculator card.
///
/// ```text
/// ╭ Sum Calculator ──────────────────────╮
/// │ Enter two numbers to calculate ...   │  subtitle
/// │                                      │
/// │ ╭ Number 1: ───────────────────────╮ │  field_a
/// │ │ Enter first number               │ │
/// │ ╰──────────────────────────────────╯ │
/// │ ╭ Number 2: ───────────────────────╮ │  field_b
/// │ │ Enter second number              │ │
/// │ ╰──────────────────────────────────╯ │
/// │                                      │
/// │ [ Calculate Sum ]  [ Reset ]         │  calculate, reset
/// │                                      │
/// │ feedback                             │  feedback
/// ╰──────────────────────────────────────╯
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardLayout {
    pub card: Rect,
    pub subtitle: Rect,
    pub field_a: Rect,
    pub field_b: Rect,
    pub calculate: Rect,
    pub reset: Rect,
    pub feedback: Rect,
}

impl CardLayout {
    /// Preferred card width including borders.
    pub const WIDTH: u16 = 56;
    /// Preferred card height including borders.
    pub const HEIGHT: u16 = 20;
    /// Width of `[ Calculate Sum ]`.
    pub const CALCULATE_WIDTH: u16 = 17;
    /// Width of `[ Reset ]`.
    pub const RESET_WIDTH: u16 = 9;
    const BUTTON_GAP: u16 = 2;

    /// Centres the card in `area` and splits it.
    ///
    /// # Example
    ///
    /// ```
    /// use sumcalc_ui::renderer::CardLayout;
    /// use ratatui::prelude::Rect;
    ///
    /// let layout = CardLayout::new(Rect::new(0, 0, 100, 30));
    /// assert_eq!(layout.card.width, CardLayout::WIDTH);
    /// assert_eq!(layout.field_a.height, 3);
    /// assert!(layout.field_a.y < layout.field_b.y);
    /// assert!(layout.calculate.x < layout.reset.x);
    /// ```
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let card = centered(area, Self::WIDTH, Self::HEIGHT);
        let inner = card.inner(Margin::new(2, 1));

        let [subtitle, _, field_a, field_b, _, buttons, _, feedback] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let calculate = Rect::new(buttons.x, buttons.y, Self::CALCULATE_WIDTH, buttons.height)
            .intersection(buttons);
        let reset = Rect::new(
            buttons.x + Self::CALCULATE_WIDTH + Self::BUTTON_GAP,
            buttons.y,
            Self::RESET_WIDTH,
            buttons.height,
        )
        .intersection(buttons);

        CardLayout {
            card,
            subtitle,
            field_a,
            field_b,
            calculate,
            reset,
            feedback,
        }
    }
}

/// Rect of at most `width` x `height` centred in `area`.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
