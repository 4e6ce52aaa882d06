//! Reusable clickable UI components.
//!
//! A component encapsulates both rendering and click target registration,
//! so visual output and interactive behaviour stay co-located.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Annotate lines as clickable when you add them, then call
/// [`register_targets`](ClickableList::register_targets) once after rendering
/// to register all targets at the correct rows.
///
/// # Example
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Buildings"));
/// cl.push_clickable(Line::from(" [1] Red"), BUY_BUILDING_BASE);
/// cl.register_targets(area, &mut cs, 1, 1, 0);
/// let widget = Paragraph::new(cl.into_lines()).block(block);
/// f.render_widget(widget, area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs — line_index is the index into `lines`.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line with a semantic action ID.
    ///
    /// The action is bound to whatever row this line ends up on.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area (including borders).
    /// * `top_offset` / `bottom_offset` — rows taken by borders above/below content.
    /// * `inner_width` — content width for wrap calculation. Pass `0` when the
    ///   widget does not wrap; each logical line then occupies one row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let w = inner_width as usize;
        let mut visual_row: u16 = 0;
        let mut rows: Vec<(u16, u16)> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let lw = line.width();
            let h = if w == 0 || lw <= w { 1 } else { lw.div_ceil(w) as u16 };
            rows.push((visual_row, h));
            visual_row += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let Some(&(start, height)) = rows.get(line_idx as usize) else {
                continue;
            };
            // A wrapped line is clickable on every row it spans.
            for r in 0..height {
                let screen_row = content_y + start + r;
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}

impl Default for ClickableList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clickable_list_basic() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("item 0"), 10);
        cl.push_clickable(Line::from("item 1"), 11);
        cl.push(Line::from("footer"));
        assert_eq!(cl.len(), 4);

        // Borders::ALL → top_offset=1, bottom_offset=1
        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 7), Some(10));
        assert_eq!(cs.hit_test(10, 8), Some(11));
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_list_clipped_by_area() {
        let mut cl = ClickableList::new();
        for i in 0..7 {
            cl.push_clickable(Line::from(format!("building {}", i)), 100 + i as u16);
        }

        // height=5 with borders leaves 3 content rows
        let area = Rect::new(0, 0, 80, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(10, 1), Some(100));
        assert_eq!(cs.hit_test(10, 3), Some(102));
        assert_eq!(cs.hit_test(10, 4), None);
    }

    #[test]
    fn clickable_list_empty() {
        let cl: ClickableList = ClickableList::new();
        assert!(cl.is_empty());

        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 80, 10), &mut cs, 1, 1, 0);
        assert!(cs.targets.is_empty());
    }

    #[test]
    fn clickable_list_wrap_pushes_later_targets_down() {
        let mut cl = ClickableList::new();
        // 20 chars in a 10-wide area → 2 visual rows
        cl.push(Line::from("12345678901234567890"));
        cl.push_clickable(Line::from("item0"), 10);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 0), None);
        assert_eq!(cs.hit_test(5, 1), None);
        assert_eq!(cs.hit_test(5, 2), Some(10));
    }

    #[test]
    fn clickable_list_wrap_covers_all_rows() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("123456789012345678901234567890"), 42);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 0), Some(42));
        assert_eq!(cs.hit_test(5, 2), Some(42));
        assert_eq!(cs.hit_test(5, 3), None);
    }
}
