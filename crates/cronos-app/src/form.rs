//! Analysis form state: the four text areas, the two constraint checkboxes
//! and keyboard focus.

use cronos_core::{AnalysisRequest, Constraints, Mode};

// ─────────────────────────────────────────────────────────────────────────────
// Field identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// A free-text input of the analysis form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SourceCode,
    OldCondition,
    NewCondition,
    ExpectedOutput,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::SourceCode,
        Field::OldCondition,
        Field::NewCondition,
        Field::ExpectedOutput,
    ];

    /// Element id of the matching `<textarea>` in the page
    pub fn element_id(&self) -> &'static str {
        match self {
            Field::SourceCode => "sourceCode",
            Field::OldCondition => "oldCondition",
            Field::NewCondition => "newCondition",
            Field::ExpectedOutput => "expectedOutput",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::SourceCode => "Source Code",
            Field::OldCondition => "Old Condition",
            Field::NewCondition => "New Condition",
            Field::ExpectedOutput => "Expected Output",
        }
    }

    /// Whether the field is part of the layout for `mode`
    pub fn visible_in(&self, mode: Mode) -> bool {
        match self {
            Field::OldCondition | Field::NewCondition => mode.has_conditions(),
            Field::SourceCode | Field::ExpectedOutput => true,
        }
    }
}

/// One of the two constraint checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    NoBehaviorChange,
    AllowBoundaryChange,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 2] = [
        ConstraintKind::NoBehaviorChange,
        ConstraintKind::AllowBoundaryChange,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            ConstraintKind::NoBehaviorChange => "noBehaviorChange",
            ConstraintKind::AllowBoundaryChange => "allowBoundaryChange",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConstraintKind::NoBehaviorChange => "No behavior change allowed",
            ConstraintKind::AllowBoundaryChange => "Allow boundary change",
        }
    }

    pub fn get(&self, constraints: &Constraints) -> bool {
        match self {
            ConstraintKind::NoBehaviorChange => constraints.no_behavior_change,
            ConstraintKind::AllowBoundaryChange => constraints.allow_boundary_change,
        }
    }

    pub fn set(&self, constraints: &mut Constraints, checked: bool) {
        match self {
            ConstraintKind::NoBehaviorChange => constraints.no_behavior_change = checked,
            ConstraintKind::AllowBoundaryChange => constraints.allow_boundary_change = checked,
        }
    }
}

/// Which form control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(Field),
    Constraint(ConstraintKind),
    AnalyzeButton,
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Field(Field::SourceCode)
    }
}

impl FocusTarget {
    /// Focusable controls for `mode`, in tab order
    pub fn order(mode: Mode) -> Vec<FocusTarget> {
        let mut order: Vec<FocusTarget> = Field::ALL
            .iter()
            .filter(|f| f.visible_in(mode))
            .map(|f| FocusTarget::Field(*f))
            .collect();
        order.extend(ConstraintKind::ALL.iter().map(|c| FocusTarget::Constraint(*c)));
        order.push(FocusTarget::AnalyzeButton);
        order
    }

    /// The text field this target edits, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            FocusTarget::Field(field) => Some(*field),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text area
// ─────────────────────────────────────────────────────────────────────────────

/// A single editing operation on the focused text area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorInput {
    Char(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Multi-line text buffer with a cursor
///
/// The cursor column is counted in chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for TextArea {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text area holding `text`, cursor at the end
    pub fn from_text(text: &str) -> Self {
        let mut area = Self::default();
        area.set_text(text);
        area
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the contents, moving the cursor to the end
    ///
    /// The text is kept verbatim; `text()` returns it unchanged.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.row = self.lines.len() - 1;
        self.col = self.lines[self.row].chars().count();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor position as (row, column)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Rows to display: the content height clamped to `[min_rows, max_rows]`
    pub fn display_rows(&self, min_rows: u16, max_rows: u16) -> u16 {
        let max_rows = max_rows.max(min_rows);
        let lines = u16::try_from(self.line_count()).unwrap_or(u16::MAX);
        lines.clamp(min_rows, max_rows)
    }

    pub fn apply(&mut self, input: EditorInput) {
        match input {
            EditorInput::Char(c) => self.insert_char(c),
            EditorInput::Newline => self.insert_newline(),
            EditorInput::Backspace => self.backspace(),
            EditorInput::Delete => self.delete(),
            EditorInput::Left => self.move_left(),
            EditorInput::Right => self.move_right(),
            EditorInput::Up => self.move_vertical(-1),
            EditorInput::Down => self.move_vertical(1),
            EditorInput::Home => self.col = 0,
            EditorInput::End => self.col = self.current_len(),
        }
    }

    fn current_len(&self) -> usize {
        self.lines[self.row].chars().count()
    }

    fn byte_index(&self, col: usize) -> usize {
        let line = &self.lines[self.row];
        line.char_indices().nth(col).map(|(i, _)| i).unwrap_or(line.len())
    }

    fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        let idx = self.byte_index(self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    fn insert_newline(&mut self) {
        let idx = self.byte_index(self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            let idx = self.byte_index(self.col - 1);
            self.lines[self.row].remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.current_len();
            self.lines[self.row].push_str(&line);
        }
    }

    fn delete(&mut self) {
        if self.col < self.current_len() {
            let idx = self.byte_index(self.col);
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.current_len();
        }
    }

    fn move_right(&mut self) {
        if self.col < self.current_len() {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let target = self.row as isize + delta;
        if target < 0 || target as usize >= self.lines.len() {
            return;
        }
        self.row = target as usize;
        self.col = self.col.min(self.current_len());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the user typed or ticked on the analysis form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub source_code: TextArea,
    pub old_condition: TextArea,
    pub new_condition: TextArea,
    pub expected_output: TextArea,
    pub constraints: Constraints,
    pub focus: FocusTarget,
}

impl FormState {
    pub fn field(&self, field: Field) -> &TextArea {
        match field {
            Field::SourceCode => &self.source_code,
            Field::OldCondition => &self.old_condition,
            Field::NewCondition => &self.new_condition,
            Field::ExpectedOutput => &self.expected_output,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut TextArea {
        match field {
            Field::SourceCode => &mut self.source_code,
            Field::OldCondition => &mut self.old_condition,
            Field::NewCondition => &mut self.new_condition,
            Field::ExpectedOutput => &mut self.expected_output,
        }
    }

    pub fn toggle_constraint(&mut self, kind: ConstraintKind) {
        let checked = kind.get(&self.constraints);
        kind.set(&mut self.constraints, !checked);
    }

    /// Empty every field, untick both checkboxes and return focus to the top
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the form as a request body for `mode`
    ///
    /// Condition text is only attached in CHANGE mode.
    pub fn build_request(&self, mode: Mode) -> AnalysisRequest {
        AnalysisRequest::new(
            mode,
            self.source_code.text(),
            self.expected_output.text(),
            self.constraints,
        )
        .with_conditions(self.old_condition.text(), self.new_condition.text())
    }

    /// Move focus forward (or backward) through the controls visible in `mode`
    pub fn cycle_focus(&mut self, mode: Mode, forward: bool) {
        let order = FocusTarget::order(mode);
        let current = order.iter().position(|t| *t == self.focus);
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
            (None, _) => 0,
        };
        self.focus = order[next];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextArea {
        let mut area = TextArea::new();
        for c in text.chars() {
            area.apply(EditorInput::Char(c));
        }
        area
    }

    #[test]
    fn test_typing_and_newlines() {
        let mut area = typed("ab");
        area.apply(EditorInput::Newline);
        area.apply(EditorInput::Char('c'));
        assert_eq!(area.text(), "ab\nc");
        assert_eq!(area.cursor(), (1, 1));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = TextArea::from_text("ab\ncd");
        area.apply(EditorInput::Home);
        area.apply(EditorInput::Backspace);
        assert_eq!(area.text(), "abcd");
        assert_eq!(area.cursor(), (0, 2));
    }

    #[test]
    fn test_delete_at_end_of_line_joins_next() {
        let mut area = TextArea::from_text("ab\ncd");
        area.apply(EditorInput::Up);
        area.apply(EditorInput::End);
        area.apply(EditorInput::Delete);
        assert_eq!(area.text(), "abcd");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut area = typed("héllo");
        area.apply(EditorInput::Left);
        area.apply(EditorInput::Left);
        area.apply(EditorInput::Left);
        area.apply(EditorInput::Backspace);
        assert_eq!(area.text(), "hllo");
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut area = TextArea::from_text("long line\nab");
        area.apply(EditorInput::Up);
        area.apply(EditorInput::End);
        area.apply(EditorInput::Down);
        assert_eq!(area.cursor(), (1, 2));
    }

    #[test]
    fn test_display_rows_clamps() {
        let area = TextArea::from_text("one");
        assert_eq!(area.display_rows(6, 24), 6);

        let tall = TextArea::from_text(&"x\n".repeat(40));
        assert_eq!(tall.display_rows(6, 24), 24);

        let mid = TextArea::from_text(&"x\n".repeat(9));
        assert_eq!(mid.display_rows(6, 24), 10);
    }

    #[test]
    fn test_display_rows_inverted_bounds() {
        let area = TextArea::new();
        assert_eq!(area.display_rows(8, 4), 8);
    }

    #[test]
    fn test_crlf_input_kept_verbatim() {
        let area = TextArea::from_text("a\r\nb\r");
        assert_eq!(area.text(), "a\r\nb\r");
        assert_eq!(area.line_count(), 2);
    }

    #[test]
    fn test_build_request_compliance_omits_conditions() {
        let mut form = FormState::default();
        form.source_code.set_text("def f(): pass");
        form.old_condition.set_text("x > 1");
        form.expected_output.set_text("returns None");

        let request = form.build_request(Mode::Compliance);
        assert_eq!(request.source_code, "def f(): pass");
        assert_eq!(request.expected_output, "returns None");
        assert!(request.old_condition.is_none());
        assert!(request.new_condition.is_none());
    }

    #[test]
    fn test_build_request_change_includes_empty_conditions() {
        let form = FormState::default();
        let request = form.build_request(Mode::Change);
        assert_eq!(request.old_condition.as_deref(), Some(""));
        assert_eq!(request.new_condition.as_deref(), Some(""));
        assert_eq!(request.source_code, "");
    }

    #[test]
    fn test_focus_order_skips_hidden_panels() {
        let compliance = FocusTarget::order(Mode::Compliance);
        assert!(!compliance.contains(&FocusTarget::Field(Field::OldCondition)));
        assert_eq!(compliance.len(), 5);

        let change = FocusTarget::order(Mode::Change);
        assert_eq!(change.len(), 7);
        assert_eq!(change[1], FocusTarget::Field(Field::OldCondition));
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let mut form = FormState::default();
        form.cycle_focus(Mode::Compliance, false);
        assert_eq!(form.focus, FocusTarget::AnalyzeButton);
        form.cycle_focus(Mode::Compliance, true);
        assert_eq!(form.focus, FocusTarget::Field(Field::SourceCode));
    }

    #[test]
    fn test_toggle_constraint() {
        let mut form = FormState::default();
        form.toggle_constraint(ConstraintKind::AllowBoundaryChange);
        assert!(form.constraints.allow_boundary_change);
        assert!(!form.constraints.no_behavior_change);
        form.toggle_constraint(ConstraintKind::AllowBoundaryChange);
        assert!(!form.constraints.allow_boundary_change);
    }
}
