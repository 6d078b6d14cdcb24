use crate::ScreenSize;

/// A clickable label on the terminal, one row tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub col: ScreenSize,
    pub row: ScreenSize,
    pub label: &'static str,
}

impl Button {
    pub const fn new(col: ScreenSize, row: ScreenSize, label: &'static str) -> Self {
        Self { col, row, label }
    }

    /// Width in characters of the rendered button
    pub fn width(&self) -> ScreenSize {
        // "[ " + label + " ]"
        (self.label.chars().count() + 4) as ScreenSize
    }

    /// Whether the character at `(col, row)` is part of the button
    pub fn contains(&self, col: ScreenSize, row: ScreenSize) -> bool {
        row == self.row && col >= self.col && col - self.col < self.width()
    }

    pub fn render(&self) -> String {
        format!("[ {} ]", self.label)
    }
}

#[cfg(test)]
mod test {
    use super::Button;

    #[test]
    fn render() {
        let button = Button::new(0, 0, "Begin");

        assert_eq!(button.render(), "[ Begin ]");
        assert_eq!(button.width(), 9);
    }

    #[test]
    fn contains() {
        let button = Button::new(2, 1, "Go");

        assert!(button.contains(2, 1));
        assert!(button.contains(7, 1));
        assert!(!button.contains(8, 1));
        assert!(!button.contains(1, 1));
        assert!(!button.contains(3, 0));
    }
}
