#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One extension field declared by an `I` or `J` record.
///
/// Offsets are 0-based and inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtensionField {
    pub code: String,
    pub start: usize,
    pub end: usize,
}

impl ExtensionField {
    pub fn new(code: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            code: code.into(),
            start,
            end,
        }
    }

    /// Width of the field in bytes
    pub fn width(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Slice this field out of a fix line, or `None` when the line is too short.
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.end >= line.len() {
            return None;
        }
        line.get(self.start..=self.end)
    }
}

/// Ordered extension fields for one record kind. Order defines CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtensionLayout {
    fields: Vec<ExtensionField>,
}

impl ExtensionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. A repeated code replaces the earlier definition in place.
    pub fn push(&mut self, field: ExtensionField) {
        match self.fields.iter_mut().find(|f| f.code == field.code) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    pub fn fields(&self) -> &[ExtensionField] {
        &self.fields
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.code.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&ExtensionField> {
        self.fields.iter().find(|f| f.code == code)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<ExtensionField> for ExtensionLayout {
    fn from_iter<T: IntoIterator<Item = ExtensionField>>(iter: T) -> Self {
        let mut layout = ExtensionLayout::new();
        for field in iter {
            layout.push(field);
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_preserves_order() {
        let layout: ExtensionLayout = vec![
            ExtensionField::new("FXA", 35, 37),
            ExtensionField::new("SIU", 38, 39),
            ExtensionField::new("ENL", 40, 42),
        ]
        .into_iter()
        .collect();

        assert_eq!(layout.codes().collect::<Vec<_>>(), ["FXA", "SIU", "ENL"]);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn test_duplicate_code_last_wins() {
        let mut layout = ExtensionLayout::new();
        layout.push(ExtensionField::new("FXA", 35, 37));
        layout.push(ExtensionField::new("SIU", 38, 39));
        layout.push(ExtensionField::new("FXA", 40, 42));

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.fields()[0], ExtensionField::new("FXA", 40, 42));
        assert_eq!(layout.get("SIU").map(|f| f.width()), Some(2));
    }

    #[test]
    fn test_slice_bounds() {
        let field = ExtensionField::new("FXA", 2, 4);
        assert_eq!(field.slice("ab123"), Some("123"));
        assert_eq!(field.slice("ab12"), None);
    }
}
