use serde::Serialize;

use crate::core::color::Color;

/// Fields shared by documents and collections.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct BaseCollection {
    name: String,
    color: Option<Color>,
    selected: bool,
}

impl BaseCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Gives the capability traits access to the embedded [`BaseCollection`].
pub trait HasBase {
    fn base(&self) -> &BaseCollection;
    fn base_mut(&mut self) -> &mut BaseCollection;
}

pub trait Named {
    fn name(&self) -> &str;
}

pub trait Colored {
    fn color(&self) -> Option<Color>;
    fn set_color(&mut self, color: Color);
}

pub trait Selectable {
    fn selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
}

impl HasBase for BaseCollection {
    fn base(&self) -> &BaseCollection {
        self
    }

    fn base_mut(&mut self) -> &mut BaseCollection {
        self
    }
}

impl<T: HasBase> Named for T {
    fn name(&self) -> &str {
        &self.base().name
    }
}

impl<T: HasBase> Colored for T {
    fn color(&self) -> Option<Color> {
        self.base().color
    }

    fn set_color(&mut self, color: Color) {
        self.base_mut().color = Some(color);
    }
}

impl<T: HasBase> Selectable for T {
    fn selected(&self) -> bool {
        self.base().selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.base_mut().selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_unselected_without_color() {
        let base = BaseCollection::new("letters");
        assert_eq!(base.name(), "letters");
        assert_eq!(base.color(), None);
        assert!(!base.selected());
    }

    #[test]
    fn color_and_selection_are_mutable() {
        let mut base = BaseCollection::new("letters");
        base.set_color(Color::rgb(1, 2, 3));
        base.set_selected(true);
        assert_eq!(base.color(), Some(Color::rgb(1, 2, 3)));
        assert!(base.selected());
        assert_eq!(base.name(), "letters");
    }
}
