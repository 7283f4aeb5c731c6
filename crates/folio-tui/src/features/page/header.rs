//! Header navigation bar.
//!
//! The same item positions drive rendering and mouse hit-testing.

use std::ops::Range;

use folio_core::profile::Section;
use unicode_width::UnicodeWidthStr;

/// Space between the brand and the first item, and between items.
const GAP: u16 = 2;

/// One navigation item: `<n> LABEL` at columns `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub key: char,
    pub columns: Range<u16>,
}

impl NavItem {
    pub fn label(&self) -> String {
        format!("{} {}", self.key, self.section.nav_label())
    }
}

/// Lays the items out after `brand`, starting at column 1.
pub fn nav_items(brand: &str) -> Vec<NavItem> {
    let mut x = 1 + u16::try_from(brand.width()).unwrap_or(u16::MAX).saturating_add(GAP);
    Section::ALL
        .into_iter()
        .zip('1'..='6')
        .map(|(section, key)| {
            let width = u16::try_from(section.nav_label().len() + 2).unwrap_or(u16::MAX);
            let item = NavItem {
                section,
                key,
                columns: x..x.saturating_add(width),
            };
            x = x.saturating_add(width + GAP);
            item
        })
        .collect()
}

/// Section whose nav item covers column `x`.
pub fn nav_hit(brand: &str, x: u16) -> Option<Section> {
    nav_items(brand)
        .into_iter()
        .find(|item| item.columns.contains(&x))
        .map(|item| item.section)
}

/// Section bound to a number key.
pub fn section_for_key(key: char) -> Option<Section> {
    let idx = key.to_digit(10)?.checked_sub(1)?;
    Section::ALL.get(idx as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_do_not_overlap() {
        let items = nav_items("Anjali Shukla");
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].label(), "1 HOME");
        for pair in items.windows(2) {
            assert!(pair[0].columns.end < pair[1].columns.start);
        }
    }

    #[test]
    fn test_hit_test_matches_layout() {
        let items = nav_items("Folio");
        let about = &items[1];
        assert_eq!(nav_hit("Folio", about.columns.start), Some(Section::About));
        assert_eq!(nav_hit("Folio", about.columns.end - 1), Some(Section::About));
        assert_eq!(nav_hit("Folio", about.columns.end), None);
        assert_eq!(nav_hit("Folio", 0), None);
    }

    #[test]
    fn test_number_keys() {
        assert_eq!(section_for_key('1'), Some(Section::Hero));
        assert_eq!(section_for_key('6'), Some(Section::Contact));
        assert_eq!(section_for_key('0'), None);
        assert_eq!(section_for_key('7'), None);
    }
}
