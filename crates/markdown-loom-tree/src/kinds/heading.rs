use super::{Variant, inline_allows};
use crate::error::{Result, out_of_range};
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

/// ATX heading holding inline content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    level: u8,
}

impl Heading {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 6;

    pub fn new(level: u8) -> Result<Self> {
        Self::check_level(level)?;
        Ok(Self { level })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: u8) -> Result<()> {
        Self::check_level(level)?;
        self.level = level;
        Ok(())
    }

    fn check_level(level: u8) -> Result<()> {
        if (Self::MIN_LEVEL..=Self::MAX_LEVEL).contains(&level) {
            Ok(())
        } else {
            Err(out_of_range(
                "level",
                format!(
                    "heading level {level} is outside {}..={}",
                    Self::MIN_LEVEL,
                    Self::MAX_LEVEL
                ),
            ))
        }
    }
}

impl Variant for Heading {
    const KIND: Kind = Kind::Heading;

    fn allows_child(&self, kind: Kind) -> bool {
        inline_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_heading(self.level);
        tree.render_content(id, writer);
        writer.write_end_heading(self.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(6)]
    fn valid_levels(#[case] level: u8) {
        assert_eq!(Heading::new(level).unwrap().level(), level);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(255)]
    fn invalid_levels(#[case] level: u8) {
        assert!(matches!(
            Heading::new(level),
            Err(Error::OutOfRange { field: "level", .. })
        ));
    }

    #[test]
    fn failed_set_level_keeps_old_value() {
        let mut heading = Heading::new(2).unwrap();
        assert!(heading.set_level(9).is_err());
        assert_eq!(heading.level(), 2);
    }
}
