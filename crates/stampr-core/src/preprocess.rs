pub trait Normalizer {
    // Overlay stamps come back with spaces between digit groups; only U+0020
    // is removed, tabs and newlines are kept.
    fn normalize(&self, raw: &str) -> String {
        raw.replace(' ', "")
    }
}

pub struct SpaceStripper;
impl Normalizer for SpaceStripper {}
