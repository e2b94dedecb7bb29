use crate::types::Section;

/// Copy every pair of `defaults` into `section` whose key `section` lacks.
/// Existing keys always win. New keys are appended in `defaults` order.
pub fn fill_missing(section: &mut Section, defaults: &Section) {
    for (key, value) in defaults {
        if !section.contains_key(key) {
            section.insert(key.clone(), value.clone());
        }
    }
}
