use crate::conversion::parse_digits;
use crate::types::{ExtensionField, ExtensionLayout};
use log::trace;

/// Characters per field group: 2-digit start, 2-digit end, 3-character code
const GROUP_LEN: usize = 7;
/// Offset of the first group, after the record letter and 2-digit count
const FIRST_GROUP_OFFSET: usize = 3;

/// Parse an `I` or `J` record into an extension layout.
///
/// Format: `I NN (SS FF CCC){NN}` with 1-based inclusive byte positions.
/// A truncated line yields the groups decoded so far, and a group whose
/// positions are not numeric is skipped.
pub fn parse_extension_layout(line: &str) -> ExtensionLayout {
    let mut layout = ExtensionLayout::new();

    let count = match line.get(1..3).and_then(parse_digits) {
        Some(count) => count as usize,
        None => return layout,
    };

    for i in 0..count {
        let offset = FIRST_GROUP_OFFSET + GROUP_LEN * i;
        let group = match line.get(offset..offset + GROUP_LEN) {
            Some(group) => group,
            None => {
                trace!("Extension record truncated after {} of {} groups: {}", i, count, line);
                break;
            }
        };

        match parse_extension_group(group) {
            Some(field) => layout.push(field),
            None => trace!("Skipping malformed extension group {:?}", group),
        }
    }

    layout
}

/// Decode one 7-character group, converting 1-based positions to 0-based
fn parse_extension_group(group: &str) -> Option<ExtensionField> {
    let start = parse_digits(group.get(0..2)?)? as usize;
    let end = parse_digits(group.get(2..4)?)? as usize;
    let code = group.get(4..7)?;

    let start = start.checked_sub(1)?;
    let end = end.checked_sub(1)?;
    if end < start {
        return None;
    }

    Some(ExtensionField::new(code, start, end))
}
