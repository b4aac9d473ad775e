use crate::options::{EllipsisConfig, EllipsisLocation};
use crate::units::Pt;

/// Clips `buffer` until it fits `line_width` with the truncation marker
/// spliced in at the configured location, then performs the splice.
/// Returns the measured width of the resulting buffer.
///
/// If the buffer empties before the marker fits, the marker is omitted
/// entirely; an overflowing line claiming to fit is worse than no marker.
pub(crate) fn truncate(
    buffer: &mut String,
    config: &EllipsisConfig,
    line_width: Pt,
    mut measure: impl FnMut(&str) -> Pt,
) -> Pt {
    trim_trailing(buffer);
    let mut width = measure(&splice(buffer, config));
    while !buffer.is_empty() && width > line_width {
        drop_one(buffer, config.location);
        width = measure(&splice(buffer, config));
    }
    if !buffer.is_empty() {
        *buffer = splice(buffer, config);
    }
    measure(buffer)
}

/// The candidate line with the marker spliced in at the configured location.
fn splice(buffer: &str, config: &EllipsisConfig) -> String {
    match config.location {
        EllipsisLocation::Start => format!("{}{}", config.character, buffer),
        EllipsisLocation::Middle => {
            let midpoint = buffer.chars().count() / 2;
            let index = byte_index(buffer, midpoint);
            format!("{}{}{}", &buffer[..index], config.character, &buffer[index..])
        }
        EllipsisLocation::End => format!("{}{}", buffer, config.character),
    }
}

/// Removes one character according to the location rule, trimming whatever
/// whitespace the removal exposes.
fn drop_one(buffer: &mut String, location: EllipsisLocation) {
    match location {
        EllipsisLocation::Start => {
            buffer.remove(0);
            trim_leading(buffer);
        }
        EllipsisLocation::Middle => {
            let midpoint = buffer.chars().count() / 2;
            buffer.remove(byte_index(buffer, midpoint));
        }
        EllipsisLocation::End => {
            buffer.pop();
            trim_trailing(buffer);
        }
    }
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

fn trim_trailing(buffer: &mut String) {
    buffer.truncate(buffer.trim_end().len());
}

fn trim_leading(buffer: &mut String) {
    let trimmed = buffer.trim_start();
    if trimmed.len() != buffer.len() {
        *buffer = trimmed.to_string();
    }
}
