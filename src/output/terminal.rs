//! Terminal output utilities.
//!
//! Provides padding helpers for table cells.

/// Width of a value in terminal columns, counted in chars.
pub fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Format a value centred in a field of `width` columns.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// The value padded on both sides. When the padding is odd the extra space goes
/// right of odd-length values and left of even-length ones.
/// Values wider than `width` are returned unchanged.
pub fn center_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let len = display_width(&value_str);

    if len >= width {
        value_str
    } else {
        let pad = width - len;
        let left = pad / 2 + (pad % 2) * usize::from(len % 2 == 0);
        let right = pad - left;
        format!("{}{value_str}{}", " ".repeat(left), " ".repeat(right))
    }
}
