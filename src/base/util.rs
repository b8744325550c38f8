pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Hangul and other wide characters take about two columns.
pub fn char_width(c: char) -> usize {
    if c.is_ascii() { 1 } else { 2 }
}

/// Returns the number of terminal columns `s` takes.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncates `s` to at most `width` columns, ending in `ellipsis` if anything
/// was cut. The ellipsis takes one column.
pub fn clip(s: &str, width: usize, ellipsis: char) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut used = 0;
    let mut clipped = s
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used < width
        })
        .collect::<String>();
    clipped.push(ellipsis);
    clipped
}
