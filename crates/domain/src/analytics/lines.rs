use toolchain_shared_kernel::LineCount;

/// A line is blank when it holds nothing but whitespace, the empty line included.
///
/// The ASCII information separators (`\x1c`..=`\x1f`) count as whitespace too.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Number of lines in `text` that are not blank.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Splitting on either byte leaves an
/// empty piece inside `\r\n`, which is blank and never counted.
pub fn count_non_blank_lines(text: &str) -> LineCount {
    text.split(['\n', '\r']).filter(|line| !is_blank(line)).count().into()
}
