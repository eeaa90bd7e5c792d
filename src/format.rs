/// Left-pads `raw` with `pad` up to `width` characters, or keeps only its
/// rightmost `width` characters when it is longer.
///
/// Widths count `char`s, not bytes, so multi-byte alphabets line up.
pub fn left_pad(raw: &str, pad: char, width: usize) -> String {
    let len = raw.chars().count();
    if len >= width {
        return raw.chars().skip(len - width).collect();
    }
    std::iter::repeat(pad).take(width - len).chain(raw.chars()).collect()
}
