/// Split `s` at the first occurrence of `c`, dropping the delimiter.
///
/// Returns `None` if `c` does not occur.
pub(crate) fn split_once(s: &[u8], c: u8) -> Option<(&[u8], &[u8])> {
    s.iter()
        .position(|b| *b == c)
        .map(|n| (&s[0..n], &s[n + 1..]))
}

/// Position of the first NUL byte at or after `start`, relative to `s`.
pub(crate) fn find_nul(s: &[u8], start: usize) -> Option<usize> {
    s[start..].iter().position(|b| *b == 0).map(|n| start + n)
}

#[cfg(test)]
mod tests {
    use super::{find_nul, split_once};

    #[test]
    fn split_once_fn() {
        assert_eq!(
            split_once(b"tagger abc", b' ').unwrap(),
            (&b"tagger"[..], &b"abc"[..])
        );
        assert_eq!(
            split_once(b"tagger ", b' ').unwrap(),
            (&b"tagger"[..], &b""[..])
        );
        assert_eq!(
            split_once(b"an orange tree", b' ').unwrap(),
            (&b"an"[..], &b"orange tree"[..])
        );
        assert_eq!(split_once(b"tagger", b' '), None);
    }

    #[test]
    fn find_nul_fn() {
        assert_eq!(find_nul(b"ab\0cd\0", 0), Some(2));
        assert_eq!(find_nul(b"ab\0cd\0", 3), Some(5));
        assert_eq!(find_nul(b"ab\0cd", 3), None);
        assert_eq!(find_nul(b"", 0), None);
    }
}
