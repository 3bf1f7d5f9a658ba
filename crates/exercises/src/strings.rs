/// Whether `s` can be obtained from `t` by deleting characters without
/// reordering the rest.
pub fn is_subsequence(s: &str, t: &str) -> bool {
    let mut wanted = s.chars().peekable();
    for ch in t.chars() {
        if wanted.peek() == Some(&ch) {
            wanted.next();
        }
    }
    wanted.peek().is_none()
}

/// Whether `s` reads the same both ways once everything but ASCII letters
/// and digits is dropped and letters are lowercased.
pub fn is_palindrome(s: &str) -> bool {
    let kept: Vec<u8> = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();
    kept.iter().eq(kept.iter().rev())
}
