/// Key that flips the upside-down mode, in either case.
pub const UPSIDE_DOWN_KEY: &str = "u";

#[inline]
pub fn is_upside_down_key(key: &str) -> bool {
    key.eq_ignore_ascii_case(UPSIDE_DOWN_KEY)
}
