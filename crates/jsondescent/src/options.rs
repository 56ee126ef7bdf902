/// Configuration options for [`Decoder`](crate::Decoder).
///
/// The defaults decode exactly one value starting at the first code point of
/// the input and ignore whatever follows it.
///
/// # Examples
///
/// ```rust
/// use jsondescent::{Decoder, DecoderOptions, Value};
///
/// let decoder = Decoder::new(DecoderOptions {
///     skip_leading_whitespace: true,
///     ..Default::default()
/// });
/// assert_eq!(decoder.decode_str("  null").unwrap(), Value::Null);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Whether to skip spaces and line feeds before the top-level value.
    ///
    /// Literal decoders never skip whitespace on their own, so a bare
    /// top-level literal such as ` "str"` fails unless the leading whitespace
    /// is stripped first, either by the caller or through this option.
    ///
    /// # Default
    ///
    /// `false`
    pub skip_leading_whitespace: bool,

    /// Whether to fail when non-whitespace input follows the top-level value.
    ///
    /// By default a successful decode may leave input unconsumed:
    /// `1 2` decodes to `1`. When `true`, spaces and line feeds after the value
    /// are skipped and any remaining code point yields
    /// [`ErrorKind::TrailingContent`](crate::ErrorKind::TrailingContent).
    ///
    /// # Default
    ///
    /// `false`
    pub reject_trailing_content: bool,
}
