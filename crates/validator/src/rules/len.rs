use crate::reflect::Value;
use crate::rule::Failure;

crate::rule! {
    /// Fails when a string is longer than the bound, in bytes unless the
    /// engine counts chars.
    ///
    /// Only the upper bound is enforced; `len:3` accepts `""`.
    pub Len = "len", restrictions: 1;
    check(self, value) {
        let bound = self.context.integer_bound(0)?;
        let mode = self.context.options().string_length;
        match value {
            Value::Str(s) if mode.count(s) as i128 > i128::from(bound) => Err(Failure::Violated),
            _ => Ok(()),
        }
    }
}
