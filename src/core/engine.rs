use crate::cache::MemoCache;
use crate::core::types::{DigitGroup, ZillionIndex};
use crate::core::{units, zillion};
use crate::error::{NamingError, Result, INVALID_INPUT_SENTINEL};
use tracing::{debug, trace};

// The number namer owns its memo tables; the namers underneath it are pure.
pub struct NumberNamer {
    cache: MemoCache,
}

impl NumberNamer {
    pub fn new() -> Self {
        Self::with_cache(MemoCache::in_memory())
    }

    /// A namer that recomputes everything. Produces the same names as [`NumberNamer::new`].
    pub fn uncached() -> Self {
        Self::with_cache(MemoCache::disabled())
    }

    pub fn with_cache(cache: MemoCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    pub fn name_group(&self, group: DigitGroup) -> String {
        if let Some(name) = self.cache.groups.get(&group) {
            return name;
        }
        let name = units::name_group(group);
        self.cache.groups.insert(group, name.clone());
        name
    }

    pub fn partial_prefix(&self, value: u16) -> String {
        if let Some(prefix) = self.cache.prefixes.get(&value) {
            return prefix;
        }
        let prefix = zillion::partial_prefix(value);
        self.cache.prefixes.insert(value, prefix.clone());
        prefix
    }

    pub fn suffix_for(&self, n: ZillionIndex) -> String {
        if let Some(suffix) = self.cache.suffixes.get(&n) {
            trace!(n, "zillion suffix cache hit");
            return suffix;
        }
        let suffix = zillion::suffix_with(n, |v| self.partial_prefix(v));
        debug!(n, %suffix, "built zillion suffix");
        self.cache.suffixes.insert(n, suffix.clone());
        suffix
    }

    /// Names the number written by `digits`, joining the per-zillion pieces
    /// with `separator`.
    ///
    /// `"1002051"` is "one million two thousand and fifty one". Any
    /// character other than an ASCII digit is an error; an empty or all-zero
    /// string is "zero".
    pub fn name_of(&self, digits: &str, separator: &str) -> Result<String> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NamingError::InvalidInput { input: digits.to_string() });
        }

        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Ok("zero".to_string());
        }

        let key = (significant.to_string(), separator.to_string());
        if let Some(name) = self.cache.names.get(&key) {
            trace!(digits = significant.len(), "name cache hit");
            return Ok(name);
        }

        let padding = (3 - significant.len() % 3) % 3;
        let mut padded = Vec::with_capacity(significant.len() + padding);
        padded.resize(padding, b'0');
        padded.extend_from_slice(significant.as_bytes());

        // Only ASCII digits remain, so every chunk is a valid group.
        let groups: Vec<DigitGroup> = padded
            .chunks_exact(3)
            .filter_map(DigitGroup::from_ascii)
            .collect();
        let (last, leading) = match groups.split_last() {
            Some(split) => split,
            None => return Ok("zero".to_string()),
        };

        let count = groups.len();
        let mut pieces: Vec<String> = Vec::with_capacity(count);
        for (i, &group) in leading.iter().enumerate() {
            let amount = self.name_group(group);
            if amount.is_empty() {
                continue;
            }
            let zillion = (count - i - 2) as ZillionIndex;
            pieces.push(format!("{} {}", amount, self.suffix_for(zillion)));
        }

        let units = self.name_group(*last);
        if !units.is_empty() {
            if !pieces.is_empty() && !units.contains(" and ") {
                pieces.push(format!("and {units}"));
            } else {
                pieces.push(units);
            }
        }

        let name = pieces.join(separator);
        self.cache.names.insert(key, name.clone());
        Ok(name)
    }

    /// [`NumberNamer::name_of`], answering invalid input with
    /// [`INVALID_INPUT_SENTINEL`] instead of an error.
    pub fn name_or_sentinel(&self, digits: &str, separator: &str) -> String {
        self.name_of(digits, separator)
            .unwrap_or_else(|_| INVALID_INPUT_SENTINEL.to_string())
    }
}

impl Default for NumberNamer {
    fn default() -> Self {
        Self::new()
    }
}
