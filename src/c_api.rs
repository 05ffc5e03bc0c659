// C ABI over a process-wide, cached NumberNamer.
// Panics are caught at the boundary and answered with the sentinel.
use crate::core::engine::NumberNamer;
use crate::core::types::GroupSeparator;
use crate::error::INVALID_INPUT_SENTINEL;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::OnceLock;

static NAMER: OnceLock<NumberNamer> = OnceLock::new();

fn namer() -> &'static NumberNamer {
    NAMER.get_or_init(NumberNamer::new)
}

fn sentinel() -> *mut c_char {
    CString::new(INVALID_INPUT_SENTINEL)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

/// Runs `f`, answering a panic with the sentinel.
fn guarded(f: impl FnOnce() -> String) -> String {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        eprintln!("[numbernames FATAL] Panic in numbernames_name_of.");
        INVALID_INPUT_SENTINEL.to_string()
    })
}

/// Returns the name of the number in `digits` as a newly allocated C string,
/// or "not a number" if `digits` is null, not UTF-8, or not a digit string.
/// Release the result with `numbernames_free_string`.
///
/// # Safety
/// `digits` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn numbernames_name_of(digits: *const c_char, newline: bool) -> *mut c_char {
    if digits.is_null() {
        return sentinel();
    }
    let input = match CStr::from_ptr(digits).to_str() {
        Ok(s) => s,
        Err(_) => return sentinel(),
    };
    let separator = if newline { GroupSeparator::Newline } else { GroupSeparator::Space };

    let name = guarded(|| namer().name_or_sentinel(input, separator.as_str()));
    CString::new(name).map(CString::into_raw).unwrap_or_else(|_| sentinel())
}

/// # Safety
/// `s` must be null or a pointer returned by `numbernames_name_of` that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn numbernames_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(digits: &str, newline: bool) -> String {
        let input = CString::new(digits).unwrap();
        unsafe {
            let raw = numbernames_name_of(input.as_ptr(), newline);
            let name = CStr::from_ptr(raw).to_str().unwrap().to_string();
            numbernames_free_string(raw);
            name
        }
    }

    #[test]
    fn names_through_the_c_abi() {
        assert_eq!(call("1002051", false), "one million two thousand and fifty one");
        assert_eq!(call("1002051", true), "one million\ntwo thousand\nand fifty one");
    }

    #[test]
    fn panics_are_answered_with_the_sentinel() {
        assert_eq!(guarded(|| panic!("boom")), INVALID_INPUT_SENTINEL);
        assert_eq!(guarded(|| "seven".to_string()), "seven");
    }

    #[test]
    fn bad_input_gets_the_sentinel() {
        assert_eq!(call("12x", false), INVALID_INPUT_SENTINEL);
        unsafe {
            let raw = numbernames_name_of(ptr::null(), false);
            assert_eq!(CStr::from_ptr(raw).to_str().unwrap(), INVALID_INPUT_SENTINEL);
            numbernames_free_string(raw);
            numbernames_free_string(ptr::null_mut());
        }
    }
}
