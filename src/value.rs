//! Text detection for dynamically typed values.
//!
//! Statically typed callers never need this. It exists for boundaries where
//! values arrive type-erased, such as plugin hooks or heterogeneous
//! `Box<dyn Any>` collections.

use core::any::Any;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
#[cfg(target_has_atomic = "ptr")]
use alloc::sync::Arc;

/// Returns whether `value` holds a text value.
///
/// Owned and shared string containers count as text; `char`, numbers,
/// collections and everything else do not.
///
/// ```
/// use strkit::is_text_value;
///
/// assert!(is_text_value(&"test"));
/// assert!(is_text_value(&String::from("test")));
/// assert!(!is_text_value(&42_u32));
/// assert!(!is_text_value(&Vec::<String>::new()));
/// ```
#[must_use]
pub fn is_text_value(value: &dyn Any) -> bool {
    value.is::<String>()
        || value.is::<&'static str>()
        || value.is::<Box<str>>()
        || value.is::<Cow<'static, str>>()
        || value.is::<Rc<str>>()
        || is_shared_text(value)
}

#[cfg(target_has_atomic = "ptr")]
fn is_shared_text(value: &dyn Any) -> bool {
    value.is::<Arc<str>>()
}

#[cfg(not(target_has_atomic = "ptr"))]
const fn is_shared_text(_value: &dyn Any) -> bool {
    false
}
