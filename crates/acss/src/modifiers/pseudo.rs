//! Pseudo-classes and pseudo-elements.

use super::Modifier;

pub const HOVER: Modifier = Modifier::selector(":hover");
pub const FOCUS: Modifier = Modifier::selector(":focus");
pub const ACTIVE: Modifier = Modifier::selector(":active");
pub const DISABLED: Modifier = Modifier::selector(":disabled");
pub const FOCUS_VISIBLE: Modifier = Modifier::selector(":focus-visible");
pub const FOCUS_WITHIN: Modifier = Modifier::selector(":focus-within");
pub const FIRST_CHILD: Modifier = Modifier::selector(":first-child");
pub const LAST_CHILD: Modifier = Modifier::selector(":last-child");
pub const VISITED: Modifier = Modifier::selector(":visited");
pub const CHECKED: Modifier = Modifier::selector(":checked");
pub const INDETERMINATE: Modifier = Modifier::selector(":indeterminate");
pub const DEFAULT: Modifier = Modifier::selector(":default");
pub const REQUIRED: Modifier = Modifier::selector(":required");
pub const VALID: Modifier = Modifier::selector(":valid");
pub const INVALID: Modifier = Modifier::selector(":invalid");
pub const IN_RANGE: Modifier = Modifier::selector(":in-range");
pub const OUT_OF_RANGE: Modifier = Modifier::selector(":out-of-range");
pub const PLACEHOLDER_SHOWN: Modifier = Modifier::selector(":placeholder-shown");
pub const AUTOFILL: Modifier = Modifier::selector(":autofill");
pub const READ_ONLY: Modifier = Modifier::selector(":read-only");
pub const EMPTY: Modifier = Modifier::selector(":empty");
pub const EVEN: Modifier = Modifier::selector(":nth-child(even)");
pub const ODD: Modifier = Modifier::selector(":nth-child(odd)");
pub const FIRST_OF_TYPE: Modifier = Modifier::selector(":first-of-type");
pub const LAST_OF_TYPE: Modifier = Modifier::selector(":last-of-type");
pub const ONLY_CHILD: Modifier = Modifier::selector(":only-child");
pub const ONLY_OF_TYPE: Modifier = Modifier::selector(":only-of-type");
pub const TARGET: Modifier = Modifier::selector(":target");
pub const OPEN: Modifier = Modifier::selector("[open]");

// Pseudo-elements. `before` and `after` only render with a `content` value.
pub const BEFORE: Modifier = Modifier::generated_content("::before");
pub const AFTER: Modifier = Modifier::generated_content("::after");
pub const PLACEHOLDER: Modifier = Modifier::selector("::placeholder");
pub const FILE: Modifier = Modifier::selector("::file-selector-button");
pub const MARKER: Modifier = Modifier::selector("::marker");
pub const SELECTION: Modifier = Modifier::selector("::selection");
pub const FIRST_LINE: Modifier = Modifier::selector("::first-line");
pub const FIRST_LETTER: Modifier = Modifier::selector("::first-letter");
pub const BACKDROP: Modifier = Modifier::selector("::backdrop");
