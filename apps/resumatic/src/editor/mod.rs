//! Section editors — the only code that produces new documents.
//!
//! # Update protocol
//! Every operation is a pure function `(&ResumeDocument, ...) -> ResumeDocument`
//! returning a complete replacement document. There is no partial-patch
//! protocol: the session swaps the whole document on every edit, which keeps
//! change detection trivial and the invariant checks centralized here.
//!
//! # Failure policy
//! Any operation that would violate a limit (section cap, duplicate skill,
//! emptying a bullet list) returns the document unchanged. Unknown ids and
//! out-of-range bullet indices do the same. No errors, no messages — the
//! editing flow stays frictionless by design.

pub mod education;
pub mod experience;
pub mod personal;
pub mod projects;
pub mod skills;
