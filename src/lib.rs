//! Compiler for a fixed-grammar paper query language.
//!
//! A sentence such as `get all papers that mention person Jane Doe and
//! organisation MIT` compiles into a parameterised SQL query over the
//! `papers`, `papers_have_entities` and `entities` tables:
//!
//! ```rust
//! let compiled = paperql::compile("get one papers that mention person Jane Doe").unwrap();
//! assert!(compiled.sql().ends_with(
//!     "WHERE (entities.entity_type='PERSON' AND entities.entity_name=$1) LIMIT 1"
//! ));
//! assert_eq!(compiled.params(), ["Jane Doe"]);
//! ```
#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(error);
reexport!(config);
reexport!(grammar);
reexport!(compiler);
reexport!(autocomplete);
reexport!(store);
reexport!(testing, test);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};
