//! Next-word suggestions for partially typed paper queries.
crate::reexport!(suggestion);
crate::reexport!(suggestion_tests, test);
